//! Shared settings accumulator.
//!
//! The [`SettingsContext`] is built incrementally during the settings pass:
//! each applicable generator appends its dependencies, application names,
//! and configuration fragments, in registration order. Generators may only
//! append — nothing is ever removed or reordered — so a later generator can
//! rely on earlier contributions being present, never the reverse.
//!
//! After the settings pass the context is treated as read-only input to the
//! apply pass (enforced by `&SettingsContext` in the generator contract).

/// A single mix dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    name: String,
    requirement: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// Render as a mix.exs deps entry: `{:postgrex, "~> 0.17"}`.
    pub fn mix_entry(&self) -> String {
        format!("{{:{}, \"{}\"}}", self.name, self.requirement)
    }
}

/// The four per-environment configuration slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigEnv {
    Main,
    Dev,
    Test,
    Prod,
}

/// Append-only accumulator shared across generators.
#[derive(Debug, Clone, Default)]
pub struct SettingsContext {
    dependencies: Vec<Dependency>,
    applications: Vec<String>,
    config_main: String,
    config_dev: String,
    config_test: String,
    config_prod: String,
}

impl SettingsContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dependency. Deduplicated by name; the first writer wins and
    /// a duplicate append is reported as `false`.
    pub fn add_dependency(&mut self, dependency: Dependency) -> bool {
        if self.dependencies.iter().any(|d| d.name == dependency.name) {
            return false;
        }
        self.dependencies.push(dependency);
        true
    }

    /// Append an OTP application name (deduplicated, order preserved).
    pub fn add_application(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.applications.iter().any(|a| *a == name) {
            return false;
        }
        self.applications.push(name);
        true
    }

    /// Append a fragment to one of the configuration slots. Fragments are
    /// separated by a blank line when the slot is already populated.
    pub fn append_config(&mut self, env: ConfigEnv, fragment: &str) {
        let slot = match env {
            ConfigEnv::Main => &mut self.config_main,
            ConfigEnv::Dev => &mut self.config_dev,
            ConfigEnv::Test => &mut self.config_test,
            ConfigEnv::Prod => &mut self.config_prod,
        };
        if !slot.is_empty() && !slot.ends_with("\n\n") {
            slot.push('\n');
        }
        slot.push_str(fragment);
        if !slot.ends_with('\n') {
            slot.push('\n');
        }
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn applications(&self) -> &[String] {
        &self.applications
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d.name == name)
    }

    pub fn config(&self, env: ConfigEnv) -> &str {
        match env {
            ConfigEnv::Main => &self.config_main,
            ConfigEnv::Dev => &self.config_dev,
            ConfigEnv::Test => &self.config_test,
            ConfigEnv::Prod => &self.config_prod,
        }
    }

    /// Render the accumulated dependency list as the inside of a mix.exs
    /// deps list (one indented entry per line, no trailing comma).
    pub fn deps_block(&self) -> String {
        self.dependencies
            .iter()
            .map(|d| format!("      {}", d.mix_entry()))
            .collect::<Vec<_>>()
            .join(",\n")
    }

    /// Render the application list as `:logger, :ecto, ...`.
    pub fn apps_block(&self) -> String {
        self.applications
            .iter()
            .map(|a| format!(":{a}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependencies_deduplicate_by_name_first_wins() {
        let mut settings = SettingsContext::new();
        assert!(settings.add_dependency(Dependency::new("ecto_sql", "~> 3.11")));
        assert!(!settings.add_dependency(Dependency::new("ecto_sql", "~> 99.0")));

        assert_eq!(settings.dependencies().len(), 1);
        assert_eq!(settings.dependencies()[0].requirement(), "~> 3.11");
    }

    #[test]
    fn applications_keep_insertion_order() {
        let mut settings = SettingsContext::new();
        settings.add_application("logger");
        settings.add_application("ecto");
        settings.add_application("logger");

        assert_eq!(settings.applications(), ["logger", "ecto"]);
        assert_eq!(settings.apps_block(), ":logger, :ecto");
    }

    #[test]
    fn config_fragments_accumulate_per_slot() {
        let mut settings = SettingsContext::new();
        settings.append_config(ConfigEnv::Dev, "config :shop, a: 1");
        settings.append_config(ConfigEnv::Dev, "config :shop, b: 2\n");
        settings.append_config(ConfigEnv::Prod, "config :shop, c: 3");

        let dev = settings.config(ConfigEnv::Dev);
        assert!(dev.contains("a: 1"));
        assert!(dev.contains("b: 2"));
        assert!(dev.ends_with('\n'));
        assert_eq!(settings.config(ConfigEnv::Test), "");
        assert!(settings.config(ConfigEnv::Prod).contains("c: 3"));
    }

    #[test]
    fn deps_block_has_no_trailing_comma() {
        let mut settings = SettingsContext::new();
        settings.add_dependency(Dependency::new("ecto_sql", "~> 3.11"));
        settings.add_dependency(Dependency::new("postgrex", "~> 0.17"));

        let block = settings.deps_block();
        assert_eq!(
            block,
            "      {:ecto_sql, \"~> 3.11\"},\n      {:postgrex, \"~> 0.17\"}"
        );
    }

    #[test]
    fn empty_context_renders_empty_blocks() {
        let settings = SettingsContext::new();
        assert_eq!(settings.deps_block(), "");
        assert_eq!(settings.apps_block(), "");
    }
}
