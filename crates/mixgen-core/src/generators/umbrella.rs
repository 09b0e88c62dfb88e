//! Umbrella container generator.
//!
//! An umbrella project is a multi-app container: an apps/ directory, a
//! container mix.exs, and shared config. The child applications are created
//! later (inside apps/) by separate runs, so none of the per-app generators
//! participate here.

use crate::domain::{
    DomainError, Operation, ProjectConfig, SettingsContext, TemplateRegistry,
};
use crate::generators::{base_context, Generator};

pub struct UmbrellaGenerator;

const UMBRELLA_TEMPLATES: &[&str] = &[
    "apps_dir",
    "config_dir",
    "umbrella_mix_exs",
    "umbrella_config_file",
    "readme",
    "gitignore",
    "formatter",
];

impl Generator for UmbrellaGenerator {
    fn name(&self) -> &'static str {
        "umbrella"
    }

    fn description(&self) -> &'static str {
        "multi-app umbrella container (apps/, shared config)"
    }

    fn applicable(&self, config: &ProjectConfig) -> bool {
        config.umbrella()
    }

    fn contribute_settings(
        &self,
        _config: &ProjectConfig,
        _settings: &mut SettingsContext,
    ) -> Result<(), DomainError> {
        // The container has no application of its own; nothing to add.
        Ok(())
    }

    fn apply(
        &self,
        config: &ProjectConfig,
        settings: &SettingsContext,
        templates: &TemplateRegistry,
    ) -> Result<Vec<Operation>, DomainError> {
        let ctx = base_context(config, settings);
        UMBRELLA_TEMPLATES
            .iter()
            .map(|name| templates.plan(name, &ctx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_to_umbrella_projects_only() {
        let single = ProjectConfig::builder("shop", "Shop").build().unwrap();
        assert!(!UmbrellaGenerator.applicable(&single));

        let umbrella = ProjectConfig::builder("shop", "Shop")
            .umbrella(true)
            .build()
            .unwrap();
        assert!(UmbrellaGenerator.applicable(&umbrella));
    }

    #[test]
    fn contributes_nothing_to_settings() {
        let umbrella = ProjectConfig::builder("shop", "Shop")
            .umbrella(true)
            .build()
            .unwrap();
        let mut settings = SettingsContext::new();
        UmbrellaGenerator
            .contribute_settings(&umbrella, &mut settings)
            .unwrap();
        assert!(settings.dependencies().is_empty());
        assert!(settings.applications().is_empty());
    }
}
