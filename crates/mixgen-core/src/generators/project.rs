//! Base single-application project generator.
//!
//! Produces the skeleton every non-umbrella project shares: mix.exs, the
//! per-environment config files, the top-level module (plus an application
//! module when a supervision tree is requested), the env file, and the test
//! scaffolding.
//!
//! Its `apply` is the reason the settings pass runs to completion first:
//! mix.exs and the config files embed the dependency list, application
//! list, and config fragments contributed by every other generator.

use tracing::debug;

use crate::domain::{
    DomainError, Operation, ProjectConfig, SettingsContext, TemplateRegistry,
};
use crate::generators::{base_context, Generator};

pub struct ProjectGenerator;

/// Templates every single-app project receives, in emission order.
const BASE_TEMPLATES: &[&str] = &[
    "config_dir",
    "lib_dir",
    "test_dir",
    "mix_exs",
    "readme",
    "gitignore",
    "formatter",
    "env_file",
    "config_main_file",
    "config_dev_file",
    "config_test_file",
    "config_prod_file",
    "app_module",
    "test_helper",
    "app_test",
];

impl Generator for ProjectGenerator {
    fn name(&self) -> &'static str {
        "project"
    }

    fn description(&self) -> &'static str {
        "base application skeleton (mix.exs, config, lib, tests)"
    }

    fn applicable(&self, config: &ProjectConfig) -> bool {
        !config.umbrella()
    }

    fn contribute_settings(
        &self,
        _config: &ProjectConfig,
        settings: &mut SettingsContext,
    ) -> Result<(), DomainError> {
        settings.add_application("logger");
        Ok(())
    }

    fn apply(
        &self,
        config: &ProjectConfig,
        settings: &SettingsContext,
        templates: &TemplateRegistry,
    ) -> Result<Vec<Operation>, DomainError> {
        let ctx = base_context(config, settings)
            .with_var("children_block", supervision_children(config));
        let mut operations = Vec::with_capacity(BASE_TEMPLATES.len() + 2);

        for name in BASE_TEMPLATES {
            operations.push(templates.plan(name, &ctx)?);
        }

        if config.supervisor() {
            operations.push(templates.plan("app_subdir", &ctx)?);
            operations.push(templates.plan("application_module", &ctx)?);
        }

        debug!(count = operations.len(), "project operations planned");
        Ok(operations)
    }
}

/// Supervision tree children for the application module, one indented entry
/// per line (no trailing comma; the template owns the surrounding list).
fn supervision_children(config: &ProjectConfig) -> String {
    let mut children = Vec::new();
    if config.persistence_enabled() {
        children.push(format!("      {}.Repo", config.module_name()));
    }
    if config.messaging_enabled() {
        children.push(format!("      {}.Broker", config.module_name()));
    }
    children.join(",\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProjectConfig {
        ProjectConfig::builder("shop", "Shop").build().unwrap()
    }

    #[test]
    fn applies_to_single_app_projects_only() {
        assert!(ProjectGenerator.applicable(&config()));

        let umbrella = ProjectConfig::builder("shop", "Shop")
            .umbrella(true)
            .build()
            .unwrap();
        assert!(!ProjectGenerator.applicable(&umbrella));
    }

    #[test]
    fn supervision_children_follow_the_feature_flags() {
        let plain = config();
        assert_eq!(supervision_children(&plain), "");

        let full = ProjectConfig::builder("shop", "Shop")
            .supervisor(true)
            .ecto(true)
            .amqp(true)
            .build()
            .unwrap();
        assert_eq!(
            supervision_children(&full),
            "      Shop.Repo,\n      Shop.Broker"
        );
    }

    #[test]
    fn contributes_the_logger_application() {
        let mut settings = SettingsContext::new();
        ProjectGenerator
            .contribute_settings(&config(), &mut settings)
            .unwrap();
        assert_eq!(settings.applications(), ["logger"]);
        assert!(settings.dependencies().is_empty());
    }
}
