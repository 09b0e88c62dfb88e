//! Persistence layer generator.
//!
//! The only generator with real branching: the database adapter key selects
//! the driver dependency, the connection config, and the CI init script.
//! The key is resolved against [`crate::domain::database::ADAPTER_REGISTRY`]
//! in `contribute_settings` — an unknown adapter must abort the run during
//! the settings pass, before a single operation exists, so a project that
//! cannot be fully configured produces no partial output.

use tracing::debug;

use crate::domain::{
    database::{adapter_keys, find_adapter, AdapterDef},
    ConfigEnv, Dependency, DomainError, Operation, ProjectConfig, SettingsContext,
    TemplateRegistry,
};
use crate::generators::{base_context, Generator};

pub struct EctoGenerator;

impl EctoGenerator {
    fn adapter(config: &ProjectConfig) -> Result<&'static AdapterDef, DomainError> {
        find_adapter(config.ecto_db()).ok_or_else(|| DomainError::UnknownAdapter {
            adapter: config.ecto_db().to_string(),
            available: adapter_keys(),
        })
    }
}

impl Generator for EctoGenerator {
    fn name(&self) -> &'static str {
        "ecto"
    }

    fn description(&self) -> &'static str {
        "Ecto persistence layer (repo, migrations, seeds, db scripts)"
    }

    fn applicable(&self, config: &ProjectConfig) -> bool {
        config.persistence_enabled()
    }

    fn contribute_settings(
        &self,
        config: &ProjectConfig,
        settings: &mut SettingsContext,
    ) -> Result<(), DomainError> {
        let adapter = Self::adapter(config)?;
        debug!(adapter = adapter.key, "persistence adapter resolved");

        settings.add_dependency(Dependency::new("ecto_sql", "~> 3.11"));
        settings.add_dependency(Dependency::new(adapter.driver, adapter.driver_requirement));
        settings.add_application("ecto");
        settings.add_application(adapter.driver);

        let app = config.app_name();
        let module = config.module_name();

        settings.append_config(
            ConfigEnv::Main,
            &format!("config :{app}, ecto_repos: [{module}.Repo]"),
        );
        settings.append_config(
            ConfigEnv::Dev,
            &format!(
                "config :{app}, {module}.Repo,\n  \
                 username: \"{user}\",\n  \
                 password: \"{pass}\",\n  \
                 hostname: \"localhost\",\n  \
                 database: \"{app}_dev\",\n  \
                 pool_size: 10",
                user = adapter.dev_username,
                pass = adapter.dev_password,
            ),
        );
        settings.append_config(
            ConfigEnv::Test,
            &format!(
                "config :{app}, {module}.Repo,\n  \
                 username: \"{user}\",\n  \
                 password: \"{pass}\",\n  \
                 hostname: \"localhost\",\n  \
                 database: \"{app}_test\",\n  \
                 pool: Ecto.Adapters.SQL.Sandbox",
                user = adapter.dev_username,
                pass = adapter.dev_password,
            ),
        );
        settings.append_config(
            ConfigEnv::Prod,
            &format!(
                "config :{app}, {module}.Repo,\n  \
                 url: System.get_env(\"DATABASE_URL\"),\n  \
                 pool_size: 15"
            ),
        );

        Ok(())
    }

    fn apply(
        &self,
        config: &ProjectConfig,
        settings: &SettingsContext,
        templates: &TemplateRegistry,
    ) -> Result<Vec<Operation>, DomainError> {
        let adapter = Self::adapter(config)?;

        let dev_url = format!(
            "{scheme}://{user}:{pass}@localhost/{app}_dev",
            scheme = adapter.url_scheme,
            user = adapter.dev_username,
            pass = adapter.dev_password,
            app = config.app_name(),
        );
        let ctx = base_context(config, settings)
            .with_var("adapter_module", adapter.adapter_module)
            .with_var("db_url", dev_url);

        Ok(vec![
            templates.plan("app_subdir", &ctx)?,
            templates.plan("repo_module", &ctx)?,
            templates.plan("data_tasks", &ctx)?,
            templates.plan("migrations_dir", &ctx)?,
            templates.plan("seeds_script", &ctx)?,
            templates.plan("ci_dir", &ctx)?,
            templates.plan(adapter.init_script, &ctx)?,
            templates.plan("ecto_env_fragment", &ctx)?,
            templates.plan("ecto_pre_start_fragment", &ctx)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ecto_config(db: &str) -> ProjectConfig {
        ProjectConfig::builder("shop", "Shop")
            .ecto(true)
            .ecto_db(db)
            .build()
            .unwrap()
    }

    #[test]
    fn inapplicable_without_ecto_or_under_umbrella() {
        let plain = ProjectConfig::builder("shop", "Shop").build().unwrap();
        assert!(!EctoGenerator.applicable(&plain));

        let umbrella = ProjectConfig::builder("shop", "Shop")
            .umbrella(true)
            .ecto(true)
            .build()
            .unwrap();
        assert!(!EctoGenerator.applicable(&umbrella));

        assert!(EctoGenerator.applicable(&ecto_config("postgres")));
    }

    #[test]
    fn postgres_settings_contain_driver_and_databases() {
        let mut settings = SettingsContext::new();
        EctoGenerator
            .contribute_settings(&ecto_config("postgres"), &mut settings)
            .unwrap();

        assert!(settings.has_dependency("postgrex"));
        assert!(settings.has_dependency("ecto_sql"));
        assert!(!settings.has_dependency("myxql"));
        assert!(settings.config(ConfigEnv::Dev).contains("database: \"shop_dev\""));
        assert!(settings.config(ConfigEnv::Test).contains("database: \"shop_test\""));
        assert!(settings.config(ConfigEnv::Main).contains("Shop.Repo"));
        assert!(settings.config(ConfigEnv::Prod).contains("DATABASE_URL"));
    }

    #[test]
    fn mysql_settings_select_the_other_driver() {
        let mut settings = SettingsContext::new();
        EctoGenerator
            .contribute_settings(&ecto_config("mysql"), &mut settings)
            .unwrap();

        assert!(settings.has_dependency("myxql"));
        assert!(!settings.has_dependency("postgrex"));
    }

    #[test]
    fn unknown_adapter_fails_in_the_settings_pass() {
        let mut settings = SettingsContext::new();
        let err = EctoGenerator
            .contribute_settings(&ecto_config("oracle"), &mut settings)
            .unwrap_err();

        match err {
            DomainError::UnknownAdapter { adapter, available } => {
                assert_eq!(adapter, "oracle");
                assert!(available.contains(&"postgres"));
                assert!(available.contains(&"mysql"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Nothing may have leaked into the shared context.
        assert!(settings.dependencies().is_empty());
        assert!(settings.applications().is_empty());
    }
}
