//! Feature generators.
//!
//! Each generator contributes one conditionally-applicable slice of the
//! scaffolded project. The contract is three operations, driven in two
//! strict global passes by the scaffold service:
//!
//! 1. `applicable(config)` — total predicate; only generators returning
//!    true participate further.
//! 2. `contribute_settings(config, settings)` — append dependencies,
//!    application names, and config fragments to the shared accumulator.
//!    Runs for ALL applicable generators before any apply. A generator may
//!    rely on contributions from generators registered before it, never
//!    after. The only permitted failure is an invalid adapter key.
//! 3. `apply(config, settings, templates)` — read the now-final settings
//!    and return the operations to perform. Must not mutate settings; may
//!    fail only on template errors (unresolvable name, unbound variable).
//!
//! Registration order is a semantic property, not an accident of module
//! layout: it fixes both settings visibility and operation execution order.
//! It is encoded exactly once, in [`registered`], and pinned by a test.

mod amqp;
mod ci;
mod docker;
mod ecto;
mod project;
mod release;
mod umbrella;

pub use amqp::AmqpGenerator;
pub use ci::CiGenerator;
pub use docker::DockerGenerator;
pub use ecto::EctoGenerator;
pub use project::ProjectGenerator;
pub use release::ReleaseGenerator;
pub use umbrella::UmbrellaGenerator;

use crate::domain::{
    ConfigEnv, DomainError, Operation, ProjectConfig, RenderContext, SettingsContext,
    TemplateRegistry,
};

/// The three-operation generator contract. See the module docs.
pub trait Generator: Send + Sync {
    /// Stable name, used in logs and the `mixgen list` table.
    fn name(&self) -> &'static str;

    /// One-line description of what the generator produces.
    fn description(&self) -> &'static str;

    fn applicable(&self, config: &ProjectConfig) -> bool;

    fn contribute_settings(
        &self,
        config: &ProjectConfig,
        settings: &mut SettingsContext,
    ) -> Result<(), DomainError>;

    fn apply(
        &self,
        config: &ProjectConfig,
        settings: &SettingsContext,
        templates: &TemplateRegistry,
    ) -> Result<Vec<Operation>, DomainError>;
}

/// The closed generator list, in registration order.
///
/// `release` precedes `ecto` so the shared pre-start hook file exists
/// before ecto's append lands on it.
pub fn registered() -> Vec<Box<dyn Generator>> {
    vec![
        Box::new(ProjectGenerator),
        Box::new(UmbrellaGenerator),
        Box::new(ReleaseGenerator),
        Box::new(EctoGenerator),
        Box::new(AmqpGenerator),
        Box::new(DockerGenerator),
        Box::new(CiGenerator),
    ]
}

/// Bindings every generator starts from: project identity, the rendered
/// settings blocks, and the feature flags templates branch on.
pub(crate) fn base_context(config: &ProjectConfig, settings: &SettingsContext) -> RenderContext {
    RenderContext::new()
        .with_var("app", config.app_name())
        .with_var("module", config.module_name())
        .with_var("deps_block", settings.deps_block())
        .with_var("apps_block", settings.apps_block())
        .with_var("config_main", settings.config(ConfigEnv::Main))
        .with_var("config_dev", settings.config(ConfigEnv::Dev))
        .with_var("config_test", settings.config(ConfigEnv::Test))
        .with_var("config_prod", settings.config(ConfigEnv::Prod))
        .with_flag("sup", config.supervisor())
        .with_flag("umbrella", config.umbrella())
        .with_flag("ecto", config.persistence_enabled())
        .with_flag("amqp", config.messaging_enabled())
        .with_flag("docker", config.docker())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(build: impl FnOnce(crate::domain::ProjectConfigBuilder) -> crate::domain::ProjectConfigBuilder) -> ProjectConfig {
        build(ProjectConfig::builder("shop", "Shop")).build().unwrap()
    }

    #[test]
    fn registration_order_is_fixed() {
        let names: Vec<_> = registered().iter().map(|g| g.name()).collect();
        assert_eq!(
            names,
            ["project", "umbrella", "release", "ecto", "amqp", "docker", "ci"]
        );
    }

    #[test]
    fn applicability_matrix_single_app() {
        let config = config(|b| b.ecto(true).docker(true));
        let applicable: Vec<_> = registered()
            .iter()
            .filter(|g| g.applicable(&config))
            .map(|g| g.name())
            .collect();
        assert_eq!(applicable, ["project", "release", "ecto", "docker", "ci"]);
    }

    #[test]
    fn applicability_matrix_umbrella() {
        // Umbrella containers drop every per-app generator, persistence
        // included, regardless of the ecto flag.
        let config = config(|b| b.umbrella(true).ecto(true).amqp(true));
        let applicable: Vec<_> = registered()
            .iter()
            .filter(|g| g.applicable(&config))
            .map(|g| g.name())
            .collect();
        assert_eq!(applicable, ["umbrella", "ci"]);
    }

    #[test]
    fn base_context_binds_identity_and_flags() {
        let config = config(|b| b.supervisor(true));
        let settings = SettingsContext::new();
        let ctx = base_context(&config, &settings);
        assert_eq!(ctx.var("app"), Some("shop"));
        assert_eq!(ctx.var("module"), Some("Shop"));
        assert_eq!(ctx.flag("sup"), Some(true));
        assert_eq!(ctx.flag("ecto"), Some(false));
    }
}
