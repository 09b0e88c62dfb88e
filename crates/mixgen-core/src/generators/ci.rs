//! CI pipeline generator.
//!
//! Always applicable: every scaffolded project gets a pipeline. The
//! pipeline template itself branches on the feature flags (database
//! service when persistence is enabled, image build job when docker is),
//! so this generator mostly binds the adapter-specific variables those
//! branches reference.

use crate::domain::{
    database::{adapter_keys, find_adapter},
    DomainError, Operation, ProjectConfig, SettingsContext, TemplateRegistry,
};
use crate::generators::{base_context, Generator};

pub struct CiGenerator;

impl Generator for CiGenerator {
    fn name(&self) -> &'static str {
        "ci"
    }

    fn description(&self) -> &'static str {
        "CI pipeline definition (.gitlab-ci.yml)"
    }

    fn applicable(&self, _config: &ProjectConfig) -> bool {
        true
    }

    fn contribute_settings(
        &self,
        _config: &ProjectConfig,
        _settings: &mut SettingsContext,
    ) -> Result<(), DomainError> {
        Ok(())
    }

    fn apply(
        &self,
        config: &ProjectConfig,
        settings: &SettingsContext,
        templates: &TemplateRegistry,
    ) -> Result<Vec<Operation>, DomainError> {
        let mut ctx = base_context(config, settings);

        if config.persistence_enabled() {
            // Unreachable after a successful settings pass, but apply must
            // not assume its callers ran one.
            let adapter = find_adapter(config.ecto_db()).ok_or_else(|| {
                DomainError::UnknownAdapter {
                    adapter: config.ecto_db().to_string(),
                    available: adapter_keys(),
                }
            })?;
            ctx = ctx.with_var("db_image", adapter.ci_image);
        }

        Ok(vec![templates.plan("ci_pipeline", &ctx)?])
    }
}
