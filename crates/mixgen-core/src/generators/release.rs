//! Release packaging generator.
//!
//! Emits the runtime configuration and the shared pre-start hook script.
//! The hook file is the append target for other generators (ecto adds its
//! migrate step there), which is why this generator is registered before
//! them: the file must be created before anything appends to it.

use crate::domain::{
    DomainError, Operation, ProjectConfig, SettingsContext, TemplateRegistry,
};
use crate::generators::{base_context, Generator};

pub struct ReleaseGenerator;

impl Generator for ReleaseGenerator {
    fn name(&self) -> &'static str {
        "release"
    }

    fn description(&self) -> &'static str {
        "release packaging (runtime config, pre-start hook)"
    }

    fn applicable(&self, config: &ProjectConfig) -> bool {
        !config.umbrella()
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
        let ctx = base_context(config, settings);
        Ok(vec![
            templates.plan("rel_hooks_dir", &ctx)?,
            templates.plan("runtime_config", &ctx)?,
            templates.plan("pre_start_hook", &ctx)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umbrella_containers_get_no_release_config() {
        let umbrella = ProjectConfig::builder("shop", "Shop")
            .umbrella(true)
            .build()
            .unwrap();
        assert!(!ReleaseGenerator.applicable(&umbrella));

        let single = ProjectConfig::builder("shop", "Shop").build().unwrap();
        assert!(ReleaseGenerator.applicable(&single));
    }
}
