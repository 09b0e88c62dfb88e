//! Container packaging generator.

use crate::domain::{
    DomainError, Operation, ProjectConfig, SettingsContext, TemplateRegistry,
};
use crate::generators::{base_context, Generator};

pub struct DockerGenerator;

impl Generator for DockerGenerator {
    fn name(&self) -> &'static str {
        "docker"
    }

    fn description(&self) -> &'static str {
        "container build definition (Dockerfile, .dockerignore)"
    }

    fn applicable(&self, config: &ProjectConfig) -> bool {
        config.docker()
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
            templates.plan("dockerfile", &ctx)?,
            templates.plan("dockerignore", &ctx)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applicability_follows_the_docker_flag() {
        let off = ProjectConfig::builder("shop", "Shop").build().unwrap();
        assert!(!DockerGenerator.applicable(&off));

        // Docker packaging still applies to umbrella containers.
        let umbrella = ProjectConfig::builder("shop", "Shop")
            .umbrella(true)
            .docker(true)
            .build()
            .unwrap();
        assert!(DockerGenerator.applicable(&umbrella));
    }
}
