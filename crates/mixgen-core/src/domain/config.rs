//! Project configuration.
//!
//! A [`ProjectConfig`] is built once from CLI input and never mutated. It is
//! the only input to generator applicability predicates, so everything the
//! generators branch on lives here.
//!
//! The database adapter key is deliberately carried as a plain string: it is
//! resolved against the adapter registry during the settings pass (see the
//! ecto generator), which is where an unknown adapter must fail — before any
//! operation is produced.

use crate::domain::error::DomainError;
use crate::domain::naming;

/// Immutable configuration for one scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    app_name: String,
    module_name: String,
    supervisor: bool,
    umbrella: bool,
    ecto: bool,
    ecto_db: String,
    docker: bool,
    amqp: bool,
}

impl ProjectConfig {
    /// Start building a configuration. Names are validated in
    /// [`ProjectConfigBuilder::build`].
    pub fn builder(
        app_name: impl Into<String>,
        module_name: impl Into<String>,
    ) -> ProjectConfigBuilder {
        ProjectConfigBuilder {
            app_name: app_name.into(),
            module_name: module_name.into(),
            supervisor: false,
            umbrella: false,
            ecto: false,
            ecto_db: "postgres".into(),
            docker: false,
            amqp: false,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn supervisor(&self) -> bool {
        self.supervisor
    }

    pub fn umbrella(&self) -> bool {
        self.umbrella
    }

    pub fn ecto(&self) -> bool {
        self.ecto
    }

    /// Raw adapter key as supplied by the user. Only meaningful when
    /// [`Self::ecto`] is true; resolved (and validated) at settings time.
    pub fn ecto_db(&self) -> &str {
        &self.ecto_db
    }

    pub fn docker(&self) -> bool {
        self.docker
    }

    pub fn amqp(&self) -> bool {
        self.amqp
    }

    /// Whether the persistence layer is generated. Umbrella containers hold
    /// no application code, so per-app generators are switched off there.
    pub fn persistence_enabled(&self) -> bool {
        self.ecto && !self.umbrella
    }

    /// Whether the messaging layer is generated (same umbrella rule).
    pub fn messaging_enabled(&self) -> bool {
        self.amqp && !self.umbrella
    }
}

impl std::fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.app_name, self.module_name)
    }
}

/// Builder for [`ProjectConfig`].
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    app_name: String,
    module_name: String,
    supervisor: bool,
    umbrella: bool,
    ecto: bool,
    ecto_db: String,
    docker: bool,
    amqp: bool,
}

impl ProjectConfigBuilder {
    pub fn supervisor(mut self, on: bool) -> Self {
        self.supervisor = on;
        self
    }

    pub fn umbrella(mut self, on: bool) -> Self {
        self.umbrella = on;
        self
    }

    pub fn ecto(mut self, on: bool) -> Self {
        self.ecto = on;
        self
    }

    pub fn ecto_db(mut self, adapter: impl Into<String>) -> Self {
        self.ecto_db = adapter.into();
        self
    }

    pub fn docker(mut self, on: bool) -> Self {
        self.docker = on;
        self
    }

    pub fn amqp(mut self, on: bool) -> Self {
        self.amqp = on;
        self
    }

    /// Validate names and freeze the configuration.
    ///
    /// The adapter key is *not* checked here; see the module docs.
    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        naming::validate_app_name(&self.app_name)?;
        naming::validate_module_name(&self.module_name)?;

        Ok(ProjectConfig {
            app_name: self.app_name,
            module_name: self.module_name,
            supervisor: self.supervisor,
            umbrella: self.umbrella,
            ecto: self.ecto,
            ecto_db: self.ecto_db,
            docker: self.docker,
            amqp: self.amqp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = ProjectConfig::builder("shop", "Shop").build().unwrap();
        assert!(!config.supervisor());
        assert!(!config.umbrella());
        assert!(!config.ecto());
        assert_eq!(config.ecto_db(), "postgres");
        assert!(!config.docker());
        assert!(!config.amqp());
    }

    #[test]
    fn builder_rejects_invalid_app_name() {
        let result = ProjectConfig::builder("My-Shop", "MyShop").build();
        assert!(matches!(result, Err(DomainError::InvalidAppName { .. })));
    }

    #[test]
    fn builder_rejects_invalid_module_name() {
        let result = ProjectConfig::builder("shop", "shop").build();
        assert!(matches!(result, Err(DomainError::InvalidModuleName { .. })));
    }

    #[test]
    fn unknown_adapter_is_not_rejected_at_build_time() {
        // Adapter validation is a settings-pass concern; the builder must
        // accept any string so the failure happens in exactly one place.
        let config = ProjectConfig::builder("shop", "Shop")
            .ecto(true)
            .ecto_db("oracle")
            .build()
            .unwrap();
        assert_eq!(config.ecto_db(), "oracle");
    }

    #[test]
    fn umbrella_disables_per_app_features() {
        let config = ProjectConfig::builder("shop", "Shop")
            .umbrella(true)
            .ecto(true)
            .amqp(true)
            .build()
            .unwrap();
        assert!(!config.persistence_enabled());
        assert!(!config.messaging_enabled());
    }

    #[test]
    fn single_app_enables_per_app_features() {
        let config = ProjectConfig::builder("shop", "Shop")
            .ecto(true)
            .amqp(true)
            .build()
            .unwrap();
        assert!(config.persistence_enabled());
        assert!(config.messaging_enabled());
    }
}
