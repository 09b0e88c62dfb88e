//! Scaffold service - the composition driver.
//!
//! Coordinates a generation run as a bounded two-pass fold over the
//! registered generators:
//!
//! 1. **Settings pass**: every applicable generator, in registration order,
//!    appends to the shared [`SettingsContext`]. This is where adapter
//!    validation fires, so a misconfigured project aborts before any
//!    operation exists.
//! 2. **Apply pass**: the same generators, same order, read the now-final
//!    settings and emit their operations.
//!
//! [`ScaffoldService::plan`] runs both passes without touching storage
//! (this backs `--dry-run` and the engine tests);
//! [`ScaffoldService::scaffold`] plans and then executes against the
//! filesystem port. Execution is synchronous and sequential. There is no
//! rollback: a mid-run filesystem error aborts and leaves the partial tree
//! for the user to inspect.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::application::ApplicationError;
use crate::domain::{Operation, ProjectConfig, SettingsContext, TemplateRegistry};
use crate::error::{MixgenError, MixgenResult};
use crate::generators::{self, Generator};

/// The outcome of the two passes: final settings plus the ordered
/// operation list.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub settings: SettingsContext,
    pub operations: Vec<Operation>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    generators: Vec<Box<dyn Generator>>,
    templates: TemplateRegistry,
    filesystem: Box<dyn super::ports::Filesystem>,
}

impl ScaffoldService {
    /// Create a service with the standard generator list.
    pub fn new(
        templates: TemplateRegistry,
        filesystem: Box<dyn super::ports::Filesystem>,
    ) -> Self {
        Self {
            generators: generators::registered(),
            templates,
            filesystem,
        }
    }

    /// Compute the generation plan for a configuration. Pure with respect
    /// to the filesystem.
    #[instrument(skip_all, fields(app = %config.app_name()))]
    pub fn plan(&self, config: &ProjectConfig) -> MixgenResult<GenerationPlan> {
        let active: Vec<&dyn Generator> = self
            .generators
            .iter()
            .map(|g| g.as_ref())
            .filter(|g| g.applicable(config))
            .collect();
        debug!(
            generators = ?active.iter().map(|g| g.name()).collect::<Vec<_>>(),
            "applicable generators selected"
        );

        // Pass 1: settings. Later generators see earlier contributions.
        let mut settings = SettingsContext::new();
        for generator in &active {
            generator
                .contribute_settings(config, &mut settings)
                .map_err(MixgenError::Domain)?;
        }

        // Pass 2: apply, against the finalized settings.
        let mut operations = Vec::new();
        for generator in &active {
            let ops = generator
                .apply(config, &settings, &self.templates)
                .map_err(MixgenError::Domain)?;
            debug!(generator = generator.name(), count = ops.len(), "operations planned");
            operations.extend(ops);
        }

        Ok(GenerationPlan {
            settings,
            operations,
        })
    }

    /// Plan and execute a generation run into `dest_root`.
    #[instrument(skip_all, fields(app = %config.app_name(), dest = %dest_root.display()))]
    pub fn scaffold(
        &self,
        config: &ProjectConfig,
        dest_root: &Path,
    ) -> MixgenResult<GenerationPlan> {
        if self.filesystem.exists(dest_root) {
            return Err(ApplicationError::DestinationExists {
                path: dest_root.to_path_buf(),
            }
            .into());
        }

        let plan = self.plan(config)?;
        info!(operations = plan.operations.len(), "generation plan computed");

        self.execute(&plan, dest_root)?;

        info!("scaffold completed");
        Ok(plan)
    }

    /// Execute a plan's operations in order against the filesystem port.
    fn execute(&self, plan: &GenerationPlan, root: &Path) -> MixgenResult<()> {
        self.filesystem.create_dir_all(root)?;

        for operation in &plan.operations {
            match operation {
                Operation::MakeDirectory { path } => {
                    self.filesystem.create_dir_all(&root.join(path))?;
                }
                Operation::CopyTemplate {
                    source,
                    dest,
                    context,
                } => {
                    let descriptor = self.templates.resolve(source).map_err(MixgenError::Domain)?;
                    let content = context.render(descriptor.body).map_err(MixgenError::Domain)?;
                    let path = root.join(dest);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_new(&path, &content)?;
                }
                Operation::AppendTemplate {
                    source,
                    dest,
                    context,
                } => {
                    let descriptor = self.templates.resolve(source).map_err(MixgenError::Domain)?;
                    let content = context.render(descriptor.body).map_err(MixgenError::Domain)?;
                    let path = root.join(dest);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.append(&path, &content)?;
                }
            }
        }

        Ok(())
    }
}
