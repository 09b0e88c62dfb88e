//! Implementation of the `mixgen new` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectConfig`, call the
//! core scaffold service, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use mixgen_adapters::{builtin_registry, LocalFilesystem};
use mixgen_core::{
    application::ScaffoldService,
    domain::{naming, Operation, ProjectConfig},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `mixgen new` command.
///
/// Dispatch sequence:
/// 1. Resolve the project path and derive application/module names
/// 2. Build a core `ProjectConfig` (name validation happens there)
/// 3. Confirm with the user unless `--yes` or `--quiet`
/// 4. Early-exit with the operation list if `--dry-run`
/// 5. Execute scaffolding via `ScaffoldService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(path = %args.path))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve names
    let project_dir = resolve_project_dir(&args.path)?;
    let app_name = match &args.app {
        Some(name) => name.clone(),
        None => naming::app_name_from_path(&args.path),
    };
    let module_name = match &args.module {
        Some(name) => name.clone(),
        None => naming::module_name_from_app(&app_name),
    };
    let adapter = args
        .db
        .clone()
        .or_else(|| config.defaults.db.clone())
        .unwrap_or_else(|| "postgres".into());

    // 2. Build the immutable configuration; app/module validation lives in
    //    the core builder, adapter validation in the settings pass.
    let project = ProjectConfig::builder(&app_name, &module_name)
        .supervisor(args.sup || config.defaults.supervisor)
        .umbrella(args.umbrella)
        .ecto(args.ecto)
        .ecto_db(adapter)
        .docker(args.docker)
        .amqp(args.amqp)
        .build()
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        app = project.app_name(),
        module = project.module_name(),
        sup = project.supervisor(),
        umbrella = project.umbrella(),
        ecto = project.ecto(),
        docker = project.docker(),
        amqp = project.amqp(),
        "project configuration resolved"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&project, &project_dir, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    let service = ScaffoldService::new(
        builtin_registry().map_err(CliError::Core)?,
        Box::new(LocalFilesystem::new()),
    );

    // 4. Dry run: compute the plan, describe it, write nothing.
    if args.dry_run {
        let plan = service.plan(&project).map_err(CliError::Core)?;
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            project.app_name(),
            project_dir.display(),
        ))?;
        for operation in &plan.operations {
            output.print(&describe_operation(operation))?;
        }
        return Ok(());
    }

    // 5. Scaffold
    output.header(&format!("Creating '{}'...", project.app_name()))?;
    info!(app = project.app_name(), dest = %project_dir.display(), "scaffold started");

    let plan = service
        .scaffold(&project, &project_dir)
        .map_err(CliError::Core)?;

    info!(operations = plan.operations.len(), "scaffold completed");

    // 6. Success + next steps
    output.success(&format!(
        "Project '{}' created at {}",
        project.app_name(),
        project_dir.display(),
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", project_dir.display()))?;
        output.print("  mix deps.get")?;
        if project.persistence_enabled() {
            output.print("  mix ecto.create")?;
        }
        output.print("  mix test")?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

fn resolve_project_dir(path: &str) -> CliResult<PathBuf> {
    if path.trim().is_empty() {
        return Err(CliError::InvalidProjectPath {
            path: path.into(),
            reason: "path cannot be empty".into(),
        });
    }
    let dir = PathBuf::from(path);
    if dir.file_name().is_none() {
        return Err(CliError::InvalidProjectPath {
            path: path.into(),
            reason: "no usable final path component".into(),
        });
    }
    Ok(dir)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn describe_operation(operation: &Operation) -> String {
    match operation {
        Operation::MakeDirectory { path } => format!("  mkdir  {}", path.display()),
        Operation::CopyTemplate { dest, .. } => format!("  create {}", dest.display()),
        Operation::AppendTemplate { dest, .. } => format!("  append {}", dest.display()),
    }
}

fn show_configuration(
    project: &ProjectConfig,
    project_dir: &std::path::Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Application: {}", project.app_name()))?;
    out.print(&format!("  Module:      {}", project.module_name()))?;
    out.print(&format!("  Supervisor:  {}", project.supervisor()))?;
    out.print(&format!("  Umbrella:    {}", project.umbrella()))?;
    if project.ecto() {
        out.print(&format!("  Database:    {}", project.ecto_db()))?;
    }
    out.print(&format!("  Docker:      {}", project.docker()))?;
    out.print(&format!("  AMQP:        {}", project.amqp()))?;
    out.print(&format!("  Location:    {}", project_dir.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
