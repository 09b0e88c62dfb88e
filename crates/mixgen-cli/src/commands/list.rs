//! Implementation of the `mixgen list` command.

use mixgen_core::generators;

use crate::cli::{ListArgs, ListFormat};
use crate::error::CliResult;
use crate::output::OutputManager;

/// Print the registered generator table.
pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let generators = generators::registered();

    match args.format {
        ListFormat::Table => {
            output.header("Registered generators (in execution order)")?;
            let width = generators
                .iter()
                .map(|g| g.name().len())
                .max()
                .unwrap_or(0);
            for generator in &generators {
                output.print(&format!(
                    "  {:width$}  {}",
                    generator.name(),
                    generator.description(),
                ))?;
            }
        }
        ListFormat::Json => {
            let rows: Vec<_> = generators
                .iter()
                .map(|g| {
                    serde_json::json!({
                        "name": g.name(),
                        "description": g.description(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
