//! Command handlers. Each module owns one subcommand and translates CLI
//! arguments into core calls; no business logic lives here.

pub mod completions;
pub mod list;
pub mod new;
