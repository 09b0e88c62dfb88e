//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mixgen",
    bin_name = "mixgen",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{26a1} Elixir project scaffolding",
    long_about = "mixgen generates Elixir project skeletons: mix project, \
                  supervision tree, Ecto persistence, CI pipeline, Docker \
                  packaging, and release configuration.",
    after_help = "EXAMPLES:\n\
        \x20 mixgen new shop --sup --ecto --db postgres\n\
        \x20 mixgen new platform --umbrella\n\
        \x20 mixgen new billing --ecto --db mysql --docker --amqp\n\
        \x20 mixgen list",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 mixgen new shop\n\
            \x20 mixgen new shop --sup --ecto --db postgres\n\
            \x20 mixgen new platform --umbrella --docker"
    )]
    New(NewArgs),

    /// List the registered generators.
    #[command(
        visible_alias = "ls",
        about = "List generators and what they produce",
        after_help = "EXAMPLES:\n\
            \x20 mixgen list\n\
            \x20 mixgen list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mixgen completions bash > ~/.local/share/bash-completion/completions/mixgen\n\
            \x20 mixgen completions zsh  > ~/.zfunc/_mixgen"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `mixgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project path.  The final component doubles as the default
    /// application name (`./services/my-shop` → `my_shop`).
    #[arg(value_name = "PATH", help = "Project path")]
    pub path: String,

    /// Generate an application module with a supervision tree.
    #[arg(long = "sup", help = "Generate a supervision tree")]
    pub sup: bool,

    /// Generate an umbrella container project instead of a single app.
    #[arg(long = "umbrella", help = "Generate an umbrella project")]
    pub umbrella: bool,

    /// Enable the Ecto persistence layer.
    #[arg(long = "ecto", help = "Generate an Ecto persistence layer")]
    pub ecto: bool,

    /// Database adapter for the persistence layer.
    #[arg(
        long = "db",
        value_name = "ADAPTER",
        help = "Database adapter (postgres, mysql)"
    )]
    pub db: Option<String>,

    /// Generate container packaging.
    #[arg(long = "docker", help = "Generate Dockerfile and .dockerignore")]
    pub docker: bool,

    /// Generate AMQP messaging wiring.
    #[arg(long = "amqp", help = "Generate an AMQP broker module")]
    pub amqp: bool,

    /// Override the application name derived from the path.
    #[arg(long = "app", value_name = "NAME", help = "Application name override")]
    pub app: Option<String>,

    /// Override the module name derived from the application name.
    #[arg(
        long = "module",
        value_name = "NAME",
        help = "Top-level module name override"
    )]
    pub module: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview the operations without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `mixgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mixgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
