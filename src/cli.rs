use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the devshell provisioning engine.
#[derive(Parser, Debug)]
#[command(
    name = "devshell",
    about = "Declarative development-shell provisioning engine",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Path to the provisioning manifest (defaults to the built-in manifest)
    #[arg(short, long, global = true)]
    pub manifest: Option<std::path::PathBuf>,

    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Disable parallel descriptor construction (parallel is enabled by default)
    #[arg(long = "no-parallel", global = true, action = clap::ArgAction::SetFalse)]
    pub parallel: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the environment table and print every platform's descriptor
    Show(ShowOpts),
    /// Render one platform's entry script as POSIX shell
    Script(ScriptOpts),
    /// Execute one platform's entry steps on this host
    Apply(ApplyOpts),
    /// Print version information
    Version,
}

/// Options for the `show` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ShowOpts {}

/// Options for the `script` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ScriptOpts {
    /// Platform identifier to render the script for
    #[arg(short, long)]
    pub platform: String,
}

/// Options for the `apply` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ApplyOpts {
    /// Platform identifier to apply the entry steps for
    #[arg(short, long)]
    pub platform: String,
}
