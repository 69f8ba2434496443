use anyhow::Result;
use clap::Parser;

use devshell_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    let log = logging::Logger::new(args.verbose);

    match args.command {
        cli::Command::Show(opts) => commands::show::run(&args.global, &opts, &log),
        cli::Command::Script(opts) => commands::script::run(&args.global, &opts, &log),
        cli::Command::Apply(opts) => commands::apply::run(&args.global, &opts, &log),
        cli::Command::Version => {
            let version = option_env!("DEVSHELL_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("devshell {version}");
            Ok(())
        }
    }
}
