use anyhow::Result;

use super::CommandSetup;
use crate::cli::{ApplyOpts, GlobalOpts};
use crate::descriptor::VERSION_MANAGER;
use crate::exec::{Executor, SystemExecutor};
use crate::logging::Logger;
use crate::script::StepOutcome;

/// Run the `apply` command: execute one platform's entry steps on this host.
///
/// Each check-then-install pair is idempotent, so re-running after a failed
/// install is safe.
///
/// # Errors
///
/// Returns an error if setup fails, the platform is unknown, the version
/// manager is not on `PATH`, or an install fails (the external subcommand's
/// failure propagates as-is).
pub fn run(global: &GlobalOpts, opts: &ApplyOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let descriptor = setup.descriptor(&opts.platform)?;

    let executor = SystemExecutor;
    if !executor.which(VERSION_MANAGER) {
        anyhow::bail!("'{VERSION_MANAGER}' not found on PATH; install it first");
    }

    log.stage(&format!("Applying entry steps for {}", descriptor.platform));
    if global.dry_run {
        log.dry_run("checks run, installs are skipped");
    }
    let outcomes = descriptor.entry.apply(&executor, global.dry_run)?;
    log.info(&summarize(&outcomes));
    Ok(())
}

/// One-line summary of what an apply pass did.
#[must_use]
pub fn summarize(outcomes: &[StepOutcome]) -> String {
    let installed = outcomes
        .iter()
        .filter(|o| matches!(o, StepOutcome::Installed(_)))
        .count();
    let present = outcomes
        .iter()
        .filter(|o| matches!(o, StepOutcome::AlreadyPresent(_)))
        .count();
    let would = outcomes
        .iter()
        .filter(|o| matches!(o, StepOutcome::WouldInstall(_)))
        .count();
    format!("{installed} installed, {present} already present, {would} dry-run")
}
