use anyhow::Result;

use super::CommandSetup;
use crate::cli::{GlobalOpts, ScriptOpts};
use crate::logging::Logger;

/// Run the `script` command: render one platform's entry script as POSIX
/// shell on stdout.
///
/// # Errors
///
/// Returns an error if setup fails or the platform is not in the table.
pub fn run(global: &GlobalOpts, opts: &ScriptOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let descriptor = setup.descriptor(&opts.platform)?;
    print!("{}", descriptor.entry.render());
    Ok(())
}
