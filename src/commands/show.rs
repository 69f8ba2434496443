use anyhow::Result;

use super::CommandSetup;
use crate::cli::{GlobalOpts, ShowOpts};
use crate::logging::Logger;
use crate::script::Step;

/// Run the `show` command: build the environment table and print every
/// platform's descriptor.
///
/// # Errors
///
/// Returns an error if manifest loading or table construction fails.
pub fn run(global: &GlobalOpts, _opts: &ShowOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    println!("{}", render(&setup));
    Ok(())
}

/// Render the table as the `show` command prints it.
#[must_use]
pub fn render(setup: &CommandSetup) -> String {
    let mut out = String::new();
    for (platform, descriptor) in setup.table.iter() {
        out.push_str(&format!("{platform}\n"));
        out.push_str("  tools:\n");
        for tool in &descriptor.tools {
            out.push_str(&format!("    {} ({})\n", tool.name, tool.package));
        }
        out.push_str("  entry steps:\n");
        for step in descriptor.entry.steps() {
            match step {
                Step::EnsureComponent { component } => {
                    out.push_str(&format!("    ensure component {component}\n"));
                }
                Step::Note { message } => {
                    out.push_str(&format!("    note \"{message}\"\n"));
                }
            }
        }
    }
    out
}
