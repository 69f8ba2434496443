//! Entry scripts as structured data.
//!
//! A script is a sequence of discrete steps, not an opaque string. Each
//! check-then-install step is independently testable and idempotent by
//! construction: the check gates the install, so re-entering the environment
//! never re-installs a component that is already present.
//!
//! The same step sequence has two consumers: [`EntryScript::render`] emits
//! POSIX shell for execution by an external shell on environment entry, and
//! [`EntryScript::apply`] executes the steps directly through an
//! [`Executor`].

use anyhow::Result;

use crate::exec::Executor;

/// Completion message emitted as the final script step.
const READY_MESSAGE: &str = "devshell ready";

/// One step of an entry script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Install a toolchain component through the version manager unless the
    /// component-listing subcommand already reports it.
    EnsureComponent {
        /// Component name as known to `rustup component list`.
        component: String,
    },
    /// Emit a message on environment entry.
    Note {
        /// Message text.
        message: String,
    },
}

impl Step {
    /// Check whether this step's component is already installed.
    ///
    /// [`Step::Note`] steps are trivially "installed" (they never gate
    /// anything).
    ///
    /// # Errors
    ///
    /// Returns an error if the component-listing subcommand cannot be
    /// spawned.
    pub fn is_satisfied(&self, executor: &dyn Executor) -> Result<bool> {
        match self {
            Self::Note { .. } => Ok(true),
            Self::EnsureComponent { component } => {
                let result =
                    executor.run_unchecked("rustup", &["component", "list", "--installed"])?;
                // An unusable rustup reports nothing installed; the install
                // attempt that follows will surface the real failure.
                Ok(result.success
                    && result
                        .stdout
                        .lines()
                        .any(|line| line.trim().starts_with(component.as_str())))
            }
        }
    }

    /// Render this step as POSIX shell.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::EnsureComponent { component } => format!(
                "if ! rustup component list --installed | grep -q \"{component}\"; then\n\
                 \x20 echo \"installing {component}\"\n\
                 \x20 rustup component add {component}\nfi"
            ),
            Self::Note { message } => format!("echo \"{message}\""),
        }
    }
}

/// What [`EntryScript::apply`] did for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Component was installed.
    Installed(String),
    /// Component was already present; nothing ran.
    AlreadyPresent(String),
    /// Dry-run mode: install was logged but not executed.
    WouldInstall(String),
}

/// Ordered sequence of entry steps for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryScript {
    steps: Vec<Step>,
}

impl EntryScript {
    /// Build the standard script: one check-then-install step per component,
    /// followed by a completion message.
    #[must_use]
    pub fn for_components(components: &[&str]) -> Self {
        let mut steps: Vec<Step> = components
            .iter()
            .map(|component| Step::EnsureComponent {
                component: (*component).to_string(),
            })
            .collect();
        steps.push(Step::Note {
            message: READY_MESSAGE.to_string(),
        });
        Self { steps }
    }

    /// The script's steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Render the whole script as POSIX shell.
    #[must_use]
    pub fn render(&self) -> String {
        let mut script = String::new();
        for step in &self.steps {
            script.push_str(&step.render());
            script.push('\n');
        }
        script
    }

    /// Execute the script's steps through `executor`.
    ///
    /// Each check-then-install pair is independent; a component that is
    /// already installed is skipped. With `dry_run` set, absent components
    /// are reported but not installed.
    ///
    /// # Errors
    ///
    /// Returns an error if a check cannot be spawned or an install fails;
    /// the failed install's error propagates as-is.
    pub fn apply(&self, executor: &dyn Executor, dry_run: bool) -> Result<Vec<StepOutcome>> {
        let mut outcomes = Vec::new();
        for step in &self.steps {
            match step {
                Step::Note { message } => tracing::info!("{message}"),
                Step::EnsureComponent { component } => {
                    if step.is_satisfied(executor)? {
                        tracing::debug!("{component} already installed");
                        outcomes.push(StepOutcome::AlreadyPresent(component.clone()));
                    } else if dry_run {
                        tracing::info!(target: "devshell::dry_run", "would install {component}");
                        outcomes.push(StepOutcome::WouldInstall(component.clone()));
                    } else {
                        tracing::info!("installing {component}");
                        executor.run("rustup", &["component", "add", component])?;
                        outcomes.push(StepOutcome::Installed(component.clone()));
                    }
                }
            }
        }
        Ok(outcomes)
    }
}
