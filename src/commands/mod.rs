pub mod apply;
pub mod script;
pub mod show;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::descriptor::EnvironmentDescriptor;
use crate::logging::Logger;
use crate::manifest::Manifest;
use crate::platform::PlatformId;
use crate::source::ManifestSource;
use crate::table::EnvironmentTable;

/// Shared state produced by the common command setup sequence.
///
/// Encapsulates manifest loading, validation, and table construction so that
/// each command does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    pub manifest: Manifest,
    pub table: EnvironmentTable,
}

impl CommandSetup {
    /// Load the manifest, surface validation warnings, and build the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded or any platform's
    /// descriptor fails to build (which aborts the whole table).
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        log.stage("Loading manifest");
        let manifest = match &global.manifest {
            Some(path) => Manifest::load(path)?,
            None => Manifest::builtin(),
        };
        log.info(&format!("{} platform(s)", manifest.platforms.len()));

        let warnings = manifest.validate();
        if !warnings.is_empty() {
            log.warn(&format!("found {} manifest warning(s):", warnings.len()));
            for warning in &warnings {
                log.warn(&format!("  {}: {}", warning.platform, warning.message));
            }
        }

        log.stage("Building environment table");
        let source = ManifestSource::new(&manifest);
        let table = if global.parallel {
            EnvironmentTable::build_parallel(&manifest.platforms, &source)?
        } else {
            EnvironmentTable::build(&manifest.platforms, &source)?
        };
        log.debug(&format!("{} descriptor(s) built", table.len()));

        Ok(Self { manifest, table })
    }

    /// Look up one platform's descriptor by its raw identifier.
    ///
    /// # Errors
    ///
    /// Returns an error naming the known platforms if the identifier is not
    /// in the table.
    pub fn descriptor(&self, platform: &str) -> Result<&EnvironmentDescriptor> {
        let id = PlatformId::from(platform);
        self.table.get(&id).ok_or_else(|| {
            let known: Vec<&str> = self.table.platforms().map(PlatformId::as_str).collect();
            anyhow::anyhow!(
                "platform '{platform}' is not in the manifest (known: {})",
                known.join(", ")
            )
        })
    }
}
