//! Per-platform environment builder.
//!
//! Pure construction: resolving the package set and assembling the tool list
//! and entry script has no side effects. The script is data to be rendered
//! or applied later; nothing runs here.

use crate::error::SourceError;
use crate::platform::PlatformId;
use crate::script::EntryScript;
use crate::source::PackageSource;

/// The version-manager tool every environment requires.
pub const VERSION_MANAGER: &str = "rustup";

/// The secondary bootstrapper tool every environment requires.
pub const BOOTSTRAPPER: &str = "cargo-binstall";

/// The two tools a descriptor declares, in order. No other dependencies.
pub const REQUIRED_TOOLS: [&str; 2] = [VERSION_MANAGER, BOOTSTRAPPER];

/// Toolchain components the entry script ensures on environment entry.
pub const TOOLCHAIN_COMPONENTS: [&str; 2] = ["rust-analyzer", "rust-src"];

/// A required external tool, resolved against a platform's package set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRef {
    /// Tool name (stable across platforms).
    pub name: String,
    /// Package label the platform's source installs it from.
    pub package: String,
}

/// The tool-list + entry-script bundle produced for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentDescriptor {
    /// Platform this descriptor was built for.
    pub platform: PlatformId,
    /// Ordered required tools; always [`REQUIRED_TOOLS`], resolved.
    pub tools: Vec<ToolRef>,
    /// Idempotent setup steps executed on environment entry.
    pub entry: EntryScript,
}

/// Build the environment descriptor for one platform.
///
/// Resolution failures from the source propagate untranslated; there are no
/// other error conditions at this layer.
///
/// # Errors
///
/// Returns [`SourceError::UnknownPlatform`] if the source does not know the
/// identifier, or [`SourceError::MissingTool`] if the resolved package set
/// lacks one of [`REQUIRED_TOOLS`].
pub fn build(
    platform: &PlatformId,
    source: &dyn PackageSource,
) -> Result<EnvironmentDescriptor, SourceError> {
    let set = source.resolve(platform)?;

    let mut tools = Vec::with_capacity(REQUIRED_TOOLS.len());
    for name in REQUIRED_TOOLS {
        let package = set.get(name).ok_or_else(|| SourceError::MissingTool {
            platform: platform.clone(),
            tool: name.to_string(),
        })?;
        tools.push(ToolRef {
            name: name.to_string(),
            package: package.to_string(),
        });
    }

    Ok(EnvironmentDescriptor {
        platform: platform.clone(),
        tools,
        entry: EntryScript::for_components(&TOOLCHAIN_COMPONENTS),
    })
}
