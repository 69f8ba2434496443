//! TOML manifest describing what to provision.
//!
//! The manifest is the single input boundary of the engine: it names the
//! platform set to provision and, per platform, the package set the external
//! source offers. Table construction takes the platform set from here rather
//! than from a hardcoded constant, so tests can inject arbitrary sets.
//!
//! ```toml
//! platforms = ["x86_64-linux", "aarch64-darwin"]
//!
//! [sources.x86_64-linux]
//! rustup = "rustup"
//! cargo-binstall = "cargo-binstall"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::REQUIRED_TOOLS;
use crate::error::ManifestError;
use crate::platform::{PlatformId, builtin_platforms};

/// The tools a platform's package source offers, keyed by tool name.
///
/// Values are the platform-specific package labels the source would hand to
/// its installer; the engine only ever matches on the keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageSet(BTreeMap<String, String>);

impl PackageSet {
    /// Look up the package label for a tool name.
    #[must_use]
    pub fn get(&self, tool: &str) -> Option<&str> {
        self.0.get(tool).map(String::as_str)
    }

    /// Tool names offered by this set, in sorted order.
    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of tools in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set offers no tools at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PackageSet {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(tool, package)| (tool.to_string(), package.to_string()))
                .collect(),
        )
    }
}

/// A non-fatal problem found while validating a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Platform the warning concerns.
    pub platform: PlatformId,
    /// Human-readable description.
    pub message: String,
}

/// Parsed provisioning manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Ordered platform set to provision.
    pub platforms: Vec<PlatformId>,
    /// Per-platform package sets.
    #[serde(default)]
    pub sources: BTreeMap<PlatformId, PackageSet>,
}

impl Manifest {
    /// The built-in manifest: the two supported platforms, each sourcing the
    /// version manager and the bootstrapper under their own names.
    #[must_use]
    pub fn builtin() -> Self {
        let default_set = PackageSet::from([
            ("rustup", "rustup"),
            ("cargo-binstall", "cargo-binstall"),
        ]);
        let platforms = builtin_platforms();
        let sources = platforms
            .iter()
            .map(|p| (p.clone(), default_set.clone()))
            .collect();
        Self { platforms, sources }
    }

    /// Load and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Io`] if the file cannot be read,
    /// [`ManifestError::Invalid`] on a TOML syntax or shape error, and
    /// [`ManifestError::EmptyPlatformSet`] if no platforms are declared.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manifest: Self =
            toml::from_str(&content).map_err(|e| ManifestError::Invalid {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        if manifest.platforms.is_empty() {
            return Err(ManifestError::EmptyPlatformSet);
        }
        Ok(manifest)
    }

    /// Validate the manifest against the builder's requirements.
    ///
    /// Warnings, not errors: a platform with no package set or with a set
    /// missing a required tool will still fail loudly at resolution time;
    /// surfacing it early just gives the user a better diagnostic.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        for platform in &self.platforms {
            match self.sources.get(platform) {
                None => warnings.push(ValidationWarning {
                    platform: platform.clone(),
                    message: "no package set declared".to_string(),
                }),
                Some(set) => {
                    for tool in REQUIRED_TOOLS {
                        if set.get(tool).is_none() {
                            warnings.push(ValidationWarning {
                                platform: platform.clone(),
                                message: format!("package set is missing required tool '{tool}'"),
                            });
                        }
                    }
                }
            }
        }
        warnings
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::builtin()
    }
}
