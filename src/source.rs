//! Package-source collaborator boundary.
//!
//! The engine trusts the source to fail loudly on unknown identifiers; the
//! resulting [`SourceError`] is propagated up through table construction
//! untranslated.

#[cfg(test)]
use mockall::automock;

use crate::error::SourceError;
use crate::manifest::{Manifest, PackageSet};
use crate::platform::PlatformId;

/// Resolves a platform identifier to the package set available for it.
#[cfg_attr(test, automock)]
pub trait PackageSource: Send + Sync {
    /// Resolve the package set for `platform`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UnknownPlatform`] if the source has no package
    /// set for the identifier.
    fn resolve(&self, platform: &PlatformId) -> Result<PackageSet, SourceError>;
}

/// Production source backed by the manifest's `[sources.*]` tables.
#[derive(Debug)]
pub struct ManifestSource<'a> {
    manifest: &'a Manifest,
}

impl<'a> ManifestSource<'a> {
    /// Create a source over a parsed manifest.
    #[must_use]
    pub const fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }
}

impl PackageSource for ManifestSource<'_> {
    fn resolve(&self, platform: &PlatformId) -> Result<PackageSet, SourceError> {
        self.manifest
            .sources
            .get(platform)
            .cloned()
            .ok_or_else(|| SourceError::UnknownPlatform(platform.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn manifest_source_resolves_declared_platform() {
        let manifest = Manifest::builtin();
        let source = ManifestSource::new(&manifest);
        let set = source.resolve(&PlatformId::from("x86_64-linux")).unwrap();
        assert_eq!(set.get("rustup"), Some("rustup"));
    }

    #[test]
    fn manifest_source_fails_loudly_on_unknown_platform() {
        let manifest = Manifest::builtin();
        let source = ManifestSource::new(&manifest);
        let err = source
            .resolve(&PlatformId::from("riscv64-linux"))
            .unwrap_err();
        assert!(matches!(err, SourceError::UnknownPlatform(p) if p.as_str() == "riscv64-linux"));
    }

    #[test]
    fn mock_source_honours_expectations() {
        let mut source = MockPackageSource::new();
        source
            .expect_resolve()
            .returning(|_| Ok(PackageSet::from([("rustup", "rustup")])));
        let set = source.resolve(&PlatformId::from("any")).unwrap();
        assert_eq!(set.len(), 1);
    }
}
