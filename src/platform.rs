use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a CPU-architecture/OS pair (e.g. `x86_64-linux`).
///
/// The engine treats the identifier as a key: it is matched verbatim against
/// the package-source table and never decomposed, beyond the convenience
/// accessors below.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformId(String);

impl PlatformId {
    /// Wrap a raw identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Architecture half of the identifier, if it follows the
    /// `<arch>-<os>` convention. The OS is the segment after the
    /// last dash, so multi-segment architectures like `x86_64` survive.
    #[must_use]
    pub fn arch(&self) -> Option<&str> {
        self.0.rsplit_once('-').map(|(arch, _)| arch)
    }

    /// OS half of the identifier, if it follows the `<arch>-<os>` convention.
    #[must_use]
    pub fn os(&self) -> Option<&str> {
        self.0.rsplit_once('-').map(|(_, os)| os)
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlatformId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The platforms the built-in manifest provisions.
///
/// This is a default, not a constraint: table construction takes its platform
/// set from the manifest, so callers (and tests) may provision any set.
#[must_use]
pub fn builtin_platforms() -> Vec<PlatformId> {
    vec![
        PlatformId::new("x86_64-linux"),
        PlatformId::new("aarch64-darwin"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_has_two_platforms() {
        let platforms = builtin_platforms();
        assert_eq!(platforms.len(), 2);
        assert_eq!(
            platforms.first().map(PlatformId::as_str),
            Some("x86_64-linux")
        );
        assert_eq!(
            platforms.get(1).map(PlatformId::as_str),
            Some("aarch64-darwin")
        );
    }

    #[test]
    fn arch_and_os_split_on_last_dash() {
        let id = PlatformId::new("x86_64-linux");
        assert_eq!(id.arch(), Some("x86_64"));
        assert_eq!(id.os(), Some("linux"));
    }

    #[test]
    fn arch_and_os_none_without_dash() {
        let id = PlatformId::new("wasm32");
        assert_eq!(id.arch(), None);
        assert_eq!(id.os(), None);
    }

    #[test]
    fn display_round_trips() {
        let id = PlatformId::new("aarch64-darwin");
        assert_eq!(id.to_string(), "aarch64-darwin");
    }

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(
            PlatformId::from("x86_64-linux"),
            PlatformId::new("x86_64-linux")
        );
        assert_ne!(
            PlatformId::from("x86_64-linux"),
            PlatformId::from("aarch64-darwin")
        );
    }
}
