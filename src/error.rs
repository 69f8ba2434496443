//! Domain-specific error types for the provisioning engine.
//!
//! Internal modules return typed errors ([`ManifestError`], [`SourceError`],
//! [`TableError`]) while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! The taxonomy is deliberately propagative: an unknown platform identifier
//! surfaced by the package source aborts the whole table construction, and
//! failures of external tool invocations are reported as-is rather than
//! interpreted.

use thiserror::Error;

use crate::platform::PlatformId;

/// Top-level error type for the provisioning engine.
#[derive(Error, Debug)]
pub enum DevshellError {
    /// Manifest loading or parsing error.
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Package-source resolution error.
    #[error("Package source error: {0}")]
    Source(#[from] SourceError),

    /// Environment-table construction error.
    #[error("Environment table error: {0}")]
    Table(#[from] TableError),
}

/// Errors that arise from manifest loading and validation.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// An I/O error occurred while reading the manifest file.
    #[error("IO error reading manifest {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest contains a TOML syntax or shape error.
    #[error("Invalid manifest {path}: {message}")]
    Invalid {
        /// Path to the offending file.
        path: String,
        /// Human-readable parse diagnostic.
        message: String,
    },

    /// The manifest declares no platforms at all.
    #[error("Manifest declares an empty platform set")]
    EmptyPlatformSet,
}

/// Errors surfaced by a package source during resolution.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The platform identifier is not known to the source. Propagated,
    /// never translated: this aborts table construction.
    #[error("Unknown platform '{0}': no package set declared for it")]
    UnknownPlatform(PlatformId),

    /// The resolved package set does not carry a required tool.
    #[error("Package set for '{platform}' is missing required tool '{tool}'")]
    MissingTool {
        /// Platform whose package set was resolved.
        platform: PlatformId,
        /// Name of the absent tool.
        tool: String,
    },
}

/// Errors that arise while collecting descriptors into a table.
#[derive(Error, Debug)]
pub enum TableError {
    /// The input identifier sequence contains the same key twice.
    /// Fail-fast policy: duplicates are rejected rather than overwritten.
    #[error("Duplicate platform '{0}' in platform set")]
    DuplicatePlatform(PlatformId),

    /// A per-platform builder invocation failed; the whole collection aborts.
    #[error("Failed to build environment for '{platform}': {source}")]
    Build {
        /// Platform whose builder failed.
        platform: PlatformId,
        /// Underlying builder error.
        source: SourceError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn manifest_io_display_includes_path() {
        let e = ManifestError::Io {
            path: "devshell.toml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("devshell.toml"));
        assert!(e.to_string().contains("IO error reading manifest"));
    }

    #[test]
    fn manifest_invalid_display() {
        let e = ManifestError::Invalid {
            path: "devshell.toml".to_string(),
            message: "unexpected token".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid manifest devshell.toml: unexpected token"
        );
    }

    #[test]
    fn source_unknown_platform_display() {
        let e = SourceError::UnknownPlatform(PlatformId::from("riscv64-linux"));
        assert_eq!(
            e.to_string(),
            "Unknown platform 'riscv64-linux': no package set declared for it"
        );
    }

    #[test]
    fn source_missing_tool_display() {
        let e = SourceError::MissingTool {
            platform: PlatformId::from("x86_64-linux"),
            tool: "rustup".to_string(),
        };
        assert!(e.to_string().contains("x86_64-linux"));
        assert!(e.to_string().contains("rustup"));
    }

    #[test]
    fn table_duplicate_display() {
        let e = TableError::DuplicatePlatform(PlatformId::from("x86_64-linux"));
        assert_eq!(e.to_string(), "Duplicate platform 'x86_64-linux' in platform set");
    }

    #[test]
    fn table_build_has_source() {
        use std::error::Error as _;
        let e = TableError::Build {
            platform: PlatformId::from("aarch64-darwin"),
            source: SourceError::UnknownPlatform(PlatformId::from("aarch64-darwin")),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("aarch64-darwin"));
    }

    #[test]
    fn devshell_error_from_sub_errors() {
        let e: DevshellError = ManifestError::EmptyPlatformSet.into();
        assert!(e.to_string().contains("Manifest error"));

        let e: DevshellError =
            SourceError::UnknownPlatform(PlatformId::from("unknown")).into();
        assert!(e.to_string().contains("Package source error"));

        let e: DevshellError =
            TableError::DuplicatePlatform(PlatformId::from("x86_64-linux")).into();
        assert!(e.to_string().contains("Environment table error"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<DevshellError>();
        assert_send_sync::<ManifestError>();
        assert_send_sync::<SourceError>();
        assert_send_sync::<TableError>();
    }
}
