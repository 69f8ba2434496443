// Shared helpers for integration tests.
//
// Provides a stub package source and an in-memory fake of the version
// manager so each integration test can exercise table construction and
// script application without touching the host.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use devshell_cli::error::SourceError;
use devshell_cli::exec::{ExecResult, Executor};
use devshell_cli::manifest::PackageSet;
use devshell_cli::platform::PlatformId;
use devshell_cli::source::PackageSource;

/// Package source backed by an in-memory table.
///
/// Resolution fails loudly (with [`SourceError::UnknownPlatform`]) for any
/// platform without an entry, matching the contract the engine expects from
/// its external source.
pub struct StubSource {
    sets: BTreeMap<PlatformId, PackageSet>,
}

impl StubSource {
    /// A source resolving the given platforms to a full package set.
    pub fn resolving(platforms: &[&str]) -> Self {
        let full = PackageSet::from([
            ("rustup", "rustup"),
            ("cargo-binstall", "cargo-binstall"),
        ]);
        Self {
            sets: platforms
                .iter()
                .map(|p| (PlatformId::from(*p), full.clone()))
                .collect(),
        }
    }
}

impl PackageSource for StubSource {
    fn resolve(&self, platform: &PlatformId) -> Result<PackageSet, SourceError> {
        self.sets
            .get(platform)
            .cloned()
            .ok_or_else(|| SourceError::UnknownPlatform(platform.clone()))
    }
}

/// In-memory fake of the version manager.
///
/// `component list --installed` reports the current installed set;
/// `component add <c>` records the install. Tracks how many installs ran so
/// idempotence tests can assert that a second pass performs none.
#[derive(Default)]
pub struct FakeVersionManager {
    installed: Mutex<BTreeSet<String>>,
    install_count: Mutex<usize>,
}

impl FakeVersionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fake that already has the given components installed.
    pub fn with_installed(components: &[&str]) -> Self {
        let fake = Self::default();
        {
            let mut installed = fake.installed.lock().expect("lock");
            for c in components {
                installed.insert((*c).to_string());
            }
        }
        fake
    }

    /// Total number of `component add` invocations so far.
    pub fn install_count(&self) -> usize {
        *self.install_count.lock().expect("lock")
    }

    fn ok(stdout: String) -> ExecResult {
        ExecResult {
            stdout,
            stderr: String::new(),
            success: true,
            code: Some(0),
        }
    }
}

impl Executor for FakeVersionManager {
    fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
        assert_eq!(program, "rustup", "fake only models the version manager");
        if let ["component", "add", component] = args {
            self.installed
                .lock()
                .expect("lock")
                .insert((*component).to_string());
            *self.install_count.lock().expect("lock") += 1;
            return Ok(Self::ok(String::new()));
        }
        anyhow::bail!("unexpected command: {program} {args:?}")
    }

    fn run_unchecked(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
        assert_eq!(program, "rustup", "fake only models the version manager");
        if let ["component", "list", "--installed"] = args {
            let listing = self
                .installed
                .lock()
                .expect("lock")
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join("\n");
            return Ok(Self::ok(listing));
        }
        anyhow::bail!("unexpected command: {program} {args:?}")
    }

    fn which(&self, _: &str) -> bool {
        true
    }
}
