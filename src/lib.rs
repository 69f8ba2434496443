//! Declarative development-shell provisioning engine.
//!
//! Given a manifest naming a set of platform identifiers and a package set
//! per platform, the engine builds an **environment table**: for each
//! platform, a descriptor bundling the two required tools (the `rustup`
//! version manager and the `cargo-binstall` bootstrapper) with an entry
//! script of idempotent check-then-install steps.
//!
//! The public API is organised in layers:
//!
//! - **[`manifest`]** — parse and validate the TOML provisioning manifest
//! - **[`source`]** — the package-source collaborator boundary
//! - **[`descriptor`]** — the pure per-platform environment builder
//! - **[`table`]** — broadcast/collect into the finished environment table
//! - **[`script`]** — entry scripts as data: render to shell or apply
//! - **[`commands`]** — top-level subcommand orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod descriptor;
pub mod error;
pub mod exec;
pub mod logging;
pub mod manifest;
pub mod platform;
pub mod script;
pub mod source;
pub mod table;
