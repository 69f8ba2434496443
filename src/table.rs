//! Broadcast/collect: map a builder over a key set, collect into a table.
//!
//! The generic helper is total over finite inputs save for two cases, both
//! fail-fast: a duplicate key in the input sequence, and a builder failure
//! (which aborts the whole collection; no partial table is ever produced).
//!
//! Platform builds are independent of each other, so a rayon-backed parallel
//! variant is provided; it is observably identical to the sequential one.

use std::collections::BTreeMap;
use std::fmt;

use rayon::prelude::*;
use thiserror::Error;

use crate::descriptor::{self, EnvironmentDescriptor};
use crate::error::TableError;
use crate::platform::PlatformId;
use crate::source::PackageSource;

/// Failure mode of the generic collect helpers.
#[derive(Debug, Error)]
pub enum CollectError<K, E>
where
    K: fmt::Debug + fmt::Display,
    E: std::error::Error + 'static,
{
    /// The input sequence contained `key` more than once.
    #[error("duplicate key '{0}'")]
    Duplicate(K),

    /// The builder failed for `key`; the collection was aborted.
    #[error("building entry for '{key}' failed: {source}")]
    Build {
        /// Key whose builder failed.
        key: K,
        /// Underlying builder error.
        #[source]
        source: E,
    },
}

/// Apply `build` to each key in order and collect the results into a map.
///
/// # Errors
///
/// Fails fast on a duplicate key (before invoking its builder) and on the
/// first builder failure; either way no partial table escapes.
pub fn collect_table<K, V, E, F>(
    keys: impl IntoIterator<Item = K>,
    mut build: F,
) -> Result<BTreeMap<K, V>, CollectError<K, E>>
where
    K: Ord + Clone + fmt::Debug + fmt::Display,
    E: std::error::Error + 'static,
    F: FnMut(&K) -> Result<V, E>,
{
    let mut table = BTreeMap::new();
    for key in keys {
        if table.contains_key(&key) {
            return Err(CollectError::Duplicate(key));
        }
        let value = build(&key).map_err(|source| CollectError::Build {
            key: key.clone(),
            source,
        })?;
        table.insert(key, value);
    }
    Ok(table)
}

/// Parallel variant of [`collect_table`].
///
/// Builders run on the rayon pool; results are collected and then merged in
/// key order, so the output (and the duplicate policy) matches the
/// sequential helper. On failure the reported key is the smallest failing
/// one rather than the first in input order, which is an acceptable
/// difference: either way the whole collection aborts.
///
/// # Errors
///
/// Same failure modes as [`collect_table`].
pub fn collect_table_par<K, V, E, F>(
    keys: &[K],
    build: F,
) -> Result<BTreeMap<K, V>, CollectError<K, E>>
where
    K: Ord + Clone + fmt::Debug + fmt::Display + Send + Sync,
    V: Send,
    E: std::error::Error + Send + 'static,
    F: Fn(&K) -> Result<V, E> + Send + Sync,
{
    let built: Vec<(K, V)> = keys
        .par_iter()
        .map(|key| {
            build(key)
                .map(|value| (key.clone(), value))
                .map_err(|source| CollectError::Build {
                    key: key.clone(),
                    source,
                })
        })
        .collect::<Result<_, _>>()?;

    let mut table = BTreeMap::new();
    for (key, value) in built {
        if table.contains_key(&key) {
            return Err(CollectError::Duplicate(key));
        }
        table.insert(key, value);
    }
    Ok(table)
}

/// The finished mapping from platform identifier to environment descriptor.
///
/// Built once, immutable thereafter. Its key set is exactly the input
/// platform set.
#[derive(Debug, Clone)]
pub struct EnvironmentTable {
    entries: BTreeMap<PlatformId, EnvironmentDescriptor>,
}

impl EnvironmentTable {
    /// Build descriptors for every platform sequentially.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicatePlatform`] on a repeated identifier and
    /// [`TableError::Build`] when any builder fails; no partial table is
    /// produced.
    pub fn build(
        platforms: &[PlatformId],
        source: &dyn PackageSource,
    ) -> Result<Self, TableError> {
        let entries = collect_table(platforms.iter().cloned(), |platform| {
            descriptor::build(platform, source)
        })
        .map_err(Self::lift)?;
        Ok(Self { entries })
    }

    /// Build descriptors for every platform on the rayon pool.
    ///
    /// Observably identical to [`EnvironmentTable::build`]: platform builds
    /// share no state, so only wall-clock time differs.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`EnvironmentTable::build`].
    pub fn build_parallel(
        platforms: &[PlatformId],
        source: &dyn PackageSource,
    ) -> Result<Self, TableError> {
        let entries = collect_table_par(platforms, |platform| descriptor::build(platform, source))
            .map_err(Self::lift)?;
        Ok(Self { entries })
    }

    fn lift(err: CollectError<PlatformId, crate::error::SourceError>) -> TableError {
        match err {
            CollectError::Duplicate(platform) => TableError::DuplicatePlatform(platform),
            CollectError::Build { key, source } => TableError::Build {
                platform: key,
                source,
            },
        }
    }

    /// Look up the descriptor for a platform.
    #[must_use]
    pub fn get(&self, platform: &PlatformId) -> Option<&EnvironmentDescriptor> {
        self.entries.get(platform)
    }

    /// The table's platform identifiers in sorted order.
    pub fn platforms(&self) -> impl Iterator<Item = &PlatformId> {
        self.entries.keys()
    }

    /// Iterate over `(platform, descriptor)` entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlatformId, &EnvironmentDescriptor)> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
