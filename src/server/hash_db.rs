use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::{
    error::Error,
    file::paginator::PagingMode,
    metadata::{
        build_stats::BuildStats,
        index_config::{BuildOptions, IndexConfig},
    },
    query::search_result::{LookupResult, ScanResult},
    util::Result,
};

use super::snapshot::Snapshot;

/// Holds the current snapshot. A rebuild prepares a complete new snapshot and
/// then swaps it in, so readers see either the old index or the new one.
pub struct HashDb {
    options: BuildOptions,
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl HashDb {
    pub fn new(bucket_capacity: i32) -> Self {
        Self::with_options(BuildOptions::with_bucket_capacity(bucket_capacity))
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            current: RwLock::new(None),
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn build<S: AsRef<str>>(
        &self,
        keys: &[S],
        mode: PagingMode,
        parameter: i32,
    ) -> Result<Arc<Snapshot>> {
        let snapshot = Arc::new(Snapshot::build(keys, mode, parameter, &self.options)?);

        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        let replaced = current.replace(snapshot.clone()).is_some();
        info!(replaced, "index snapshot installed");
        Ok(snapshot)
    }

    pub fn snapshot(&self) -> Result<Arc<Snapshot>> {
        let current = self.current.read().unwrap_or_else(|e| e.into_inner());
        current.clone().ok_or(Error::QueryBeforeBuild)
    }

    pub fn lookup(&self, key: &str) -> Result<LookupResult> {
        let res = self.snapshot()?.lookup(key);
        debug!(key, found = res.is_found(), cost = res.cost(), "lookup");
        Ok(res)
    }

    pub fn scan(&self, key: &str) -> Result<ScanResult> {
        let res = self.snapshot()?.scan(key);
        debug!(key, found = res.is_found(), cost = res.cost(), "scan");
        Ok(res)
    }

    pub fn stats(&self) -> Result<BuildStats> {
        Ok(self.snapshot()?.stats().clone())
    }

    pub fn config(&self) -> Result<IndexConfig> {
        Ok(self.snapshot()?.config().clone())
    }
}

impl Default for HashDb {
    fn default() -> Self {
        Self::with_options(BuildOptions::default())
    }
}
