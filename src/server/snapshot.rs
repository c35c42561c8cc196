use crate::{
    file::{
        page::Page,
        paginator::{paginate, PagingMode},
    },
    index::hash::hash_index::HashIndex,
    metadata::{
        build_stats::BuildStats,
        index_config::{BuildOptions, IndexConfig},
    },
    query::{
        access_path::AccessPath,
        search_result::{LookupResult, ScanResult},
        table_scan::TableScan,
    },
    util::Result,
};

/// Pages and the hash index over them, immutable once built.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pages: Vec<Page>,
    index: HashIndex,
}

impl Snapshot {
    pub fn build<S: AsRef<str>>(
        keys: &[S],
        mode: PagingMode,
        parameter: i32,
        options: &BuildOptions,
    ) -> Result<Self> {
        // validate everything before paginating
        options.validated_capacity()?;
        let pages = paginate(keys, mode, parameter)?;
        let index = HashIndex::build(&pages, mode, parameter, options)?;
        Ok(Self { pages, index })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn index(&self) -> &HashIndex {
        &self.index
    }

    pub fn stats(&self) -> &BuildStats {
        self.index.stats()
    }

    pub fn config(&self) -> &IndexConfig {
        self.index.config()
    }

    pub fn lookup(&self, key: &str) -> LookupResult {
        self.index.search(key)
    }

    pub fn scan(&self, key: &str) -> ScanResult {
        TableScan::new(&self.pages, self.index.config().normalization()).search(key)
    }

    pub fn describe(&self) -> serde_json::Value {
        serde_json::json!({
            "config": self.config(),
            "stats": self.stats(),
            "occupied_buckets": self.index.occupied_buckets(),
        })
    }
}

/// One-shot build with default options apart from `bucket_capacity`.
pub fn build<S: AsRef<str>>(
    keys: &[S],
    mode: PagingMode,
    parameter: i32,
    bucket_capacity: i32,
) -> Result<Snapshot> {
    Snapshot::build(
        keys,
        mode,
        parameter,
        &BuildOptions::with_bucket_capacity(bucket_capacity),
    )
}
