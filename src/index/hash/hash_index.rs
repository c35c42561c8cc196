use tracing::info;

use crate::{
    file::{page::Page, paginator::PagingMode},
    metadata::{
        build_stats::BuildStats,
        index_config::{BuildOptions, IndexConfig},
    },
    query::{access_path::AccessPath, search_result::SearchResult},
    util::Result,
};

use super::{
    bucket::{BucketId, Entry},
    bucket_store::{BucketStore, Chain},
    hash_fn::{HashFunction, KeyNormalization},
};

/// Static hash index mapping keys to the page that holds them.
///
/// Built once from a set of pages and never resized. Lookups charge one unit
/// per bucket visited plus one for reading the page on a hit.
#[derive(Debug, Clone)]
pub struct HashIndex {
    store: BucketStore,
    hash_function: HashFunction,
    normalization: KeyNormalization,
    stats: BuildStats,
    config: IndexConfig,
}

impl HashIndex {
    pub fn build(
        pages: &[Page],
        paging_mode: PagingMode,
        paging_parameter: i32,
        options: &BuildOptions,
    ) -> Result<Self> {
        let bucket_capacity = options.validated_capacity()?;
        let total_keys: usize = pages.iter().map(Page::len).sum();
        let num_buckets = options.sizing.num_buckets(total_keys, bucket_capacity);

        let mut store = BucketStore::new(num_buckets, bucket_capacity);
        let mut stats = BuildStats::new(options.stats_policy);
        for page in pages {
            for record in page.records() {
                let key = options.normalization.apply(record);
                let home = options.hash_function.bucket_of(&key, num_buckets);
                let placement = store.insert(home, Entry::new(key, page.id()));
                stats.record(&placement);
            }
        }

        let words_per_page = pages.first().map_or(0, Page::len);
        let config = IndexConfig::new(
            options,
            bucket_capacity,
            num_buckets,
            total_keys,
            paging_mode,
            paging_parameter,
            pages.len(),
            words_per_page,
        );
        info!(
            total_keys,
            pages = pages.len(),
            num_buckets,
            bucket_capacity,
            overflow_buckets = store.num_overflow_buckets(),
            collisions = stats.collision_count(),
            overflows = stats.overflow_count(),
            "hash index built"
        );

        Ok(Self {
            store,
            hash_function: options.hash_function,
            normalization: options.normalization,
            stats,
            config,
        })
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn num_buckets(&self) -> usize {
        self.store.num_buckets()
    }

    pub fn home_of(&self, key: &str) -> usize {
        let key = self.normalization.apply(key);
        self.hash_function.bucket_of(&key, self.store.num_buckets())
    }

    pub fn chain(&self, home: usize) -> Chain<'_> {
        self.store.chain(home)
    }

    /// Number of buckets in the chain rooted at `home`.
    pub fn chain_len(&self, home: usize) -> usize {
        self.store.chain(home).count()
    }

    pub fn chain_entries(&self, home: usize) -> impl Iterator<Item = &Entry> + '_ {
        self.store.chain(home).flat_map(|b| b.entries().iter())
    }

    pub fn occupied_buckets(&self) -> usize {
        (0..self.store.num_buckets())
            .filter(|&home| !self.store.get(BucketId::new(home)).is_empty())
            .count()
    }

    pub fn total_entries(&self) -> usize {
        self.store.total_entries()
    }

    /// Checks the structural invariants of the built store. Returns the first
    /// violation found.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.total_entries() != self.config.total_keys() {
            return Err(format!(
                "{} entries stored for {} keys",
                self.total_entries(),
                self.config.total_keys()
            ));
        }
        for home in 0..self.store.num_buckets() {
            let buckets: Vec<_> = self.store.chain(home).collect();
            for (depth, bucket) in buckets.iter().enumerate() {
                if bucket.overflow().is_some() && !bucket.is_full() {
                    return Err(format!(
                        "bucket {} at depth {} links onward without being full",
                        home, depth
                    ));
                }
            }
            for entry in self.chain_entries(home) {
                let expected = self.hash_function.bucket_of(entry.key(), self.num_buckets());
                if expected != home {
                    return Err(format!(
                        "{:?} stored under bucket {} but hashes to {}",
                        entry.key(),
                        home,
                        expected
                    ));
                }
            }
        }
        Ok(())
    }
}

impl AccessPath for HashIndex {
    fn search(&self, key: &str) -> SearchResult {
        let key = self.normalization.apply(key);
        let home = self.hash_function.bucket_of(&key, self.store.num_buckets());

        let mut cost = 0;
        for bucket in self.store.chain(home) {
            cost += 1;
            if let Some(entry) = bucket.find(&key) {
                // page read
                return SearchResult::found(entry.page_id(), cost + 1);
            }
        }
        SearchResult::not_found(cost)
    }
}
