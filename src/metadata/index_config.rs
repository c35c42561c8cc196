use serde::Serialize;

use crate::{
    error::Error,
    file::paginator::PagingMode,
    index::hash::hash_fn::{HashFunction, KeyNormalization},
    metadata::build_stats::StatsPolicy,
    util::{div_ceil, Result},
};

pub const DEFAULT_BUCKET_CAPACITY: i32 = 5;

/// Formula deriving the number of home buckets from the key count.
///
/// Both keep `num_buckets > total_keys / bucket_capacity` and never go below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketSizing {
    /// Roughly one bucket per key: fewer collisions, more memory.
    #[default]
    OnePerKey,
    /// `ceil(total_keys / bucket_capacity) + 1`.
    Tight,
}

impl BucketSizing {
    pub fn num_buckets(&self, total_keys: usize, bucket_capacity: usize) -> usize {
        match self {
            BucketSizing::OnePerKey => total_keys.max(total_keys / bucket_capacity + 1),
            BucketSizing::Tight => div_ceil(total_keys, bucket_capacity) + 1,
        }
    }
}

/// Knobs fixed for the lifetime of a database handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
    pub bucket_capacity: i32,
    pub sizing: BucketSizing,
    pub hash_function: HashFunction,
    pub normalization: KeyNormalization,
    pub stats_policy: StatsPolicy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            bucket_capacity: DEFAULT_BUCKET_CAPACITY,
            sizing: BucketSizing::default(),
            hash_function: HashFunction::default(),
            normalization: KeyNormalization::default(),
            stats_policy: StatsPolicy::default(),
        }
    }
}

impl BuildOptions {
    pub fn with_bucket_capacity(bucket_capacity: i32) -> Self {
        Self {
            bucket_capacity,
            ..Default::default()
        }
    }

    pub(crate) fn validated_capacity(&self) -> Result<usize> {
        if self.bucket_capacity <= 0 {
            return Err(Error::invalid(
                "bucket_capacity",
                format!("must be positive, got {}", self.bucket_capacity),
            ));
        }
        Ok(self.bucket_capacity as usize)
    }
}

/// Derived shape of one build, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexConfig {
    bucket_capacity: usize,
    num_buckets: usize,
    total_keys: usize,
    paging_mode: PagingMode,
    paging_parameter: i32,
    pages_created: usize,
    words_per_page: usize,
    sizing: BucketSizing,
    hash_function: HashFunction,
    normalization: KeyNormalization,
}

impl IndexConfig {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        options: &BuildOptions,
        bucket_capacity: usize,
        num_buckets: usize,
        total_keys: usize,
        paging_mode: PagingMode,
        paging_parameter: i32,
        pages_created: usize,
        words_per_page: usize,
    ) -> Self {
        Self {
            bucket_capacity,
            num_buckets,
            total_keys,
            paging_mode,
            paging_parameter,
            pages_created,
            words_per_page,
            sizing: options.sizing,
            hash_function: options.hash_function,
            normalization: options.normalization,
        }
    }

    pub fn bucket_capacity(&self) -> usize {
        self.bucket_capacity
    }

    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    pub fn total_keys(&self) -> usize {
        self.total_keys
    }

    pub fn paging_mode(&self) -> PagingMode {
        self.paging_mode
    }

    pub fn paging_parameter(&self) -> i32 {
        self.paging_parameter
    }

    pub fn pages_created(&self) -> usize {
        self.pages_created
    }

    pub fn words_per_page(&self) -> usize {
        self.words_per_page
    }

    pub fn sizing(&self) -> BucketSizing {
        self.sizing
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    pub fn normalization(&self) -> KeyNormalization {
        self.normalization
    }
}
