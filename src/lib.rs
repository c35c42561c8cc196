//! Static hash index over a paginated record set.
//!
//! Keys are cut into pages, each key is filed under a hash bucket that records
//! its page, and two access paths (hash lookup and sequential scan) report how
//! many simulated block reads they needed.

pub mod error;
pub mod util;

pub mod file {
    pub mod page;
    pub mod page_id;
    pub mod paginator;
}

pub mod index {
    pub mod hash {
        pub mod bucket;
        pub mod bucket_store;
        pub mod hash_fn;
        pub mod hash_index;
    }
}

pub mod metadata {
    pub mod build_stats;
    pub mod index_config;
}

pub mod query {
    pub mod access_path;
    pub mod search_result;
    pub mod table_scan;
}

pub mod server {
    pub mod hash_db;
    pub mod snapshot;
}

pub use error::Error;
pub use file::{
    page::Page,
    page_id::PageId,
    paginator::{paginate, parse_parameter, PagingMode},
};
pub use index::hash::{
    hash_fn::{hash, HashFunction, KeyNormalization},
    hash_index::HashIndex,
};
pub use metadata::{
    build_stats::{BuildStats, StatsPolicy},
    index_config::{BucketSizing, BuildOptions, IndexConfig, DEFAULT_BUCKET_CAPACITY},
};
pub use query::{
    access_path::AccessPath,
    search_result::{LookupResult, ScanResult, SearchResult},
    table_scan::TableScan,
};
pub use server::{
    hash_db::HashDb,
    snapshot::{build, Snapshot},
};
pub use util::Result;
