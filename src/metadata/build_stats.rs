use serde::Serialize;

use crate::index::hash::bucket_store::Placement;

/// Which events `collision_count` and `overflow_count` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsPolicy {
    /// Collisions are insertions into an occupied home bucket; overflows are
    /// insertions that landed past the home bucket.
    #[default]
    PerInsertion,
    /// Overflows are entries stored in overflow buckets; collisions are home
    /// buckets that needed an overflow chain at all.
    PerBucket,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    policy: StatsPolicy,
    collision_count: usize,
    overflow_count: usize,
    colliding_insertions: usize,
    overflow_entries: usize,
    overflowed_buckets: usize,
    overflow_buckets_allocated: usize,
    max_chain_length: usize,
}

impl BuildStats {
    pub fn new(policy: StatsPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub(crate) fn record(&mut self, placement: &Placement) {
        if placement.home_occupied {
            self.colliding_insertions += 1;
        }
        if placement.depth > 0 {
            self.overflow_entries += 1;
        }
        if placement.allocated {
            self.overflow_buckets_allocated += 1;
            if placement.depth == 1 {
                self.overflowed_buckets += 1;
            }
        }
        self.max_chain_length = self.max_chain_length.max(placement.depth + 1);

        (self.collision_count, self.overflow_count) = match self.policy {
            StatsPolicy::PerInsertion => (self.colliding_insertions, self.overflow_entries),
            StatsPolicy::PerBucket => (self.overflowed_buckets, self.overflow_entries),
        };
    }

    pub fn policy(&self) -> StatsPolicy {
        self.policy
    }

    pub fn collision_count(&self) -> usize {
        self.collision_count
    }

    pub fn overflow_count(&self) -> usize {
        self.overflow_count
    }

    pub fn colliding_insertions(&self) -> usize {
        self.colliding_insertions
    }

    pub fn overflow_entries(&self) -> usize {
        self.overflow_entries
    }

    pub fn overflowed_buckets(&self) -> usize {
        self.overflowed_buckets
    }

    pub fn overflow_buckets_allocated(&self) -> usize {
        self.overflow_buckets_allocated
    }

    /// Longest chain seen, counted in buckets. 0 when nothing was inserted.
    pub fn max_chain_length(&self) -> usize {
        self.max_chain_length
    }
}
