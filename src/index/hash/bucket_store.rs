use super::bucket::{Bucket, BucketId, Entry};

/// Where an insertion landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position in the chain; 0 is the home bucket.
    pub depth: usize,
    /// The home bucket already held an entry before this insertion.
    pub home_occupied: bool,
    /// A new overflow bucket had to be allocated for this entry.
    pub allocated: bool,
}

/// Arena of buckets. Slots `0..num_buckets` are the home buckets and
/// overflow buckets are appended behind them, so ids never move.
#[derive(Debug, Clone)]
pub struct BucketStore {
    capacity: usize,
    num_buckets: usize,
    buckets: Vec<Bucket>,
}

impl BucketStore {
    pub fn new(num_buckets: usize, capacity: usize) -> Self {
        let buckets = (0..num_buckets).map(|_| Bucket::new(capacity)).collect();
        Self {
            capacity,
            num_buckets,
            buckets,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    pub fn num_overflow_buckets(&self) -> usize {
        self.buckets.len() - self.num_buckets
    }

    pub fn get(&self, id: BucketId) -> &Bucket {
        &self.buckets[id.slot()]
    }

    pub fn insert(&mut self, home: usize, entry: Entry) -> Placement {
        let home_occupied = !self.buckets[home].is_empty();

        let mut current = BucketId::new(home);
        let mut depth = 0;
        loop {
            let bucket = &self.buckets[current.slot()];
            match bucket.overflow() {
                Some(next) if bucket.is_full() => {
                    current = next;
                    depth += 1;
                }
                _ => break,
            }
        }

        if !self.buckets[current.slot()].is_full() {
            self.buckets[current.slot()].push(entry);
            return Placement {
                depth,
                home_occupied,
                allocated: false,
            };
        }

        let next = BucketId::new(self.buckets.len());
        let mut bucket = Bucket::new(self.capacity);
        bucket.push(entry);
        self.buckets.push(bucket);
        self.buckets[current.slot()].link(next);
        Placement {
            depth: depth + 1,
            home_occupied,
            allocated: true,
        }
    }

    /// Buckets of the chain rooted at home slot `home`, in link order.
    pub fn chain(&self, home: usize) -> Chain<'_> {
        Chain {
            store: self,
            next: Some(BucketId::new(home)),
        }
    }

    pub fn total_entries(&self) -> usize {
        self.buckets.iter().map(|b| b.entries().len()).sum()
    }
}

pub struct Chain<'a> {
    store: &'a BucketStore,
    next: Option<BucketId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Bucket;

    fn next(&mut self) -> Option<Self::Item> {
        let bucket = self.store.get(self.next?);
        self.next = bucket.overflow();
        Some(bucket)
    }
}
