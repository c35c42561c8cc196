use crate::file::page_id::PageId;

#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub struct BucketId(usize);

impl BucketId {
    pub fn new(slot: usize) -> Self {
        Self(slot)
    }

    pub fn slot(&self) -> usize {
        self.0
    }
}

/// A key bound to the page that holds it. `key` is already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    page_id: PageId,
}

impl Entry {
    pub fn new(key: String, page_id: PageId) -> Self {
        Self { key, page_id }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn page_id(&self) -> PageId {
        self.page_id
    }
}

#[derive(Debug, Clone)]
pub struct Bucket {
    capacity: usize,
    entries: Vec<Entry>,
    overflow: Option<BucketId>,
}

impl Bucket {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
            overflow: None,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn overflow(&self) -> Option<BucketId> {
        self.overflow
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub(super) fn push(&mut self, entry: Entry) {
        debug_assert!(!self.is_full());
        self.entries.push(entry);
    }

    pub(super) fn link(&mut self, next: BucketId) {
        debug_assert!(self.overflow.is_none());
        self.overflow = Some(next);
    }
}
