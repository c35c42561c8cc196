use super::page_id::PageId;

/// A fixed run of records, standing in for one disk block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    records: Vec<String>,
}

impl Page {
    pub fn new(id: PageId, records: Vec<String>) -> Page {
        Page { id, records }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record matches `key` once passed through `normalize`.
    pub fn contains_by<F>(&self, key: &str, normalize: F) -> bool
    where
        F: Fn(&str) -> String,
    {
        self.records.iter().any(|record| normalize(record) == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::new(
            PageId::new(3),
            vec!["Apple".to_string(), "banana".to_string()],
        )
    }

    #[test]
    fn accessors() {
        let p = page();
        assert_eq!(p.id(), PageId::new(3));
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());
        assert_eq!(p.records()[1], "banana");
    }

    #[test]
    fn contains_by_normalizes_records() {
        let p = page();
        assert!(p.contains_by("apple", |s| s.to_lowercase()));
        assert!(!p.contains_by("apple", |s| s.to_string()));
        assert!(!p.contains_by("cherry", |s| s.to_lowercase()));
    }
}
