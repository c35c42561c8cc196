use super::search_result::SearchResult;

/// A read-only way of finding the page that holds a key.
pub trait AccessPath {
    fn search(&self, key: &str) -> SearchResult;
}
