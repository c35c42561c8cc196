use crate::{file::page::Page, index::hash::hash_fn::KeyNormalization};

use super::{access_path::AccessPath, search_result::SearchResult};

/// Sequential scan: reads pages in id order until the key turns up.
/// Every page read costs one unit.
pub struct TableScan<'a> {
    pages: &'a [Page],
    normalization: KeyNormalization,
}

impl<'a> TableScan<'a> {
    pub fn new(pages: &'a [Page], normalization: KeyNormalization) -> Self {
        Self {
            pages,
            normalization,
        }
    }
}

impl<'a> AccessPath for TableScan<'a> {
    fn search(&self, key: &str) -> SearchResult {
        let key = self.normalization.apply(key);
        let normalize = |record: &str| self.normalization.apply(record);

        let mut cost = 0;
        for page in self.pages {
            cost += 1;
            if page.contains_by(&key, normalize) {
                return SearchResult::found(page.id(), cost);
            }
        }
        SearchResult::not_found(cost)
    }
}

#[cfg(test)]
mod tests {
    use crate::file::{page_id::PageId, paginator::{paginate, PagingMode}};

    use super::*;

    fn pages() -> Vec<Page> {
        let keys = ["apple", "banana", "cherry", "date", "elderberry"];
        paginate(&keys, PagingMode::PageCount, 2).unwrap()
    }

    #[test]
    fn finds_on_second_page() {
        let pages = pages();
        let scan = TableScan::new(&pages, KeyNormalization::Lowercase);
        assert_eq!(scan.search("date"), SearchResult::found(PageId::new(1), 2));
        assert_eq!(scan.search("apple"), SearchResult::found(PageId::new(0), 1));
    }

    #[test]
    fn miss_costs_every_page() {
        let pages = pages();
        let scan = TableScan::new(&pages, KeyNormalization::Lowercase);
        assert_eq!(scan.search("fig"), SearchResult::not_found(2));
    }

    #[test]
    fn honours_normalization() {
        let pages = pages();
        let folded = TableScan::new(&pages, KeyNormalization::Lowercase);
        assert!(folded.search("CHERRY").is_found());

        let exact = TableScan::new(&pages, KeyNormalization::Exact);
        assert!(!exact.search("CHERRY").is_found());
        assert!(exact.search("cherry").is_found());
    }

    #[test]
    fn no_pages() {
        let scan = TableScan::new(&[], KeyNormalization::Lowercase);
        assert_eq!(scan.search("apple"), SearchResult::not_found(0));
    }
}
