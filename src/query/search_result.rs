use serde::Serialize;

use crate::file::page_id::PageId;

/// Outcome of a search along with the number of simulated block reads it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    found: bool,
    page_id: Option<PageId>,
    cost: usize,
}

pub type LookupResult = SearchResult;
pub type ScanResult = SearchResult;

impl SearchResult {
    pub fn found(page_id: PageId, cost: usize) -> Self {
        Self {
            found: true,
            page_id: Some(page_id),
            cost,
        }
    }

    pub fn not_found(cost: usize) -> Self {
        Self {
            found: false,
            page_id: None,
            cost,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn page_id(&self) -> Option<PageId> {
        self.page_id
    }

    pub fn cost(&self) -> usize {
        self.cost
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.page_id {
            Some(page_id) => write!(f, "found on {} (cost {})", page_id, self.cost),
            None => write!(f, "not found (cost {})", self.cost),
        }
    }
}
