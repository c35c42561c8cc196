use serde::Serialize;

#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct PageId {
    page_num: usize,
}

impl PageId {
    pub fn new(page_num: usize) -> PageId {
        PageId { page_num }
    }

    pub fn page_num(&self) -> usize {
        self.page_num
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "page#{}", self.page_num)
    }
}
