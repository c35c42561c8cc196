use std::str::FromStr;

use serde::Serialize;

use crate::{
    error::Error,
    util::{div_ceil, Result},
};

use super::{page::Page, page_id::PageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingMode {
    /// The parameter is the number of pages wanted.
    PageCount,
    /// The parameter is the number of records per page.
    PageSize,
}

impl FromStr for PagingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" | "pages" | "page-count" => Ok(PagingMode::PageCount),
            "size" | "page-size" => Ok(PagingMode::PageSize),
            other => Err(Error::invalid(
                "paging_mode",
                format!("unknown mode {:?}", other),
            )),
        }
    }
}

/// Parses the raw paging parameter handed over by the caller.
pub fn parse_parameter(raw: Option<&str>) -> Result<i32> {
    let raw = raw.ok_or_else(|| Error::invalid("paging_parameter", "missing"))?;
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| Error::invalid("paging_parameter", format!("{:?} is not an integer", raw)))?;
    validate_parameter(value)?;
    Ok(value)
}

fn validate_parameter(parameter: i32) -> Result<usize> {
    if parameter <= 0 {
        return Err(Error::invalid(
            "paging_parameter",
            format!("must be positive, got {}", parameter),
        ));
    }
    Ok(parameter as usize)
}

/// Number of records per page for `total` keys.
pub fn page_size_for(total: usize, mode: PagingMode, parameter: i32) -> Result<usize> {
    let parameter = validate_parameter(parameter)?;
    Ok(match mode {
        PagingMode::PageCount => div_ceil(total, parameter),
        PagingMode::PageSize => parameter,
    })
}

/// Cuts `keys` into consecutive pages, numbered from 0 in input order.
pub fn paginate<S: AsRef<str>>(keys: &[S], mode: PagingMode, parameter: i32) -> Result<Vec<Page>> {
    let page_size = page_size_for(keys.len(), mode, parameter)?;
    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let pages = keys
        .chunks(page_size)
        .enumerate()
        .map(|(page_num, chunk)| {
            let records = chunk.iter().map(|k| k.as_ref().to_string()).collect();
            Page::new(PageId::new(page_num), records)
        })
        .collect();
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUITS: [&str; 5] = ["apple", "banana", "cherry", "date", "elderberry"];

    fn contents(pages: &[Page]) -> Vec<Vec<String>> {
        pages.iter().map(|p| p.records().to_vec()).collect()
    }

    #[test]
    fn page_count_mode() {
        let pages = paginate(&FRUITS, PagingMode::PageCount, 2).unwrap();
        assert_eq!(
            contents(&pages),
            vec![
                vec!["apple", "banana", "cherry"],
                vec!["date", "elderberry"]
            ]
        );
        assert_eq!(pages[0].id(), PageId::new(0));
        assert_eq!(pages[1].id(), PageId::new(1));
    }

    #[test]
    fn page_count_mode_may_produce_fewer_pages() {
        // ceil(5 / 4) = 2 records per page, so only 3 pages come out
        let pages = paginate(&FRUITS, PagingMode::PageCount, 4).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].records(), &["elderberry".to_string()]);

        let pages = paginate(&FRUITS, PagingMode::PageCount, 10).unwrap();
        assert_eq!(pages.len(), 5);
    }

    #[test]
    fn page_size_mode() {
        let pages = paginate(&FRUITS, PagingMode::PageSize, 2).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(
            contents(&pages),
            vec![
                vec!["apple", "banana"],
                vec!["cherry", "date"],
                vec!["elderberry"]
            ]
        );
    }

    #[test]
    fn ids_are_contiguous() {
        let keys: Vec<String> = (0..23).map(|i| format!("k{}", i)).collect();
        let pages = paginate(&keys, PagingMode::PageSize, 4).unwrap();
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.id().page_num(), i);
        }
        assert_eq!(pages.iter().map(Page::len).sum::<usize>(), 23);
    }

    #[test]
    fn rejects_non_positive_parameter() {
        for parameter in [0, -1, i32::MIN] {
            for mode in [PagingMode::PageCount, PagingMode::PageSize] {
                let res = paginate(&FRUITS, mode, parameter);
                assert!(
                    matches!(res, Err(Error::InvalidParameter { .. })),
                    "mode: {:?}, parameter: {}",
                    mode,
                    parameter
                );
            }
        }
    }

    #[test]
    fn empty_keys_give_no_pages() {
        let keys: [&str; 0] = [];
        assert!(paginate(&keys, PagingMode::PageCount, 3).unwrap().is_empty());
        assert!(paginate(&keys, PagingMode::PageSize, 3).unwrap().is_empty());
        assert!(paginate(&keys, PagingMode::PageSize, 0).is_err());
    }

    #[test]
    fn parse_parameter_forms() {
        assert_eq!(parse_parameter(Some("4")), Ok(4));
        assert_eq!(parse_parameter(Some(" 12 ")), Ok(12));
        assert!(parse_parameter(None).is_err());
        assert!(parse_parameter(Some("")).is_err());
        assert!(parse_parameter(Some("abc")).is_err());
        assert!(parse_parameter(Some("2.5")).is_err());
        assert!(parse_parameter(Some("0")).is_err());
        assert!(parse_parameter(Some("-3")).is_err());
    }

    #[test]
    fn parse_mode() {
        assert_eq!("count".parse::<PagingMode>(), Ok(PagingMode::PageCount));
        assert_eq!("SIZE".parse::<PagingMode>(), Ok(PagingMode::PageSize));
        assert!("rows".parse::<PagingMode>().is_err());
    }
}
