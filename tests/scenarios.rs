use static_hash_index::{build, Error, HashDb, PageId, PagingMode, SearchResult};

const FRUITS: [&str; 5] = ["apple", "banana", "cherry", "date", "elderberry"];

#[test]
fn fruit_pages_and_costs() {
    let snapshot = build(&FRUITS, PagingMode::PageCount, 2, 5).unwrap();

    let pages = snapshot.pages();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].records(), &["apple", "banana", "cherry"]);
    assert_eq!(pages[1].records(), &["date", "elderberry"]);
    assert_eq!(snapshot.config().num_buckets(), 5);
    assert_eq!(snapshot.config().total_keys(), 5);
    assert_eq!(snapshot.config().words_per_page(), 3);

    assert_eq!(
        snapshot.lookup("cherry"),
        SearchResult::found(PageId::new(0), 2)
    );
    assert_eq!(snapshot.scan("date"), SearchResult::found(PageId::new(1), 2));
    assert_eq!(snapshot.stats().overflow_count(), 0);
}

#[test]
fn zero_parameter_leaves_previous_index() {
    let db = HashDb::new(5);
    db.build(&FRUITS, PagingMode::PageCount, 2).unwrap();
    let before = db.config().unwrap();

    for mode in [PagingMode::PageCount, PagingMode::PageSize] {
        let res = db.build(&FRUITS[..2], mode, 0);
        assert!(matches!(res, Err(Error::InvalidParameter { .. })));
    }

    assert_eq!(db.config().unwrap(), before);
    assert_eq!(
        db.lookup("elderberry").unwrap(),
        SearchResult::found(PageId::new(1), 2)
    );
}

#[test]
fn queries_before_build_fail() {
    let db = HashDb::new(5);
    assert_eq!(db.lookup("apple"), Err(Error::QueryBeforeBuild));
    assert_eq!(db.scan("apple"), Err(Error::QueryBeforeBuild));
}

#[test]
fn empty_key_set_is_a_valid_build() {
    let db = HashDb::new(5);
    let keys: Vec<String> = Vec::new();
    let snapshot = db.build(&keys, PagingMode::PageSize, 4).unwrap();

    assert!(snapshot.pages().is_empty());
    assert_eq!(snapshot.stats().collision_count(), 0);
    assert_eq!(snapshot.stats().overflow_count(), 0);
    assert_eq!(snapshot.config().pages_created(), 0);
    assert_eq!(db.scan("apple").unwrap(), SearchResult::not_found(0));
    assert!(!db.lookup("apple").unwrap().is_found());
}

#[test]
fn mixed_case_keys_found_either_way() {
    let db = HashDb::new(5);
    db.build(&["Zebra", "yak", "XRAY"], PagingMode::PageSize, 1)
        .unwrap();
    for key in ["zebra", "ZEBRA", "Yak", "xray"] {
        let lookup = db.lookup(key).unwrap();
        let scan = db.scan(key).unwrap();
        assert!(lookup.is_found(), "key: {}", key);
        assert_eq!(lookup.page_id(), scan.page_id(), "key: {}", key);
    }
}
