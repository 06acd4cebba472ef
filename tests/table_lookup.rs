use waytokens::{TableError, TokenTables, LANGUAGES};

#[test]
fn every_bundled_language_loads() {
    let tables = TokenTables::bundled();
    for code in LANGUAGES {
        let table = tables.get(code).unwrap();
        assert!(!table.is_empty(), "empty table for {code}");
    }
}

#[test]
fn languages_lists_the_bundled_set() {
    let tables = TokenTables::bundled();
    let codes = tables.languages().unwrap();
    let expected: Vec<String> = LANGUAGES.iter().map(|c| c.to_string()).collect();
    assert_eq!(codes, expected);
}

#[test]
fn all_returns_every_table() {
    let tables = TokenTables::bundled();
    let map = tables.all().unwrap();
    assert_eq!(map.len(), LANGUAGES.len());
    assert!(map.contains_key("de"));
    assert!(map.contains_key("sv"));
    assert!(map.values().all(|table| !table.is_empty()));
}

#[test]
fn unsupported_code_is_not_found() {
    let tables = TokenTables::bundled();
    let err = tables.get("zz").unwrap_err();
    match &err {
        TableError::NotFound(code) => assert_eq!(code, "zz"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(err.to_string().contains("zz"));
}

#[test]
fn lookup_is_shape_strict() {
    let tables = TokenTables::bundled();
    assert!(matches!(tables.get("EN"), Err(TableError::NotFound(_))));
    assert!(matches!(tables.get(""), Err(TableError::NotFound(_))));
    assert!(matches!(tables.get("../de"), Err(TableError::NotFound(_))));
}
