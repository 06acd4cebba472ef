use waytokens::{build_table, GroupSpec, TableError};

fn specs(json: &str) -> Vec<GroupSpec> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn galician_way_group() {
    let table =
        build_table(&specs(r#"[{"variants": ["rúa", "rua", "r", "ru"], "type": "way"}]"#))
            .unwrap();
    assert_eq!(table[0].tokens, ["rúa", "rua", "r", "ru"]);
    assert_eq!(table[0].full, "rúa");
    assert_eq!(table[0].canonical, "r");
}

#[test]
fn avenue_group() {
    let table =
        build_table(&specs(r#"[{"variants": ["avenida", "av", "avd", "avda"]}]"#)).unwrap();
    assert_eq!(table[0].full, "avenida");
    assert_eq!(table[0].canonical, "av");
}

#[test]
fn cross_group_collision_rejected() {
    let err = build_table(&specs(
        r#"[
            {"variants": ["street", "st"], "type": "way"},
            {"variants": ["saint", "st"], "type": "way"}
        ]"#,
    ))
    .unwrap_err();
    match err {
        TableError::Invalid(msg) => assert!(msg.contains("'st'"), "{msg}"),
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn regex_group_needs_templates() {
    let err = build_table(&specs(
        r#"[{"variants": ["^([0-9]+)-([0-9]+)$"], "regex": true}]"#,
    ))
    .unwrap_err();
    assert!(matches!(err, TableError::Invalid(_)));

    let table = build_table(&specs(
        r#"[{"variants": ["^([0-9]+)-([0-9]+)$"], "regex": true, "full": "$1丁目$2番", "canonical": "$1-$2"}]"#,
    ))
    .unwrap();
    assert!(table[0].is_regex());
    assert_eq!(table[0].full, "$1丁目$2番");
}

#[test]
fn hand_written_forms_rejected_on_plain_groups() {
    let err = build_table(&specs(
        r#"[{"variants": ["street", "st"], "full": "street"}]"#,
    ))
    .unwrap_err();
    assert!(matches!(err, TableError::Invalid(_)));
}

#[test]
fn broken_pattern_rejected() {
    let err = build_table(&specs(
        r#"[{"variants": ["([0-9]+"], "regex": true, "full": "$1", "canonical": "$1"}]"#,
    ))
    .unwrap_err();
    assert!(matches!(err, TableError::Invalid(_)));
}

#[test]
fn metadata_is_carried_through() {
    let table = build_table(&specs(
        r#"[{
            "variants": ["post office box", "po box", "pob"],
            "type": "box",
            "onlyLayers": ["address"],
            "spanBoundaries": 2
        }]"#,
    ))
    .unwrap();
    assert_eq!(table[0].full, "post office box");
    assert_eq!(table[0].canonical, "pob");
    assert_eq!(table[0].span_boundaries, Some(2));
    assert_eq!(table[0].only_layers, Some(vec!["address".to_string()]));
}
