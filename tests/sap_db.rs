//! SAP 테이블 조회/재정의 테스트.
use soap_lye_calculator::sap_db::{oils, SapTable, SapTableError};

#[test]
fn built_in_table_has_expected_oils() {
    assert_eq!(oils().len(), 14);
    let table = SapTable::built_in();
    assert_eq!(table.entries().len(), 14);
    let olive = table.resolve("Olive Oil").expect("olive");
    assert!((olive.sap_naoh - 0.134).abs() < 1e-12);
}

#[test]
fn resolve_ignores_ascii_case() {
    let table = SapTable::built_in();
    assert!(table.resolve("olive oil").is_some());
    assert!(table.resolve("TALLOW").is_some());
    assert!(table.resolve("Neem Oil").is_none());
}

#[test]
fn search_matches_substring() {
    let table = SapTable::built_in();
    let butters = table.search("butter");
    let names: Vec<&str> = butters.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Shea Butter", "Cocoa Butter"]);
    assert_eq!(table.search("oil").len(), 10);
    assert!(table.search("xyz").is_empty());
}

#[test]
fn overrides_replace_and_append() {
    let src = r#"
[oils]
"Olive Oil" = 0.135
"Neem Oil" = 0.139
"#;
    let table = SapTable::from_toml_str(src).expect("load");
    assert_eq!(table.entries().len(), 15);
    let olive = table.resolve("olive oil").expect("olive");
    assert!((olive.sap_naoh - 0.135).abs() < 1e-12);
    let neem = table.resolve("Neem Oil").expect("neem");
    assert!((neem.sap_naoh - 0.139).abs() < 1e-12);
    // 새 항목은 목록 끝에 붙는다.
    assert_eq!(table.entries().last().expect("entry").name, "Neem Oil");
}

#[test]
fn empty_override_file_keeps_built_in() {
    let table = SapTable::from_toml_str("").expect("load");
    assert_eq!(table.entries().len(), 14);
}

#[test]
fn non_positive_sap_is_rejected() {
    for src in [
        "[oils]\n\"Bad Oil\" = 0.0\n",
        "[oils]\n\"Bad Oil\" = -0.1\n",
    ] {
        let res = SapTable::from_toml_str(src);
        assert!(
            matches!(res, Err(SapTableError::InvalidValue { .. })),
            "src={src:?}"
        );
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let res = SapTable::from_toml_str("[oils]\n\"Olive Oil\" = \"abc\"\n");
    assert!(matches!(res, Err(SapTableError::Parse(_))));
}

#[test]
fn resolve_recipe_uses_canonical_names() {
    let table = SapTable::built_in();
    let oils = table
        .resolve_recipe(&[
            ("olive oil".to_string(), 300.0),
            ("Castor Oil".to_string(), 50.0),
        ])
        .expect("resolve");
    assert_eq!(oils.len(), 2);
    assert_eq!(oils[0].name, "Olive Oil");
    assert!((oils[0].weight_g - 300.0).abs() < 1e-12);
    assert!((oils[0].sap_naoh - 0.134).abs() < 1e-12);
    assert!((oils[1].sap_naoh - 0.128).abs() < 1e-12);
}

#[test]
fn resolve_recipe_rejects_unknown_oil() {
    let table = SapTable::built_in();
    let res = table.resolve_recipe(&[
        ("Olive Oil".to_string(), 300.0),
        ("Dragon Oil".to_string(), 50.0),
    ]);
    match res {
        Err(SapTableError::UnknownOil(name)) => assert_eq!(name, "Dragon Oil"),
        other => panic!("unexpected result: {other:?}"),
    }
}
