#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use testfile_common::{
    ParseConfig, TestCase, TestFileError, parse_query_test_file, parse_test_file,
    parse_test_str, render_test_file,
    test_case::{QUERY, QUERY_NAME, RESULTS, SETUP, TYPES},
    write_test_file,
};

mod common;

use common::{fixture, init_test_logger, missing_path};

const QUERY_TEST: &str = "\
# Scans of the nation table
====
---- QUERY : nation_count
select count(*) from nation$TABLE
---- TYPES
bigint
---- RESULTS
25
====
---- SETUP
RESET nation
---- QUERY
select n_name
from nation$TABLE
where n_nationkey = 1
---- RESULTS
'ARGENTINA'
---- PLAN
ignored by query tests
====
---- LINEAGE
not a query test section
====
";

#[test]
fn test_parse_query_test_file() {
    init_test_logger();
    let file = fixture(QUERY_TEST);
    let cases = parse_query_test_file(file.path()).expect("Failed to parse test file");

    assert_eq!(cases.len(), 2);

    let first = &cases[0];
    assert_eq!(first.query_name(), Some("nation_count"));
    assert_eq!(first.query(), Some("select count(*) from nation$TABLE"));
    assert_eq!(first.get(TYPES), Some("bigint"));
    assert_eq!(first.get(RESULTS), Some("25"));

    let second = &cases[1];
    let names: Vec<_> = second.sections().map(|(name, _)| name).collect();
    assert_eq!(names, vec![SETUP, QUERY, RESULTS]);
    assert_eq!(
        second.query(),
        Some("select n_name\nfrom nation$TABLE\nwhere n_nationkey = 1")
    );
    assert!(second.query_name().is_none());
}

#[test]
fn test_parse_strict_file_fails_on_unknown_section() {
    init_test_logger();
    let file = fixture(QUERY_TEST);
    let config = ParseConfig::builder()
        .sections([QUERY, RESULTS, TYPES, SETUP])
        .strict()
        .build();

    match parse_test_file(file.path(), &config) {
        Err(TestFileError::UnknownSubsection(name)) => assert_eq!(name, "PLAN"),
        other => panic!("expected UnknownSubsection, got {other:?}"),
    }
}

#[test]
fn test_parse_custom_sections() {
    let file = fixture(QUERY_TEST);
    let config = ParseConfig::builder().sections(["PLAN", "LINEAGE"]).build();
    let cases = parse_test_file(file.path(), &config).unwrap();

    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].get("PLAN"), Some("ignored by query tests"));
    assert_eq!(cases[1].get("LINEAGE"), Some("not a query test section"));
}

#[test]
fn test_parse_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = missing_path(&dir, "missing.test");

    match parse_query_test_file(&path) {
        Err(TestFileError::FileNotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_parse_directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        parse_query_test_file(dir.path()),
        Err(TestFileError::FileNotFound { .. })
    ));
}

#[test]
fn test_write_then_parse_file() {
    init_test_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.test");

    let cases = vec![
        TestCase::new()
            .with_section(QUERY_NAME, "first")
            .with_section(QUERY, "select 1\nunion all\nselect 2")
            .with_section(RESULTS, "1\n2")
            .with_section(TYPES, "tinyint"),
        TestCase::new()
            .with_section(SETUP, "")
            .with_section(QUERY, "select 'x'"),
    ];
    write_test_file(&path, &cases).unwrap();

    let parsed = parse_query_test_file(&path).unwrap();
    assert_eq!(parsed, cases);
}

#[test]
fn test_regenerated_file_is_stable() {
    let file = fixture(QUERY_TEST);
    let cases = parse_query_test_file(file.path()).unwrap();

    let rendered = render_test_file(&cases);
    let reparsed = parse_test_str(&rendered, &ParseConfig::query_test()).unwrap();
    assert_eq!(reparsed, cases);
    assert_eq!(render_test_file(&reparsed), rendered);
}

mod property_tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, quickcheck};

    const NAMES: [&str; 5] = ["QUERY", "RESULTS", "TYPES", "PARTITIONS", "SETUP"];
    const WORDS: [&str; 8] = ["select", "1", "from", "t", "'a b'", "# note", "", "  x"];

    fn body(g: &mut Gen) -> String {
        let lines = usize::arbitrary(g) % 4;
        (0..lines)
            .map(|_| *g.choose(&WORDS).unwrap())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[derive(Clone, Debug)]
    struct ArbitraryCase(TestCase);

    impl Arbitrary for ArbitraryCase {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut case = TestCase::new();
            if bool::arbitrary(g) {
                case.insert(QUERY_NAME, format!("case_{}", u8::arbitrary(g)));
                case.insert(QUERY, body(g));
            }
            let extra = usize::arbitrary(g) % NAMES.len() + 1;
            for _ in 0..extra {
                case.insert(*g.choose(&NAMES).unwrap(), body(g));
            }
            Self(case)
        }
    }

    quickcheck! {
        fn prop_render_parse_round_trip(cases: Vec<ArbitraryCase>) -> bool {
            let cases: Vec<TestCase> = cases.into_iter().map(|c| c.0).collect();
            let rendered = render_test_file(&cases);
            parse_test_str(&rendered, &ParseConfig::query_test()).unwrap() == cases
        }
    }
}
