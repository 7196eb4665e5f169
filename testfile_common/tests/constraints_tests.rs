#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use testfile_common::{TestFileError, parse_table_constraints};

mod common;

use common::{fixture, init_test_logger, missing_path};

#[test]
fn test_missing_constraints_file_is_empty() {
    init_test_logger();
    let dir = tempfile::tempdir().unwrap();
    let constraints = parse_table_constraints(missing_path(&dir, "schema_constraints.csv"))
        .expect("A missing constraints file is not an error");

    assert!(constraints.restrict_to.is_empty());
    assert!(constraints.exclude.is_empty());
}

#[test]
fn test_constraints_file() {
    init_test_logger();
    let file = fixture(
        "\
# Table constraints for the functional workload
table_name:AllTypesAgg, constraint_type:restrict_to, file_format:text,seq
table_name:complextypestbl, constraint_type:exclude, file_format:text,rc,seq

table_name:alltypesagg, constraint_type:exclude, file_format:avro
",
    );
    let constraints = parse_table_constraints(file.path()).unwrap();

    assert_eq!(
        constraints.restrict_to("alltypesagg"),
        Some(&["text".to_string(), "seq".to_string()][..])
    );
    assert_eq!(
        constraints.excludes("ComplexTypesTbl").map(<[String]>::len),
        Some(3)
    );
    assert_eq!(
        constraints.excludes("alltypesagg"),
        Some(&["avro".to_string()][..])
    );
}

#[test]
fn test_constraints_file_invalid_type() {
    let file = fixture("table_name:t, constraint_type:only, file_format:text\n");
    match parse_table_constraints(file.path()) {
        Err(TestFileError::InvalidConstraintType(kind)) => assert_eq!(kind, "only"),
        other => panic!("expected InvalidConstraintType, got {other:?}"),
    }
}
