use std::io::Write;

use lapcut_core::Error;
use tempfile::NamedTempFile;

use crate::io::read_edge_rows;
use crate::tests::init;

fn edge_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_reads_two_and_three_field_rows() {
    init();
    let file = edge_file("1,2\n2,3,0.5\n");
    let rows = read_edge_rows(file.path(), b',').unwrap();

    assert_eq!(rows, vec![vec![1.0, 2.0], vec![2.0, 3.0, 0.5]]);
}

#[test]
fn test_blank_lines_are_skipped() {
    let file = edge_file("1,2,1\n\n2,3,1\n");
    let rows = read_edge_rows(file.path(), b',').unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_whitespace_is_trimmed() {
    let file = edge_file(" 1 , 2 , 4.5\n");
    let rows = read_edge_rows(file.path(), b',').unwrap();
    assert_eq!(rows, vec![vec![1.0, 2.0, 4.5]]);
}

#[test]
fn test_alternate_delimiter() {
    let file = edge_file("1\t2\t1\n2\t3\n");
    let rows = read_edge_rows(file.path(), b'\t').unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec![2.0, 3.0]);
}

#[test]
fn test_non_numeric_field_reports_line() {
    let file = edge_file("1,2,1\n1,x\n");
    let err = read_edge_rows(file.path(), b',').unwrap_err();
    match err {
        Error::EdgeFormat { row, message } => {
            assert_eq!(row, 2);
            assert!(message.contains('x'));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = read_edge_rows(std::path::Path::new("does-not-exist.dat"), b',').unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
