//! # Image Loading Tests
//!
//! This module contains unit tests for the program image loader, covering the
//! text format, its error lines, and reading images from disk.

use std::io::Write;

use ls8_core::LoadError;
use ls8_core::common::error::{EXIT_FAILURE, EXIT_IMAGE_NOT_FOUND};
use ls8_core::sim::loader::{load_image_file, parse_image};
use pretty_assertions::assert_eq;
use tempfile::{NamedTempFile, TempDir};

/// Writes `text` to a temporary image file.
fn create_temp_image(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const PRINT8: &str = "\
# print8.ls8
10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";

#[test]
fn test_parse_annotated_image() {
    let image = parse_image(PRINT8).unwrap();
    assert_eq!(image, vec![0b1000_0010, 0, 8, 0b0100_0111, 0, 1]);
}

#[test]
fn test_blank_and_comment_only_lines_are_skipped() {
    let text = "\n   \n# header\n\t# indented comment\n00000001\n\n";
    assert_eq!(parse_image(text).unwrap(), vec![1]);
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let text = "  00000101   \r\n\t11111111#tight comment\r\n";
    assert_eq!(parse_image(text).unwrap(), vec![5, 255]);
}

#[test]
fn test_short_literals_are_accepted() {
    assert_eq!(parse_image("1\n10\n0\n").unwrap(), vec![1, 2, 0]);
}

#[test]
fn test_empty_text_gives_empty_image() {
    assert!(parse_image("").unwrap().is_empty());
    assert!(parse_image("# nothing here\n").unwrap().is_empty());
}

#[test]
fn test_invalid_digit_reports_line() {
    let err = parse_image("00000001\n# comment\n00000201\n").unwrap_err();
    match err {
        LoadError::InvalidLiteral { line, text } => {
            assert_eq!(line, 3);
            assert_eq!(text, "00000201");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_literal_above_255_is_invalid() {
    let err = parse_image("100000000\n").unwrap_err();
    assert!(matches!(err, LoadError::InvalidLiteral { line: 1, .. }), "{err}");
    assert_eq!(err.exit_code(), EXIT_FAILURE);
}

#[test]
fn test_non_binary_text_is_invalid() {
    assert!(parse_image("LDI R0\n").is_err());
    assert!(parse_image("0x82\n").is_err());
}

#[test]
fn test_full_memory_image_is_accepted() {
    let text = "00000000\n".repeat(256);
    assert_eq!(parse_image(&text).unwrap().len(), 256);
}

#[test]
fn test_image_one_byte_too_large() {
    let text = "00000000\n".repeat(257);
    let err = parse_image(&text).unwrap_err();
    assert!(matches!(err, LoadError::ImageTooLarge { len: 257 }), "{err}");
}

#[test]
fn test_load_image_file_success() {
    let file = create_temp_image(PRINT8);
    let image = load_image_file(file.path()).unwrap();
    assert_eq!(image.len(), 6);
    assert_eq!(image[2], 8);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.ls8");

    let err = load_image_file(&path).unwrap_err();

    assert!(matches!(err, LoadError::ImageNotFound(ref p) if *p == path), "{err}");
    assert_eq!(err.exit_code(), EXIT_IMAGE_NOT_FOUND);
    assert!(err.to_string().ends_with("does_not_exist.ls8 not found"));
}

#[test]
fn test_load_directory_is_io_error() {
    let dir = TempDir::new().unwrap();

    let err = load_image_file(dir.path()).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }), "{err}");
    assert_eq!(err.exit_code(), EXIT_FAILURE);
}

#[test]
fn test_load_file_with_bad_literal() {
    let file = create_temp_image("00000001\nnope\n");
    let err = load_image_file(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidLiteral { line: 2, .. }), "{err}");
}
