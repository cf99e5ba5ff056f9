#![allow(missing_docs)]

//! End-to-end coverage of the encoding and container matrix, driven through
//! the public API only.

use std::collections::{BTreeMap, HashMap};

use delimap::{extract, extract_until, tokenize};
use rstest::rstest;

const SAMPLE: &str =
    "Host: Duplicate\r\nHost: Hi\r\nAccept: Something\r\nContent-Length: 8\r\n\r\nmy: body";

#[rstest]
#[case::bounded("\r\n\r\n", 4)]
#[case::unbounded("", 5)]
fn multimap_entry_counts(#[case] terminal: &str, #[case] expected: usize) {
    let rows: Vec<(String, String)> = extract_until(SAMPLE, ": ", "\r\n", terminal);
    assert_eq!(rows.len(), expected);
}

#[test]
fn wide_to_wide_ordered_map() {
    let map: BTreeMap<String, String> = extract_until(SAMPLE, ": ", "\r\n", "\r\n\r\n");
    assert_eq!(map.len(), 3);
    assert_eq!(map["Host"], "Hi");
}

#[test]
fn wide_to_wide_hash_map() {
    let map: HashMap<String, String> = extract_until(SAMPLE, ": ", "\r\n", "\r\n\r\n");
    assert_eq!(map.len(), 3);
    assert_eq!(map["Host"], "Hi");
}

#[test]
fn wide_to_narrow_ordered_map() {
    let map: BTreeMap<Vec<u8>, Vec<u8>> = extract_until(SAMPLE, ": ", "\r\n", "\r\n\r\n");
    assert_eq!(map.len(), 3);
    assert_eq!(map[b"Host".as_slice()], b"Hi");
}

#[test]
fn narrow_to_wide_ordered_map() {
    let raw = SAMPLE.as_bytes();
    let map: BTreeMap<String, String> = extract_until(raw, b": ", b"\r\n", b"\r\n\r\n");
    assert_eq!(map.len(), 3);
    assert_eq!(map["Host"], "Hi");
}

#[test]
fn narrow_to_narrow_hash_map() {
    let raw = SAMPLE.as_bytes();
    let map: HashMap<Vec<u8>, Vec<u8>> = extract_until(raw, b": ", b"\r\n", b"\r\n\r\n");
    assert_eq!(map.len(), 3);
    assert_eq!(map[b"Content-Length".as_slice()], b"8");
}

#[test]
fn narrow_to_wide_multimap() {
    let raw = SAMPLE.as_bytes();
    let rows: Vec<(String, String)> = extract_until(raw, b": ", b"\r\n", b"\r\n\r\n");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].1, "Duplicate");
    assert_eq!(rows[1].1, "Hi");
}

#[test]
fn query_string_round() {
    let params: BTreeMap<String, String> =
        extract("tag=networking&order=newest&final=section", "=", "&");
    assert_eq!(params.len(), 3);
    assert_eq!(params["tag"], "networking");
}

#[rstest]
#[case::plain("a/b/c", "/", 3)]
#[case::wrapped("/a/b/c/", "/", 3)]
#[case::crlf_set(SAMPLE, "\r\n", 5)]
#[case::colon_space_set(SAMPLE, ": ", 6)]
#[case::url_path(
    "/_vti_bin/ExcelRest.aspx/Docs/Documents/sampleWorkbook.xlsx/model/Charts('Chart%201')",
    "/",
    7
)]
#[case::empty("", "/;", 0)]
fn tokenize_counts(#[case] src: &str, #[case] delimiters: &str, #[case] expected: usize) {
    assert_eq!(tokenize(src, delimiters).len(), expected);
}
