#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use delimap::{extract, extract_until, tokenize};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    src: &'a [u8],
    key_delim: &'a [u8],
    value_delim: &'a [u8],
    terminal_delim: &'a [u8],
}

fn run(input: Input<'_>) {
    let Input {
        src,
        key_delim,
        value_delim,
        terminal_delim,
    } = input;

    let rows: Vec<(Vec<u8>, Vec<u8>)> = extract(src, key_delim, value_delim);
    assert!(rows.iter().all(|(key, _)| !key.is_empty()));

    let again: Vec<(Vec<u8>, Vec<u8>)> = extract(src, key_delim, value_delim);
    assert_eq!(rows, again);

    // A bounded scan emits a prefix of the unbounded frames, so the unique
    // key count can never exceed the unbounded row count.
    let unique: BTreeMap<Vec<u8>, Vec<u8>> =
        extract_until(src, key_delim, value_delim, terminal_delim);
    assert!(unique.len() <= rows.len());

    // Wide output exercises the transcoding path; per-string failures must
    // substitute empty strings, never drop or abort.
    let wide: Vec<(String, String)> = extract(src, key_delim, value_delim);
    assert_eq!(wide.len(), rows.len());

    let tokens = tokenize(src, value_delim);
    assert!(tokens.iter().all(|token| !token.is_empty()));
}

fuzz_target!(|input: Input<'_>| run(input));
