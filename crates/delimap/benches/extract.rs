#![allow(missing_docs)]

use std::{collections::BTreeMap, fmt::Write, hint::black_box};

use criterion::{Criterion, criterion_group, criterion_main};
use delimap::{extract_until, tokenize};

fn header_block(lines: usize) -> String {
    let mut raw = String::new();
    for i in 0..lines {
        writeln!(raw, "Header-{i}: value-{i}\r").unwrap();
    }
    raw.push_str("\r\nbody body body");
    raw
}

fn extraction(c: &mut Criterion) {
    let raw = header_block(64);
    let bytes = raw.as_bytes();

    c.bench_function("extract_until/str/64-headers", |b| {
        b.iter(|| {
            let map: BTreeMap<String, String> =
                extract_until(black_box(raw.as_str()), ": ", "\r\n", "\r\n\r\n");
            map
        });
    });

    c.bench_function("extract_until/bytes/64-headers", |b| {
        b.iter(|| {
            let map: BTreeMap<Vec<u8>, Vec<u8>> =
                extract_until(black_box(bytes), b": ", b"\r\n", b"\r\n\r\n");
            map
        });
    });

    c.bench_function("extract_until/transcoding/64-headers", |b| {
        b.iter(|| {
            let map: BTreeMap<String, String> =
                extract_until(black_box(bytes), b": ", b"\r\n", b"\r\n\r\n");
            map
        });
    });

    c.bench_function("tokenize/str/url-path", |b| {
        b.iter(|| tokenize(black_box("/one/two/three/four/five/six/seven/eight"), "/"));
    });
}

criterion_group!(benches, extraction);
criterion_main!(benches);
