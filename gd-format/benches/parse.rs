//! Benchmarks for response format parsing

use criterion::{Criterion, criterion_group, criterion_main};
use gd_format::{IndexedMap, PageInfo, split_entities};
use std::hint::black_box;

fn bench_parse_indexed_map(c: &mut Criterion) {
    let profile = "1:RobTop:2:16:3:5024:4:0:8:149:10:12:11:9:13:149:16:71:17:22:46:814:30:1";

    c.bench_function("parse_indexed_map", |b| {
        b.iter(|| {
            let result = IndexedMap::parse(black_box(profile), ':');
            assert!(result.is_ok());
        })
    });
}

fn bench_parse_entity_list(c: &mut Criterion) {
    let entity =
        "1:Someone:2:123456:3:98:4:1:6:5:8:12:9:34:10:8:11:14:13:20:14:11:15:7:16:654321";
    let page = (0..10).map(|_| entity).collect::<Vec<_>>().join("|") + "#9999:0:10";

    c.bench_function("parse_entity_list", |b| {
        b.iter(|| {
            let (body, trailer) = black_box(page.as_str()).split_once('#').unwrap();
            for segment in split_entities(body, '|') {
                assert!(IndexedMap::parse(segment, ':').is_ok());
            }
            assert!(PageInfo::parse(trailer).is_ok());
        })
    });
}

criterion_group!(benches, bench_parse_indexed_map, bench_parse_entity_list);
criterion_main!(benches);
