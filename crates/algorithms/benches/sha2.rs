use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stepcrypt_algorithms::hash::sha2::{compress_block, expand, pad, parse_blocks, INITIAL_HASH};
use stepcrypt_algorithms::hash::Sha256;

// Test data sizes
const SIZES: &[usize] = &[
    64,      // 2 padded blocks
    256,     // 5 padded blocks
    1024,    // 1 KB
    16384,   // 16 KB
    1048576, // 1 MB
];

fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("SHA-256");

    for &size in SIZES {
        let data = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let digest = Sha256::digest(black_box(data));
                black_box(digest);
            });
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("SHA-256 stages");
    let blocks = parse_blocks(&pad(b"abc")).unwrap();

    group.bench_function("pad_1k", |b| {
        let data = vec![0u8; 1024];
        b.iter(|| black_box(pad(black_box(&data))));
    });
    group.bench_function("expand", |b| b.iter(|| black_box(expand(black_box(&blocks[0])))));
    group.bench_function("compress_block", |b| {
        b.iter(|| black_box(compress_block(&INITIAL_HASH, black_box(&blocks[0]))))
    });

    group.finish();
}

criterion_group!(benches, bench_sha256, bench_stages);
criterion_main!(benches);
