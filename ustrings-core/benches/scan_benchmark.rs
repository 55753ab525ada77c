use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use ustrings_core::{Configuration, Scanner};

fn sample_binary(size: usize) -> Vec<u8> {
    let chunk: &[u8] = b"\x7fELF\x02\x01\x00\x00/usr/lib/libc.so.6\x00\xff\xfe\
        GLIBC_PRIVATE\x00\x10\x00\xe6\x97\xa5\xe6\x9c\xac\xe8\xaa\x9e text\x00\x00";
    chunk.iter().copied().cycle().take(size).collect()
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let scanner = Scanner::new(Configuration::default()).unwrap();

    for size in [4 * 1024, 256 * 1024, 4 * 1024 * 1024] {
        let input = sample_binary(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut out = Vec::with_capacity(input.len());
                scanner.scan(black_box(&input[..]), &mut out).unwrap();
                out
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
