use std::io::Read;

use criterion::{black_box, criterion_group, Criterion, Throughput};
use pprof::criterion::{Output, PProfProfiler};

use rans::framing::{RansReader, RansWriter};

use crate::benchmarks::get_bytes;

/// Number of bytes buffered before each flush.
const BLOCK_SIZE: usize = 1 << 16;

fn compress(bytes: &[u8]) -> Vec<u8> {
    let mut writer = RansWriter::new(Vec::new());
    for chunk in bytes.chunks(BLOCK_SIZE) {
        writer.push_bytes(chunk).unwrap();
        writer.flush_block().unwrap();
    }
    writer.close().unwrap()
}

fn framing_benchmark(c: &mut Criterion) {
    let bytes = get_bytes();
    let compressed = compress(&bytes);

    let mut group = c.benchmark_group("framing benchmark");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.sample_size(10);
    group.bench_function("compression", |b| b.iter(|| black_box(compress(&bytes))));
    group.bench_function("decompression", |b| {
        b.iter(|| {
            let mut decompressed = Vec::with_capacity(bytes.len());
            RansReader::new(compressed.as_slice())
                .read_to_end(&mut decompressed)
                .unwrap();
            black_box(decompressed)
        })
    });
    group.finish();
}

criterion_group! {
    name = framing_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = framing_benchmark
}
