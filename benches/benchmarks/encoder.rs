use criterion::{black_box, criterion_group, BatchSize, Criterion, Throughput};
use pprof::criterion::{Output, PProfProfiler};

use rans::ans::BitEncoder;

use crate::benchmarks::{frequencies, get_bits};

fn encoding_benchmark(c: &mut Criterion) {
    let bits = get_bits();

    let mut group = c.benchmark_group("encoder benchmark");
    group.throughput(Throughput::Elements(bits.len() as u64));
    group.sample_size(10);
    group.bench_function("encoding", |b| {
        b.iter_batched(
            || BitEncoder::new(&frequencies()).unwrap(),
            |mut encoder| {
                encoder.encode_all(&bits).unwrap();
                black_box(encoder.into_prelude())
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group! {
    name = encoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = encoding_benchmark
}
