use criterion::{black_box, criterion_group, BatchSize, Criterion, Throughput};
use pprof::criterion::{Output, PProfProfiler};

use rans::ans::{BitDecoder, BitEncoder};

use crate::benchmarks::{frequencies, get_bits};

fn decoding_benchmark(c: &mut Criterion) {
    let bits = get_bits();
    let mut encoder = BitEncoder::new(&frequencies()).unwrap();
    encoder.encode_all(&bits).unwrap();

    let model = *encoder.model();
    let prelude = encoder.into_prelude();

    let mut group = c.benchmark_group("decoder benchmark");
    group.measurement_time(std::time::Duration::from_secs(10));
    group.throughput(Throughput::Elements(bits.len() as u64));
    group.sample_size(10);
    group.bench_function("decoding", |b| {
        b.iter_batched(
            || BitDecoder::with_model(model, prelude.clone()),
            |decoder| black_box(decoder.count()),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group! {
    name = decoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = decoding_benchmark
}
