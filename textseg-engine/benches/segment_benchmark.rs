//! Benchmarks for line break segmentation throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use textseg_engine::{EngineConfig, ExecutionMode, Segmenter};

/// Generate test text of roughly `size_kb` kilobytes
fn generate_test_text(base: &str, size_kb: usize) -> String {
    let repetitions = (size_kb * 1024 / base.len()).max(1);
    base.repeat(repetitions)
}

fn benchmark_scripts(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_str");
    let segmenter = Segmenter::new(EngineConfig::sequential()).unwrap();

    let samples = [
        ("latin", "The quick brown fox (jumps) over the lazy dog. "),
        ("japanese", "これは「テスト」です。ちょっと待ってください。"),
        ("mixed", "Version 1.2 リリース — see \u{201C}notes\u{201D}.\n"),
    ];

    for (name, base) in samples {
        let text = generate_test_text(base, 256);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| segmenter.segment_str(black_box(text)).count());
        });
    }

    group.finish();
}

fn benchmark_execution_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution_mode");
    group.sample_size(20);

    let text = generate_test_text("Line of text with several words in it.\n", 4 * 1024);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let segmenter = Segmenter::builder().execution_mode(mode).build().unwrap();
        group.bench_with_input(
            BenchmarkId::new("events", format!("{mode:?}")),
            &text,
            |b, text| {
                b.iter(|| segmenter.events(black_box(text)).unwrap().len());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_scripts, benchmark_execution_modes);
criterion_main!(benches);
