use criterion::{black_box, criterion_group, criterion_main, Criterion};

use warden_core::config::WardenConfig;
use warden_incidents::{SeverityPipeline, SourceDataset};

const SAMPLES: [&str; 6] = [
    "You are a stupid loser",
    "What a wonderful and kind friend",
    "the weather is cloudy today",
    "I think Jordan is so annoying",
    "Honestly Alex and Sam are dumb",
    "nobody cares about your mom jokes",
];

/// 1K records cycling through the samples.
fn build_dataset() -> SourceDataset {
    SourceDataset::from_texts((0..1_000).map(|i| SAMPLES[i % SAMPLES.len()].to_string()))
}

fn bench_batch(c: &mut Criterion) {
    let dataset = build_dataset();
    let mut config = WardenConfig::default();

    let parallel = SeverityPipeline::from_config(&config).unwrap();
    c.bench_function("pipeline_1k_parallel", |b| {
        b.iter(|| black_box(parallel.run_dataset(&dataset)));
    });

    config.pipeline.parallel = false;
    config.pipeline.include_tfidf = false;
    let sequential = SeverityPipeline::from_config(&config).unwrap();
    c.bench_function("pipeline_1k_sequential_no_tfidf", |b| {
        b.iter(|| black_box(sequential.run_dataset(&dataset)));
    });
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
