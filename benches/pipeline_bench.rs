// ABOUTME: Criterion benchmarks for the prediction pipeline stages
// ABOUTME: Measures record building, BMI evaluation, classification, and full report assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the prediction pipeline.
//!
//! Measures each stage on its own and the full pipeline over linear and tree
//! ensemble artifacts.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::{generate_submissions, linear_models, tree_models, SubmissionBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use obesity_insight_server::formatters::{format_output, OutputFormat};
use obesity_intelligence::{evaluate_bmi, FeatureRecordBuilder, PredictionPipeline};

fn bench_feature_record_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_record");

    for size in [SubmissionBatchSize::Small, SubmissionBatchSize::Medium] {
        let submissions = generate_submissions(size.count());
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("build", size.name()),
            &submissions,
            |b, submissions| {
                b.iter(|| {
                    for raw in submissions {
                        black_box(FeatureRecordBuilder::build(black_box(raw)).unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_bmi(c: &mut Criterion) {
    c.bench_function("bmi_evaluate", |b| {
        b.iter(|| evaluate_bmi(black_box(1.70), black_box(70.0)).unwrap());
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_run");
    let submissions = generate_submissions(SubmissionBatchSize::Medium.count());
    group.throughput(Throughput::Elements(submissions.len() as u64));

    let pipelines = [
        ("linear", PredictionPipeline::new(linear_models())),
        ("trees_10", PredictionPipeline::new(tree_models(10))),
        ("trees_100", PredictionPipeline::new(tree_models(100))),
    ];
    for (name, pipeline) in &pipelines {
        group.bench_with_input(BenchmarkId::new("model", name), pipeline, |b, pipeline| {
            b.iter(|| {
                for raw in &submissions {
                    black_box(pipeline.run(raw).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_presenters(c: &mut Criterion) {
    let pipeline = PredictionPipeline::new(linear_models());
    let report = pipeline
        .run(&generate_submissions(1)[0])
        .unwrap();

    let mut group = c.benchmark_group("presenter");
    for format in [OutputFormat::Json, OutputFormat::Text] {
        group.bench_with_input(
            BenchmarkId::new("format", format.as_str()),
            &report,
            |b, report| {
                b.iter(|| format_output(black_box(report), format).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_feature_record_builder,
    bench_bmi,
    bench_pipeline,
    bench_presenters,
);
criterion_main!(benches);
