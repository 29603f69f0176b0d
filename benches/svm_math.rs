//! Benchmarks for math node evaluation
//!
//! Measures one node evaluation end to end (unpack offsets, load, compute,
//! store) for each spectral representation, plus the raw-word decoder.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spectral_svm::spectral::Spectrum;
use spectral_svm::svm::*;
use spectral_svm::{Float3, Float8};

fn bench_spectrum_node<S: Spectrum>(c: &mut Criterion, label: &str) {
    let mut group = c.benchmark_group(format!("spectrum_math/{label}"));
    let mut stack = vec![0.5f32; SVM_STACK_SIZE];

    for ty in [
        NodeSpectrumMathType::Add,
        NodeSpectrumMathType::Divide,
        NodeSpectrumMathType::Power,
        NodeSpectrumMathType::Sign,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{ty:?}")), &ty, |bencher, &ty| {
            bencher.iter(|| {
                svm_node_spectrum_math::<S>(
                    black_box(&mut stack),
                    ty,
                    encode_uchar4(0, 8, 1, 0),
                    16,
                );
            });
        });
    }

    group.finish();
}

fn bench_spectrum(c: &mut Criterion) {
    bench_spectrum_node::<f32>(c, "1ch");
    bench_spectrum_node::<Float3>(c, "3ch");
    bench_spectrum_node::<Float8>(c, "8ch");
}

fn bench_decoder(c: &mut Criterion) {
    let mut stack = vec![0.5f32; SVM_STACK_SIZE];
    let program = [
        SvmNode::new(
            ShaderNodeType::Math as u32,
            NodeMathType::MultiplyAdd as u32,
            encode_uchar4(0, 1, 2, 0),
            3,
        ),
        SvmNode::new(
            ShaderNodeType::VectorMath as u32,
            NodeVectorMathType::Wrap as u32,
            encode_uchar4(4, 7, 10, 0),
            encode_uchar4(SVM_STACK_INVALID, 20, 0, 0),
        ),
        SvmNode::new(13, 0, 0, 0),
    ];

    c.bench_function("svm_eval_node/program", |bencher| {
        bencher.iter(|| {
            let mut offset = 0;
            while offset < program.len() {
                svm_eval_node(&program, black_box(&mut stack), &mut offset).unwrap();
            }
        });
    });
}

criterion_group!(benches, bench_spectrum, bench_decoder);
criterion_main!(benches);
