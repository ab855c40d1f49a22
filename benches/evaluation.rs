use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;
use stackcalc_rs::{evaluate, find_variables, Variables};

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let expr = "2 + 3 * 4";
    let variables = Variables::new();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("stackcalc_arithmetic", |b| {
        b.iter(|| evaluate(black_box(expr), black_box(&variables)))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0 * 4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let expr = "(10 + 20) * 3 / (4 - 1) + 5 % 3";
    let variables = Variables::new();

    group.bench_function("stackcalc_complex_arithmetic", |b| {
        b.iter(|| evaluate(black_box(expr), black_box(&variables)))
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0 % 3.0))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark variables and function calls
fn benchmark_variables_and_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Variable and Function Evaluation");

    let expr = "sqrt(x * x + y * y) + abs(sin(angle)) * log(rate + 1)";
    let variables = Variables::from([
        ("x".to_string(), 3.0),
        ("y".to_string(), 4.0),
        ("angle".to_string(), 0.5),
        ("rate".to_string(), 0.05),
    ]);

    group.bench_function("stackcalc_scan_variables", |b| {
        b.iter(|| find_variables(black_box(expr)))
    });

    group.bench_function("stackcalc_evaluate", |b| {
        b.iter(|| evaluate(black_box(expr), black_box(&variables)))
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_variables_and_functions
);
criterion_main!(benches);
