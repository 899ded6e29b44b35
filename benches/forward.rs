use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tangent::{Dual, HyperDual, Scalar};

fn rosenbrock_f64(x: &[f64]) -> f64 {
    let mut sum = 0.0;
    for i in 0..x.len() - 1 {
        let t1 = 1.0 - x[i];
        let t2 = x[i + 1] - x[i] * x[i];
        sum += t1 * t1 + 100.0 * t2 * t2;
    }
    sum
}

fn rosenbrock_generic<T: Scalar>(x: &[T]) -> T {
    let one = T::one();
    let hundred = T::from_f64(100.0).unwrap();
    let mut sum = T::zero();
    for i in 0..x.len() - 1 {
        let t1 = one - x[i];
        let t2 = x[i + 1] - x[i] * x[i];
        sum = sum + t1 * t1 + hundred * t2 * t2;
    }
    sum
}

fn forward_gradient(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut grad = vec![0.0; n];
    for i in 0..n {
        let inputs: Vec<Dual<f64>> = x
            .iter()
            .enumerate()
            .map(|(k, &xi)| {
                if k == i {
                    Dual::variable(xi)
                } else {
                    Dual::constant(xi)
                }
            })
            .collect();
        grad[i] = rosenbrock_generic(&inputs).dx;
    }
    grad
}

fn finite_diff_gradient(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let h = 1e-7;
    let mut grad = vec![0.0; n];
    for i in 0..n {
        let mut xp = x.to_vec();
        let mut xm = x.to_vec();
        xp[i] += h;
        xm[i] -= h;
        grad[i] = (rosenbrock_f64(&xp) - rosenbrock_f64(&xm)) / (2.0 * h);
    }
    grad
}

fn bench_dual_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("dual_gradient");
    for n in [2, 10, 100] {
        let x: Vec<f64> = (0..n).map(|i| 0.5 + 0.01 * i as f64).collect();

        group.bench_with_input(BenchmarkId::new("f64_eval", n), &x, |b, x| {
            b.iter(|| black_box(rosenbrock_f64(black_box(x))))
        });

        group.bench_with_input(BenchmarkId::new("dual_forward", n), &x, |b, x| {
            b.iter(|| black_box(forward_gradient(black_box(x))))
        });

        group.bench_with_input(BenchmarkId::new("finite_diff", n), &x, |b, x| {
            b.iter(|| black_box(finite_diff_gradient(black_box(x))))
        });
    }
    group.finish();
}

fn bench_hyperdual_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("hyperdual_mixed_partial");

    let f = |x: HyperDual<f64>, y: HyperDual<f64>| ((x * y).exp() + x / y).sin();
    let f_f64 = |x: f64, y: f64| ((x * y).exp() + x / y).sin();

    group.bench_function("hyperdual", |b| {
        b.iter(|| {
            let (x, y) = HyperDual::variables(black_box(0.7), black_box(1.3));
            black_box(f(x, y).dxy)
        })
    });

    group.bench_function("finite_diff_4pt", |b| {
        b.iter(|| {
            let (x, y) = (black_box(0.7), black_box(1.3));
            let h = 1e-4;
            black_box(
                (f_f64(x + h, y + h) - f_f64(x + h, y - h) - f_f64(x - h, y + h)
                    + f_f64(x - h, y - h))
                    / (4.0 * h * h),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dual_gradient, bench_hyperdual_mixed);
criterion_main!(benches);
