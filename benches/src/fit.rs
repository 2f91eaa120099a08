use std::hint::black_box;

use benches::generate_psr;
use psr_fit::{FitOption, PatternFitter};

use criterion::{Criterion, criterion_group, criterion_main};

const ORDERS: &[usize] = &[1, 2, 4];
const BASE_ANGLES: &[f64] = &[45., 72., 120.];

fn fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("psr-fit/fit");
    group.sample_size(10);

    BASE_ANGLES.iter().for_each(|&base_angle| {
        let fitter =
            PatternFitter::from_psr(&generate_psr(base_angle).unwrap(), FitOption::default())
                .unwrap();
        ORDERS.iter().for_each(|&order| {
            group.bench_with_input(
                format!("PatternFitter::fit(BaseAngle={base_angle}, Order={order})"),
                &fitter,
                |b, fitter| {
                    b.iter(|| fitter.fit(black_box(order)).unwrap());
                },
            );
        });
    });

    group.finish();
}

fn objective(c: &mut Criterion) {
    let mut group = c.benchmark_group("psr-fit/objective");

    let fitter =
        PatternFitter::from_psr(&generate_psr(72.).unwrap(), FitOption::default()).unwrap();
    ORDERS.iter().for_each(|&order| {
        let free = vec![1. / order as f64; order];
        group.bench_with_input(
            format!("FitObjective::cost(Order={order})"),
            &free,
            |b, free| {
                b.iter(|| fitter.objective().cost(black_box(free)));
            },
        );
    });

    group.finish();
}

criterion_group!(benches, fit, objective);
criterion_main!(benches);
