use std::hint::black_box;

use benches::generate_psr;
use psr_core::acoustics::directivity::Directivity;

use criterion::{Criterion, criterion_group, criterion_main};

const NUM_SAMPLES: &[usize] = &[1000, 5000, 20000];

fn synthesize_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("psr-core/curve");

    let psr = generate_psr(72.).unwrap();
    NUM_SAMPLES.iter().for_each(|&num_samples| {
        group.bench_with_input(
            format!("Psr::synthesize_curve(NumSamples={num_samples})"),
            &psr,
            |b, psr| {
                b.iter(|| psr.synthesize_curve(black_box(num_samples)).unwrap());
            },
        );
    });

    group.finish();
}

criterion_group!(benches, synthesize_curve);
criterion_main!(benches);
