use criterion::{criterion_group, criterion_main, Criterion};
use fdheat::domain::*;
use fdheat::initial_conditions::*;
use fdheat::solver::*;
use fdheat::stencil::standard_stencils;
use std::hint::black_box;

fn bench_cube_step(c: &mut Criterion) {
    for scheme in [UpdateScheme::InPlace, UpdateScheme::DoubleBuffered] {
        let mut stepper =
            Stepper::new(standard_stencils::heat_3d(20.0), scheme);
        let mut domain = OwnedDomain::<3>::cube(64);
        initialize(&mut domain, &UniformShell::default());
        c.bench_function(&format!("heat_3d_64_{scheme}"), |b| {
            b.iter(|| stepper.step(black_box(&mut domain)))
        });
    }
}

fn bench_bar_step(c: &mut Criterion) {
    let mut stepper = Stepper::new(
        standard_stencils::heat_1d(2000.0),
        UpdateScheme::InPlace,
    );
    let mut domain = OwnedDomain::<1>::cube(100_000);
    initialize(&mut domain, &SplitBar::default());
    c.bench_function("heat_1d_100000_in-place", |b| {
        b.iter(|| stepper.step(black_box(&mut domain)))
    });
}

criterion_group!(benches, bench_cube_step, bench_bar_step);
criterion_main!(benches);
