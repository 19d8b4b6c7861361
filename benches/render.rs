#[macro_use]
extern crate criterion;
extern crate cmplximage;
extern crate num;

use cmplximage::{hsl_wheel_map, render, riemann_map, ComplexRect};
use criterion::Criterion;
use num::Complex;

fn unit_domain() -> ComplexRect {
    ComplexRect::new(Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0))
}

fn bench_riemann(c: &mut Criterion) {
    c.bench_function("riemann identity 128x128", |b| {
        let map = riemann_map(|z| z);
        b.iter(|| render(&map, 128, 128, unit_domain()).unwrap())
    });
}

fn bench_hsl(c: &mut Criterion) {
    c.bench_function("hsl essential 128x128", |b| {
        let map = hsl_wheel_map(|z: Complex<f64>| z.inv().exp());
        b.iter(|| render(&map, 128, 128, unit_domain()).unwrap())
    });
}

criterion_group!(benches, bench_riemann, bench_hsl);
criterion_main!(benches);
