use arc_solar::{Observer, equation_of_time, fractional_year, solar_declination, sun_times};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn position_bench(c: &mut Criterion) {
    let gamma = fractional_year(2023, 172, 12.0);

    let mut group = c.benchmark_group("position");
    group.bench_function("equation_of_time", |b| {
        b.iter(|| equation_of_time(black_box(gamma)))
    });
    group.bench_function("solar_declination", |b| {
        b.iter(|| solar_declination(black_box(gamma)))
    });
    group.finish();
}

fn sun_times_bench(c: &mut Criterion) {
    let observer = Observer::new(51.48, 0.0);
    c.bench_function("sun_times", |b| {
        b.iter(|| sun_times(black_box(observer), 2023, black_box(172)))
    });
}

criterion_group!(benches, position_bench, sun_times_bench);
criterion_main!(benches);
