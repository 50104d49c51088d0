use astrocalc::keplerlib::solve_kepler;
use astrocalc::nutationlib::NutationModel;
use astrocalc::planetlib::moon::MoonModel;
use astrocalc::time::civil_to_julian;
use astrocalc::{Body, Ephemeris, Observer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ephemeris_bench(c: &mut Criterion) {
    let ephemeris = Ephemeris::new();
    let jd = civil_to_julian(1992, 12, 20.0);

    let mut group = c.benchmark_group("ephemeris");
    for body in Body::ALL {
        group.bench_function(body.name(), |b| {
            b.iter(|| ephemeris.state(black_box(body), black_box(jd)))
        });
    }
    group.bench_function("venus_equatorial", |b| {
        b.iter(|| ephemeris.equatorial(Body::Venus, black_box(jd)))
    });

    let observer = Observer::new(40.0, 75.0);
    group.bench_function("mars_horizontal", |b| {
        b.iter(|| ephemeris.horizontal(Body::Mars, black_box(jd), &observer))
    });
    group.finish();
}

fn moon_bench(c: &mut Criterion) {
    let jd = civil_to_julian(1992, 4, 12.0);

    let mut group = c.benchmark_group("moon");
    group.bench_function("precise", |b| {
        b.iter(|| MoonModel::Precise.state(black_box(jd)))
    });
    group.bench_function("truncated", |b| {
        b.iter(|| MoonModel::Truncated.state(black_box(jd)))
    });
    group.finish();
}

fn nutation_bench(c: &mut Criterion) {
    let jd = civil_to_julian(1987, 4, 10.0);

    let mut group = c.benchmark_group("nutation");
    group.bench_function("full", |b| {
        b.iter(|| NutationModel::Full.nutation(black_box(jd)))
    });
    group.bench_function("abridged", |b| {
        b.iter(|| NutationModel::Abridged.nutation(black_box(jd)))
    });
    group.bench_function("legacy_1900", |b| {
        b.iter(|| NutationModel::Legacy1900.nutation(black_box(jd)))
    });
    group.finish();
}

fn kepler_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("kepler");
    group.bench_function("low_eccentricity", |b| {
        b.iter(|| solve_kepler(black_box(0.0872664626), black_box(0.1)))
    });
    group.bench_function("high_eccentricity", |b| {
        b.iter(|| solve_kepler(black_box(0.3), black_box(0.99)))
    });
    group.finish();
}

criterion_group!(
    benches,
    ephemeris_bench,
    moon_bench,
    nutation_bench,
    kepler_bench
);
criterion_main!(benches);
