use criterion::{black_box, criterion_group, criterion_main, Criterion};

use invite::customer::Customer;
use invite::distance::{DistanceCalculator, Haversine, SphericalLawOfCosines, Vincenty};
use invite::geo::{Point, DUBLIN_OFFICE};
use invite::select::select;

fn synthetic_customers(n: i32) -> Vec<Customer> {
    (0..n)
        .map(|i| Customer {
            user_id: n - i,
            name: format!("customer {i}"),
            latitude: 51.0 + (i % 400) as f64 * 0.01,
            longitude: -10.0 + (i % 700) as f64 * 0.01,
        })
        .collect()
}

fn bench_formula(c: &mut Criterion, name: &str, calculator: &dyn DistanceCalculator) {
    let amsterdam = Point::new(52.3706233, 4.9284594);
    c.bench_function(name, |b| {
        b.iter(|| calculator.great_circle_distance_km(black_box(&amsterdam), black_box(&DUBLIN_OFFICE)))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_formula(c, "Spherical law of cosines", &SphericalLawOfCosines);
    bench_formula(c, "Haversine", &Haversine);
    bench_formula(c, "Vincenty", &Vincenty);

    let customers = synthetic_customers(10_000);
    c.bench_function("Select 10k customers within 100 km", |b| {
        b.iter(|| select(black_box(&customers), &DUBLIN_OFFICE, &Vincenty, 100.0).len())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
