use chrono::{Duration, TimeZone, Utc};
use common::RestaurantId;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use domain::{Address, GradeEntry, NewRestaurant, Restaurant};

fn make_restaurant(grade_count: usize) -> Restaurant {
    let start = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
    let grades = ["A", "B", "C", "Z", "P"];

    let mut draft = NewRestaurant::new("Bench Bistro", "Manhattan", "French")
        .with_address(Address::new("350", "5th Avenue").with_zipcode("10118"));
    // Spread dates so the latest entry sits in the middle of the list.
    for i in 0..grade_count {
        let offset = (i * 7919) % grade_count;
        draft = draft.with_grade(GradeEntry::new(
            start + Duration::days(offset as i64),
            grades[i % grades.len()],
            (i % 40) as f64,
        ));
    }
    draft.into_restaurant(RestaurantId::new())
}

fn bench_current_grade(c: &mut Criterion) {
    let small = make_restaurant(5);
    let large = make_restaurant(1000);

    c.bench_function("domain/current_grade_5_grades", |b| {
        b.iter(|| black_box(&small).current_grade().map(str::len));
    });

    c.bench_function("domain/current_grade_1000_grades", |b| {
        b.iter(|| black_box(&large).current_grade().map(str::len));
    });
}

fn bench_address_string(c: &mut Criterion) {
    let restaurant = make_restaurant(5);

    c.bench_function("domain/address_string", |b| {
        b.iter(|| black_box(&restaurant).address_string());
    });
}

fn bench_to_view(c: &mut Criterion) {
    let restaurant = make_restaurant(20);

    c.bench_function("domain/to_view", |b| {
        b.iter(|| black_box(&restaurant).to_view());
    });
}

criterion_group!(
    benches,
    bench_current_grade,
    bench_address_string,
    bench_to_view
);
criterion_main!(benches);
