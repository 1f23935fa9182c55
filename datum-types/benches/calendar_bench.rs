//! DATE conversion throughput: the closed-form day-count conversions against
//! the `time` crate's Julian-day calendar, plus literal parsing.

#![forbid(unsafe_code)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use time::{Date, Month};

use datum_types::{date_to_day_count, day_count_to_date, format_day_count, parse_day_count};

const N: usize = 100_000;

fn make_dates(n: usize) -> Vec<(i32, u32, u32)> {
    let mut rng = SmallRng::seed_from_u64(0xDA7E_0000_1970_0101);
    (0..n)
        .map(|_| {
            let year = rng.random_range(1..=9999);
            let month = rng.random_range(1..=12);
            // Day 28 is legal in every month.
            let day = rng.random_range(1..=28);
            (year, month, day)
        })
        .collect()
}

fn bench_calendar(c: &mut Criterion) {
    let dates = make_dates(N);
    let day_counts: Vec<i32> = dates
        .iter()
        .map(|&(y, m, d)| date_to_day_count(y, m, d))
        .collect();
    let literals: Vec<String> = dates
        .iter()
        .map(|&(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
        .collect();

    c.bench_function("calendar/date_to_day_count", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for &(y, m, d) in &dates {
                acc += i64::from(date_to_day_count(black_box(y), m, d));
            }
            black_box(acc);
        });
    });

    c.bench_function("calendar/time_crate_to_julian_day", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for &(y, m, d) in &dates {
                let Ok(month) = Month::try_from(m as u8) else {
                    continue;
                };
                if let Ok(date) = Date::from_calendar_date(black_box(y), month, d as u8) {
                    acc += i64::from(date.to_julian_day());
                }
            }
            black_box(acc);
        });
    });

    c.bench_function("calendar/day_count_to_date", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &days in &day_counts {
                let (y, m, d) = day_count_to_date(black_box(days));
                acc += y as u64 + u64::from(m) + u64::from(d);
            }
            black_box(acc);
        });
    });

    c.bench_function("calendar/parse_day_count", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for text in &literals {
                if let Ok(days) = parse_day_count(black_box(text)) {
                    acc += i64::from(days);
                }
            }
            black_box(acc);
        });
    });

    c.bench_function("calendar/format_day_count", |b| {
        b.iter(|| {
            let mut len = 0usize;
            for &days in &day_counts {
                if let Ok(text) = format_day_count(black_box(days)) {
                    len += text.len();
                }
            }
            black_box(len);
        });
    });
}

criterion_group!(benches, bench_calendar);
criterion_main!(benches);
