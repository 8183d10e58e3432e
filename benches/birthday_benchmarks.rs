//! Performance benchmarks for the upcoming-birthday query.
//!
//! The query walks every record, so these measure how it scales with the
//! size of the book and with the width of the window.

use address_book::{AddressBook, Record};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` contacts with birthdays spread over the year.
fn create_test_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("Contact{}", i)).unwrap();
        record.add_phone(&format!("{:010}", i)).unwrap();
        if i % 5 != 0 {
            let day = (i % 28) + 1;
            let month = (i % 12) + 1;
            record
                .add_birthday(&format!("{:02}.{:02}.{}", day, month, 1950 + i % 50))
                .unwrap();
        }
        book.add_record(record);
    }
    book
}

fn bench_upcoming_birthdays(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.get_upcoming_birthdays(black_box(reference)).len());
        });
    }

    group.finish();
}

fn bench_window_width(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let book = create_test_book(1_000);
    let mut group = c.benchmark_group("upcoming_birthdays_window");

    for days in [0u32, 7, 30, 366] {
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| book.upcoming_birthdays_within(black_box(reference), days).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_upcoming_birthdays, bench_window_width);
criterion_main!(benches);
