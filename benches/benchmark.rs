use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use numcell::{Integer, Kind, Literal, Radix, Rational, create_decimal, create_integer, create_rational};

const DIGITS_40: &str = "9238463426628462523573846321009187212372";

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse trivial", |b| {
        b.iter(|| create_integer(black_box("-64242662"), Radix::Decimal))
    });
    c.bench_function("parse 40 digits", |b| {
        b.iter(|| create_integer(black_box(DIGITS_40), Radix::Decimal))
    });
    let hex = "affe".repeat(64);
    c.bench_function("parse 256 hex digits", |b| {
        b.iter(|| create_integer(black_box(&hex), Radix::Hexadecimal))
    });

    let big = create_integer(DIGITS_40, Radix::Decimal).expect("integer");
    c.bench_function("render 40 digits", |b| {
        b.iter(|| black_box(&big).to_string_radix(Radix::Decimal, Literal::None))
    });
    c.bench_function("render 40 digits sexagesimal", |b| {
        b.iter(|| black_box(&big).to_string_radix(Radix::Sexagesimal, Literal::Stdhl))
    });

    let small = Integer::from(1234u64);
    c.bench_function("add trivial", |b| b.iter(|| black_box(&small) + black_box(&small)));
    c.bench_function("add boxed", |b| b.iter(|| black_box(&big) + black_box(&big)));
    let huge = big.pow(32);
    c.bench_function("multiply 1280 digits", |b| {
        b.iter(|| black_box(&huge) * black_box(&huge))
    });
    c.bench_function("divide 2560 by 1280 digits", |b| {
        let product = &huge * &huge;
        b.iter(|| black_box(&product) / black_box(&huge))
    });

    let third: Rational = create_rational("1/3", Radix::Decimal).expect("rational");
    c.bench_function("rational sum", |b| b.iter(|| black_box(&third) + black_box(&third)));

    let x = create_decimal("2.5", Radix::Decimal).expect("decimal");
    let pi = create_decimal("3.14159265358979323846264338327950288", Radix::Decimal).expect("decimal");
    c.bench_function("decimal multiply trivial", |b| b.iter(|| black_box(&x) * black_box(&x)));
    c.bench_function("decimal multiply boxed", |b| b.iter(|| black_box(&pi) * black_box(&pi)));
    c.bench_function("decimal divide boxed", |b| b.iter(|| black_box(&pi) / black_box(&x)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
