use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use charconv::Format;

const NUMS: &[f64] = &[0., -69., 123406000., 0.1234, 2.718281828459045, 1.7976931348623157e308];

fn benchmark_id(x: f64) -> BenchmarkId {
    BenchmarkId::from_parameter(ryu::Buffer::new().format(x))
}

fn charconv_general(c: &mut Criterion) {
    let mut g = c.benchmark_group("charconv_general");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| charconv::Buffer::new().format(black_box(num)).len() );
        });
    }
    g.finish();
}

fn charconv_exp(c: &mut Criterion) {
    let mut g = c.benchmark_group("charconv_exp");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| charconv::Buffer::new().format_exp(black_box(num)).len() );
        });
    }
    g.finish();
}

fn charconv_precision(c: &mut Criterion) {
    let mut g = c.benchmark_group("charconv_precision");

    let mut buf = [0u8; 64];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| charconv::to_chars(&mut buf, black_box(num), Format::Scientific, 17) );
        });
    }
    g.finish();
}

fn charconv_extended(c: &mut Criterion) {
    let mut g = c.benchmark_group("charconv_extended");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| charconv::Buffer::new().format(charconv::F80::from(black_box(num))).len() );
        });
    }
    g.finish();
}

fn ryu(c: &mut Criterion) {
    let mut g = c.benchmark_group("ryu");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| ryu::Buffer::new().format_finite(black_box(num)).len() );
        });
    }
    g.finish();
}

fn std(c: &mut Criterion) {
    let mut g = c.benchmark_group("std");

    use std::io::Write;
    let mut buf = [0u8; 80];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| write!(buf.as_mut_slice(), "{}", black_box(num)) );
        });
    }
    g.finish();
}

fn std_precision(c: &mut Criterion) {
    let mut g = c.benchmark_group("std_precision");

    use std::io::Write;
    let mut buf = [0u8; 80];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| write!(buf.as_mut_slice(), "{:.16e}", black_box(num)) );
        });
    }
    g.finish();
}

criterion_group!(
    bench,
    charconv_general,
    charconv_exp,
    charconv_precision,
    charconv_extended,
    ryu,
    std,
    std_precision,
);

criterion_main!(bench);
