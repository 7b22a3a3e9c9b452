//! # Origin Verification Benchmarks
//!
//! | Stage | Target |
//! |-------|--------|
//! | Parse handshake field | < 1µs |
//! | Reject stale claim (no crypto) | < 1µs |
//! | Full P-384 verification | < 2ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hs_origin_verification::{
    parse, FixedClock, OriginVerificationApi, OriginVerificationService, SignatureVerifier,
    FRESHNESS_WINDOW,
};
use hs_tests::fixtures::Intermediary;
use std::time::Duration;

const NOW: u64 = 1_700_000_000;

fn service(
    intermediary: &Intermediary,
) -> OriginVerificationService<SignatureVerifier, FixedClock> {
    OriginVerificationService::with_parts(
        SignatureVerifier::new(intermediary.anchor()),
        FixedClock(NOW),
        FRESHNESS_WINDOW,
    )
}

fn bench_parse(c: &mut Criterion) {
    let intermediary = Intermediary::new();
    let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, NOW);

    c.bench_function("parse_handshake_field", |b| {
        b.iter(|| black_box(parse(black_box(&field))))
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("origin-verification");
    group.measurement_time(Duration::from_secs(10));

    let intermediary = Intermediary::new();
    let service = service(&intermediary);

    let valid = intermediary.handshake_field("example.com", "203.0.113.5", 54321, NOW);
    group.bench_function("verify_valid_claim", |b| {
        b.iter(|| black_box(service.verify(black_box(&valid))))
    });

    let stale = intermediary.handshake_field("example.com", "203.0.113.5", 54321, NOW - 60);
    group.bench_function("reject_stale_claim", |b| {
        b.iter(|| black_box(service.verify(black_box(&stale))))
    });

    let forged = Intermediary::new().handshake_field("example.com", "203.0.113.5", 54321, NOW);
    group.bench_function("reject_forged_claim", |b| {
        b.iter(|| black_box(service.verify(black_box(&forged))))
    });

    group.finish();
}

fn bench_handshake_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("origin-verification-burst");
    group.sample_size(20);

    let intermediary = Intermediary::new();
    let service = service(&intermediary);

    for size in [10u16, 100] {
        let fields: Vec<String> = (0..size)
            .map(|i| intermediary.handshake_field("example.com", "203.0.113.5", 1000 + i, NOW))
            .collect();

        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::new("verify_burst", size), &fields, |b, fields| {
            b.iter(|| {
                for field in fields {
                    black_box(service.verify(field).is_ok());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_verify, bench_handshake_burst);
criterion_main!(benches);
