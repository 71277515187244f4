use budget_bee::{
    feed::{self, BankRecord},
    ledger::Taxonomy,
    score::{compute_score, ScoreSession},
};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn bench_compute_score(c: &mut Criterion) {
    c.bench_function("compute_score", |b| {
        b.iter(|| compute_score(black_box(593.41), black_box(1_000.0)))
    });
}

fn bench_session_rescore(c: &mut Criterion) {
    let mut session = ScoreSession::new(Taxonomy::survey_default(), 2_500.0).expect("session");
    for _ in 0..500 {
        session
            .import_transactions(feed::sample_records().iter().map(BankRecord::to_entry))
            .expect("import");
    }
    session.initialize();

    c.bench_function("session_add_transaction_8500", |b| {
        b.iter_batched(
            || session.clone(),
            |mut session| {
                session
                    .add_transaction(black_box(12.5), "bench")
                    .expect("add");
                session
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_compute_score, bench_session_rescore);
criterion_main!(benches);
