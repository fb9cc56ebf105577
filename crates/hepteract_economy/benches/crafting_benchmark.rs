//! Benchmark for the craft ledger.
//!
//! Run with: cargo bench --package hepteract_economy --bench crafting_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hepteract_economy::{CurrencyLedger, HepteractCatalog, HepteractKind, HEPTERACTS};

fn rich_ledger(catalog: &HepteractCatalog) -> CurrencyLedger {
    let mut ledger = CurrencyLedger::new().with_currency(HEPTERACTS, 1e300);
    for currency in catalog.required_currencies() {
        ledger.insert(currency, 1e300);
    }
    ledger
}

fn benchmark_max_craftable(c: &mut Criterion) {
    let catalog = HepteractCatalog::builtin().unwrap();
    let ledger = rich_ledger(&catalog);
    let challenge = catalog.get(HepteractKind::Challenge);

    c.bench_function("max_craftable_two_secondaries", |b| {
        b.iter(|| black_box(challenge.max_craftable(black_box(&ledger))));
    });
}

fn benchmark_craft_and_expand(c: &mut Criterion) {
    let catalog = HepteractCatalog::builtin().unwrap();

    c.bench_function("craft_fill_then_expand", |b| {
        b.iter(|| {
            let mut ledger = rich_ledger(&catalog);
            let mut chronos = catalog.get(HepteractKind::Chronos).clone();
            chronos.craft(black_box(1e6), &mut ledger).unwrap();
            black_box(chronos.expand())
        });
    });
}

criterion_group!(benches, benchmark_max_craftable, benchmark_craft_and_expand);
criterion_main!(benches);
