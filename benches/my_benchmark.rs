use criterion::{black_box, criterion_group, criterion_main, Criterion};
use symbol_reconciler::{reconcile_records, SecurityRecord, SymbolIndex};

fn build_records(count: usize) -> Vec<SecurityRecord> {
    (0..count)
        .map(|i| {
            let name = format!("Security Number {}", i % (count / 4).max(1));
            let symbol = if i % 3 == 0 {
                String::new()
            } else {
                format!("SYM{}", i % 97)
            };
            SecurityRecord::new(&format!("{:09}", i), &name, &symbol, "1")
        })
        .collect()
}

fn benchmark_reconcile(c: &mut Criterion) {
    let records = build_records(100_000);

    c.bench_function("build_symbol_index", |b| {
        b.iter(|| SymbolIndex::build(black_box(&records)))
    });

    let index = SymbolIndex::build(&records);
    c.bench_function("reconcile_records", |b| {
        b.iter(|| reconcile_records(black_box(records.clone()), black_box(&index)))
    });
}

criterion_group!(benches, benchmark_reconcile);
criterion_main!(benches);
