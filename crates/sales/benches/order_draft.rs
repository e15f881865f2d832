use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use orderdesk_catalog::Product;
use orderdesk_core::{Cents, Upc};
use orderdesk_sales::OrderDraft;

fn catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| {
            Product::new(
                Upc::new(format!("{:012}", i + 1)).unwrap(),
                format!("product {i}"),
                "Hardware Place",
                "10",
                Cents::new(100 + i as u64),
                1_000,
            )
            .unwrap()
        })
        .collect()
}

/// Accumulate one line per product, then total the draft.
fn bench_accumulate_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("draft_accumulate_distinct");
    for size in [10usize, 100, 1_000] {
        let products = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| {
                let mut draft = OrderDraft::new();
                for p in products {
                    draft.add_line(p, 3).unwrap();
                }
                black_box(draft.total().unwrap())
            })
        });
    }
    group.finish();
}

/// Repeatedly select the same product, exercising the merge path.
fn bench_accumulate_merged(c: &mut Criterion) {
    let mut group = c.benchmark_group("draft_accumulate_merged");
    let hammer = catalog(1).remove(0);
    for repeats in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(repeats as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &repeats, |b, &repeats| {
            b.iter(|| {
                let mut draft = OrderDraft::new();
                for _ in 0..repeats {
                    draft.add_line(&hammer, 1).unwrap();
                }
                black_box(draft.total().unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_accumulate_distinct, bench_accumulate_merged);
criterion_main!(benches);
