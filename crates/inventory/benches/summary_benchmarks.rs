use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_core::ItemId;
use stockroom_inventory::summary::{search, sorted_view};
use stockroom_inventory::{InventoryItem, InventorySummary};

fn collection(len: usize) -> Vec<InventoryItem> {
    (0..len)
        .map(|idx| InventoryItem {
            id: ItemId::new(idx as u64 + 1),
            // Reverse-ish order so sorting has work to do.
            name: format!("Item {:05}", len - idx),
            description: String::new(),
            quantity: (idx % 12) as u32,
            location: format!("Shelf {}", idx % 17),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        })
        .collect()
}

fn bench_sorted_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_view");

    for size in [10usize, 100, 1_000] {
        let items = collection(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("by_name", size), &items, |b, items| {
            b.iter(|| black_box(sorted_view(black_box(items))).len());
        });
    }

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [10usize, 100, 1_000] {
        let items = collection(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("from_items", size), &items, |b, items| {
            b.iter(|| InventorySummary::from_items(black_box(items)));
        });
        group.bench_with_input(BenchmarkId::new("search", size), &items, |b, items| {
            b.iter(|| black_box(search(black_box(items), "shelf 3")).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorted_view, bench_summary);
criterion_main!(benches);
