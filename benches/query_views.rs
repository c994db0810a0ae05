use bigfoot_sightings::app::services::filter_engine::QueryCache;
use bigfoot_sightings::app::services::sighting_loader::SightingStore;
use bigfoot_sightings::{QueryEngine, Sighting};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const CLASSES: [&str; 3] = ["Class A", "Class B", "Class C"];
const WORDS: [&str; 6] = ["heard", "saw", "tracks", "howling", "knocks", "smell"];

fn synthetic_store(size: usize) -> SightingStore {
    let sightings = (0..size)
        .map(|i| {
            let title = format!("Report {} {} near camp", i, WORDS[i % WORDS.len()]);
            let timestamp = format!(
                "{}-{:02}-{:02}T12:00:00Z",
                1950 + (i % 67),
                1 + (i % 12),
                1 + (i % 28)
            );
            Sighting::new(
                title,
                CLASSES[i % CLASSES.len()],
                30.0 + (i % 20) as f64,
                -120.0 + (i % 40) as f64,
                &timestamp,
            )
            .expect("synthetic sighting is valid")
        })
        .collect();
    SightingStore::from_sightings(sightings)
}

fn bench_query_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_views");

    for size in [1_000usize, 5_000] {
        let cold = QueryEngine::new(synthetic_store(size), QueryCache::disabled());
        group.bench_with_input(BenchmarkId::new("cold", size), &cold, |b, engine| {
            b.iter(|| black_box(engine.query_views(black_box("heard"))));
        });

        let warm = QueryEngine::new(synthetic_store(size), QueryCache::new(16, None));
        warm.query_views("heard");
        group.bench_with_input(BenchmarkId::new("warm", size), &warm, |b, engine| {
            b.iter(|| black_box(engine.query_views(black_box("heard"))));
        });
    }

    group.finish();
}

fn bench_empty_filter(c: &mut Criterion) {
    let engine = QueryEngine::new(synthetic_store(5_000), QueryCache::disabled());

    c.bench_function("query_views_all", |b| {
        b.iter(|| black_box(engine.query_views(black_box(""))));
    });
}

criterion_group!(benches, bench_query_views, bench_empty_filter);
criterion_main!(benches);
