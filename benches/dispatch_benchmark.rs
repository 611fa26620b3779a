//! Performance benchmarks for key dispatch
//!
//! Measures engine resolution alone and full keypresses through the
//! widget tree. Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ctui::app::App;
use ctui::config::AppConfig;
use ctui::input::{default_bindings, DispatchEngine, KeyToken};
use ctui::models::Contact;
use ctui::repository::ContactRepository;

fn app_with_contacts(count: usize) -> App {
    let contacts = (0..count).map(|i| {
        Contact::new(format!("Contact {:05}", i)).with_attribute("mail", "x@example.org")
    });
    App::new(AppConfig::defaults(), ContactRepository::with_contacts(contacts))
}

/// Benchmark resolving single keys and two-key sequences at the root
fn bench_engine_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_resolve");
    let keys: Vec<KeyToken> = ["t", "g", "g", "1", "2", "r", "i", "n", "z", "esc"]
        .into_iter()
        .map(KeyToken::from)
        .collect();
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("mixed_sequence", |b| {
        let mut engine = DispatchEngine::new(default_bindings());
        b.iter(|| {
            for key in &keys {
                black_box(engine.resolve(key, "contact_entry", false));
                black_box(engine.resolve(key, "frame", true));
            }
        })
    });

    group.finish();
}

/// Benchmark full keypresses through the widget tree
fn bench_tree_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_dispatch");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("move_down_up", size), size, |b, &size| {
            let mut app = app_with_contacts(size);
            b.iter(|| {
                app.press_keys(["t", "t", "r", "r"]);
                black_box(app.frame.list.position());
            })
        });

        group.bench_with_input(BenchmarkId::new("repeat_jump", size), size, |b, &size| {
            let mut app = app_with_contacts(size);
            b.iter(|| {
                app.press_keys(["9", "t", "g", "g", "G"]);
                black_box(app.frame.list.position());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engine_resolve, bench_tree_dispatch);
criterion_main!(benches);
