//! Tick-throughput bench: drive a full journey at a 100 ms cadence.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sw_engine::{Engine, TickOutcome};
use sw_ir::{Stage, StepCatalog, StoryStep};

fn journey_catalog(steps: usize) -> StepCatalog {
    StepCatalog::new(
        (0..steps)
            .map(|i| StoryStep::new(i as u32 + 1, "Step", Stage::Space, 3000))
            .collect(),
    )
}

fn bench_full_journey(c: &mut Criterion) {
    c.bench_function("journey_100_steps_100ms_cadence", |b| {
        b.iter(|| {
            let mut engine = Engine::new(journey_catalog(100)).unwrap();
            engine.play();
            loop {
                if engine.tick(black_box(100)) == TickOutcome::Finished {
                    break;
                }
            }
            black_box(engine.snapshot())
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = Engine::new(StepCatalog::solar_storm()).unwrap();
    engine.play();
    engine.tick(100);

    c.bench_function("snapshot", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(benches, bench_full_journey, bench_snapshot);
criterion_main!(benches);
