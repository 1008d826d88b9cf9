//! Headless controller for the skywave narrative engine.
//!
//! Owns the engine behind a single exclusive lock and runs the clock
//! source on a background thread while playing, so adapters (terminal,
//! GUI, tests) share one API: commands in, snapshots out.

use ringbuf::traits::{Consumer, Producer, Split};
use ringbuf::{HeapCons, HeapProd, HeapRb};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

use sw_engine::{Engine, TickOutcome};

// Re-export common types so callers don't need sw-ir/sw-engine directly.
pub use sw_engine::CatalogError;
pub use sw_ir::{Snapshot, Stage, StepCatalog, StoryStep};

/// Default clock cadence in milliseconds. Coarse UI-timer territory:
/// the cadence affects animation smoothness, not trajectory.
pub const DEFAULT_TICK_MS: u64 = 100;

/// Snapshots buffered between the clock thread and the adapter.
const FEED_CAPACITY: usize = 256;

/// Headless narrative controller — owns an engine and manages its clock.
pub struct Controller {
    engine: Arc<Mutex<Engine>>,
    tick_ms: u64,
    clock: Option<ClockHandle>,
    feed: Option<HeapCons<Snapshot>>,
}

struct ClockHandle {
    stop_signal: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Controller {
    /// Create a controller over a catalog, ticking at the default cadence.
    pub fn new(catalog: StepCatalog) -> Result<Self, CatalogError> {
        Self::with_cadence(catalog, DEFAULT_TICK_MS)
    }

    /// Create a controller ticking every `tick_ms` milliseconds.
    pub fn with_cadence(catalog: StepCatalog, tick_ms: u64) -> Result<Self, CatalogError> {
        let engine = Engine::new(catalog)?;
        Ok(Self {
            engine: Arc::new(Mutex::new(engine)),
            tick_ms: tick_ms.max(1),
            clock: None,
            feed: None,
        })
    }

    // --- Transport ---

    /// Start (or restart) playback and the clock thread.
    pub fn play(&mut self) {
        self.stop_clock();
        self.lock().play();
        log::debug!("play: clock started at {} ms cadence", self.tick_ms);

        let (producer, consumer) = HeapRb::<Snapshot>::new(FEED_CAPACITY).split();
        self.feed = Some(consumer);

        let engine = self.engine.clone();
        let stop_signal = Arc::new(AtomicBool::new(false));
        let finished = Arc::new(AtomicBool::new(false));
        let tick_ms = self.tick_ms;

        let stop = stop_signal.clone();
        let done = finished.clone();
        let thread = std::thread::spawn(move || {
            clock_thread(engine, stop, done, producer, tick_ms);
        });

        self.clock = Some(ClockHandle {
            stop_signal,
            finished,
            thread: Some(thread),
        });
    }

    /// Pause playback; step, progress, and wave position are preserved.
    pub fn pause(&mut self) {
        self.stop_clock();
        self.lock().pause();
        log::debug!("pause");
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.stop_clock();
        self.lock().reset();
        log::debug!("reset");
    }

    // --- Queries ---

    /// Is playback active?
    pub fn is_playing(&self) -> bool {
        self.lock().is_playing()
    }

    /// Has the journey run to completion (and not been reset)?
    pub fn is_finished(&self) -> bool {
        self.lock().is_finished()
    }

    /// Whether the clock thread is still running. False once the
    /// journey finishes or after `pause`/`reset`.
    pub fn clock_active(&self) -> bool {
        self.clock
            .as_ref()
            .is_some_and(|c| !c.finished.load(Ordering::Relaxed))
    }

    /// Current playback state.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// Clone of the step currently playing (or paused/completed on).
    pub fn current_step(&self) -> StoryStep {
        self.lock().current_step().clone()
    }

    /// Number of steps in the catalog.
    pub fn step_count(&self) -> usize {
        self.lock().catalog().step_count()
    }

    // --- Snapshot feed ---

    /// Next buffered snapshot from the clock thread, if any.
    ///
    /// The feed is lossy under backpressure; `snapshot()` always has
    /// the latest state.
    pub fn poll(&mut self) -> Option<Snapshot> {
        self.feed.as_mut()?.try_pop()
    }

    /// Drain all buffered snapshots, returning the most recent.
    pub fn drain(&mut self) -> Option<Snapshot> {
        let mut latest = None;
        while let Some(snap) = self.poll() {
            latest = Some(snap);
        }
        latest
    }

    // --- Internals ---

    /// A poisoned lock means a panicked clock thread; the engine state
    /// itself is always coherent, so keep serving it.
    fn lock(&self) -> MutexGuard<'_, Engine> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn stop_clock(&mut self) {
        if let Some(mut clock) = self.clock.take() {
            clock.stop_signal.store(true, Ordering::Relaxed);
            if let Some(handle) = clock.thread.take() {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.stop_clock();
    }
}

fn clock_thread(
    engine: Arc<Mutex<Engine>>,
    stop_signal: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
    mut producer: HeapProd<Snapshot>,
    tick_ms: u64,
) {
    loop {
        std::thread::sleep(Duration::from_millis(tick_ms));
        if stop_signal.load(Ordering::Relaxed) {
            break;
        }

        let Ok(mut eng) = engine.lock() else { break };
        let outcome = eng.tick(tick_ms as u32);
        let snap = eng.snapshot();
        drop(eng);

        let _ = producer.try_push(snap);

        match outcome {
            TickOutcome::Finished => {
                log::debug!("journey finished");
                break;
            }
            TickOutcome::StepCompleted => {
                log::debug!("advanced to step {}", snap.step_index);
            }
            TickOutcome::Advanced | TickOutcome::Idle => {}
        }
    }
    finished.store(true, Ordering::Relaxed);
}
