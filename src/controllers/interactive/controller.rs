use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::controllers::interactive::data::engine_config::EngineConfig;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::render_trigger::RenderTrigger;
use crate::controllers::interactive::ports::tile_sink::TileSink;
use crate::controllers::interactive::scheduler::{Delivery, ProgressiveScheduler, ScheduleOutcome};
use crate::core::actions::cancellation::{CancelToken, GenerationToken};
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::Viewport;
use crate::core::errors::config::ConfigError;
use crate::core::fractals::formula_kind::FormulaKind;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<RenderRequest>>,
    wake: Condvar,
    shutdown: AtomicBool,
    /// Held while bumping the generation and while delivering a tile, so
    /// no tile of a superseded generation reaches the sink afterwards.
    emission_gate: Mutex<()>,
    sink: Arc<dyn TileSink>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SharedState {
    fn is_current(&self, generation: u64) -> bool {
        !self.shutdown.load(Ordering::Acquire)
            && self.generation.load(Ordering::Acquire) == generation
    }

    /// Submits `event` if `generation` is still current. `completes` marks
    /// the generation as completed before the sink sees the event.
    ///
    /// The gate stays held across `submit`, so a new request waits for at
    /// most one tile hand-off.
    fn deliver(&self, generation: u64, event: RenderEvent, completes: bool) -> Delivery {
        let _gate = lock(&self.emission_gate);

        if !self.is_current(generation) {
            return Delivery::Stale;
        }

        if completes {
            self.last_completed_generation
                .store(generation, Ordering::Release);
        }

        self.sink.submit(event);
        Delivery::Delivered
    }
}

/// Owns the render worker and the generation counter.
///
/// Every call to [`InteractiveController::request_render`] supersedes the
/// previous request: the worker abandons it at the next tile boundary and
/// the sink never receives another tile for it.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(sink: Arc<dyn TileSink>, config: EngineConfig) -> Result<Self, ConfigError> {
        let scheduler = ProgressiveScheduler::new(&config)?;

        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            emission_gate: Mutex::new(()),
            sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, &scheduler);
        });

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    /// Validates and queues a render, returning its generation id.
    ///
    /// Invalid parameters are rejected before the generation moves, so the
    /// render in flight keeps going.
    pub fn request_render(
        &self,
        viewport: Viewport,
        pixel_width: u32,
        pixel_height: u32,
        max_iterations: u32,
        formula: FormulaKind,
    ) -> Result<u64, ConfigError> {
        let request = RenderRequest::new(
            viewport,
            pixel_width,
            pixel_height,
            max_iterations,
            formula,
            0,
        )?;

        // Lock order is gate, then slot: the slot always holds the newest generation
        let generation = {
            let _gate = lock(&self.shared.emission_gate);
            let generation = self.shared.generation.fetch_add(1, Ordering::AcqRel) + 1;
            *lock(&self.shared.latest_request) = Some(request.with_generation(generation));
            generation
        };
        self.shared.wake.notify_one();

        debug!(
            "generation {generation}: {pixel_width}x{pixel_height} {formula}, {max_iterations} iterations"
        );

        Ok(generation)
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    /// Latest generation whose final tile (or error) reached the sink.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        {
            // Taking the slot lock orders the flag before the worker's next wait
            let _slot = lock(&self.shared.latest_request);
            self.shared.wake.notify_one();
        }

        if let Some(handle) = self.worker.take()
            && handle.join().is_err()
        {
            warn!("render worker panicked");
        }
    }

    fn worker_loop(shared: &SharedState, scheduler: &ProgressiveScheduler) {
        loop {
            let request = {
                let mut guard = lock(&shared.latest_request);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            Self::render_request(shared, scheduler, &request);
        }
    }

    fn render_request(shared: &SharedState, scheduler: &ProgressiveScheduler, request: &RenderRequest) {
        let generation = request.generation();
        let token = GenerationToken::new(&shared.generation, generation);
        let cancel = || shared.shutdown.load(Ordering::Relaxed) || token.is_cancelled();

        let start = Instant::now();
        let result = scheduler.run(request, &cancel, |tile| {
            let completes = tile.is_final_tile_of_final_pass;
            shared.deliver(generation, RenderEvent::Tile(tile), completes)
        });

        match result {
            Ok(ScheduleOutcome::Completed { tiles }) => {
                info!(
                    "generation {generation}: {tiles} tiles in {:?}",
                    start.elapsed()
                );
            }
            Ok(ScheduleOutcome::Cancelled) => {
                debug!("generation {generation}: superseded after {:?}", start.elapsed());
            }
            Err(err) => {
                warn!("generation {generation}: render failed: {err}");

                let event = RenderEvent::Error(RenderError {
                    generation,
                    message: err.to_string(),
                });

                shared.deliver(generation, event, true);
            }
        }
    }
}

impl RenderTrigger for InteractiveController {
    fn request_render(
        &self,
        viewport: Viewport,
        pixel_width: u32,
        pixel_height: u32,
        max_iterations: u32,
        formula: FormulaKind,
    ) -> Result<u64, ConfigError> {
        InteractiveController::request_render(
            self,
            viewport,
            pixel_width,
            pixel_height,
            max_iterations,
            formula,
        )
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
