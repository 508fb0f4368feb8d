use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::tile_sink::TileSink;
use crate::presenters::surface::surface::Surface;

/// A [`Surface`] the render worker paints into directly.
pub struct SharedSurface {
    surface: Mutex<Surface>,
    changed: Condvar,
}

impl SharedSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Mutex::new(Surface::new(width, height)),
            changed: Condvar::new(),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Surface> {
        self.surface.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks until `generation` is fully painted, a newer generation
    /// replaces it, or `timeout` passes. Returns whether it completed.
    pub fn wait_for_completion(&self, generation: u64, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut surface = self.lock();

        loop {
            if surface.current_generation() == generation && surface.is_complete() {
                return true;
            }

            let superseded = surface.current_generation() > generation;
            let failed = surface.current_generation() == generation && surface.last_error().is_some();
            let remaining = deadline.saturating_duration_since(Instant::now());
            if superseded || failed || remaining.is_zero() {
                return false;
            }

            surface = self
                .changed
                .wait_timeout(surface, remaining)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }
}

impl TileSink for SharedSurface {
    fn submit(&self, event: RenderEvent) {
        if self.lock().apply(event) {
            self.changed.notify_all();
        }
    }
}
