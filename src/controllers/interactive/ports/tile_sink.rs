use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives finished tiles and render errors from the worker thread.
///
/// `submit` runs on the worker while the controller's emission gate is
/// held, and `request_render` waits for that gate. It must not block: hand
/// the event to an unbounded queue or a short critical section and return.
pub trait TileSink: Send + Sync {
    fn submit(&self, event: RenderEvent);
}
