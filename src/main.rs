use log::info;
use progressive_fractal::{
    ChannelTileSink, EngineConfig, FormulaKind, InteractiveController, RenderEvent, SharedSurface,
    Surface, TileSink, Viewport, ViewportController,
};
use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const RESIZED_WIDTH: u32 = 400;
const RESIZED_HEIGHT: u32 = 300;
const RENDER_TIMEOUT: Duration = Duration::from_secs(60);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };

    run(config.clone())?;
    run_over_channel(config)
}

/// Renders the default view, zooms in at a point, switches formula, then
/// resizes, waiting for each generation to finish.
fn run(config: EngineConfig) -> Result<(), Box<dyn Error>> {
    let surface = Arc::new(SharedSurface::new(WIDTH, HEIGHT));
    let controller = InteractiveController::new(
        Arc::clone(&surface) as Arc<dyn TileSink>,
        config.clone(),
    )?;
    let mut view = ViewportController::new(&controller, Viewport::default(), WIDTH, HEIGHT, &config)?;

    let start = Instant::now();
    let generation = view.render()?;
    report(&surface, "initial view", generation, start, view.magnification())?;

    let start = Instant::now();
    let generation = view.zoom_at(106.0, 96.0, 0.25)?;
    report(&surface, "zoom", generation, start, view.magnification())?;

    let start = Instant::now();
    let generation = view.set_formula(FormulaKind::Julia)?;
    report(&surface, "julia", generation, start, view.magnification())?;

    let start = Instant::now();
    surface.lock().resize(RESIZED_WIDTH, RESIZED_HEIGHT);
    let generation = view.resize(RESIZED_WIDTH, RESIZED_HEIGHT)?;
    report(&surface, "resize", generation, start, view.magnification())?;

    Ok(())
}

/// Renders a Burning Ship through an mpsc channel, compositing on this
/// thread instead of the worker.
fn run_over_channel(config: EngineConfig) -> Result<(), Box<dyn Error>> {
    let (sink, receiver) = ChannelTileSink::new();
    let controller = InteractiveController::new(Arc::new(sink), config)?;
    let mut surface = Surface::new(WIDTH, HEIGHT);

    let start = Instant::now();
    let generation =
        controller.request_render(Viewport::default(), WIDTH, HEIGHT, 200, FormulaKind::BurningShip)?;

    loop {
        match receiver.recv_timeout(RENDER_TIMEOUT)? {
            RenderEvent::Error(error) => return Err(error.message.into()),
            event => {
                surface.apply(event);
            }
        }

        if surface.current_generation() == generation && surface.is_complete() {
            break;
        }
    }

    info!(
        "channel: generation {generation}, {} tiles, {:?} tile time, {:?} wall",
        surface.tiles_composited(),
        surface.render_time(),
        start.elapsed(),
    );

    Ok(())
}

fn report(
    surface: &SharedSurface,
    label: &str,
    generation: u64,
    start: Instant,
    magnification: f64,
) -> Result<(), Box<dyn Error>> {
    let completed = surface.wait_for_completion(generation, RENDER_TIMEOUT);
    let surface = surface.lock();

    if !completed {
        return Err(surface
            .last_error()
            .unwrap_or("render did not complete")
            .into());
    }

    info!(
        "{label}: generation {generation}, {} tiles, {:?} tile time, {:?} wall, {magnification:.1}x",
        surface.tiles_composited(),
        surface.render_time(),
        start.elapsed(),
    );

    Ok(())
}
