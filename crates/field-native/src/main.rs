use clap::Parser;
use field_core::{
    ColorScheme, FieldDriver, FrameScheduler, GradientStop, Hsla, ParticleField, SchemeFlag,
    Surface, Viewport,
};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

/// Drive the particle field headlessly and log per-interval statistics.
#[derive(Parser, Debug)]
#[command(name = "field-native", version, about)]
struct Args {
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// RNG seed for particle placement
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1280)]
    width: u32,
    #[arg(long, default_value_t = 720)]
    height: u32,
    /// Paint with the dark palette
    #[arg(long)]
    dark: bool,
    /// Log statistics every N ticks
    #[arg(long, default_value_t = 600)]
    report_every: u64,
    /// Keep the pointer away for the whole run
    #[arg(long)]
    no_pointer: bool,
}

/// Hands out frame ids immediately; the run loop plays the role of the host.
#[derive(Default)]
struct SteppedScheduler {
    next: u64,
    pending: Option<u64>,
}

impl FrameScheduler for SteppedScheduler {
    type Handle = u64;

    fn request_frame(&mut self) -> Option<u64> {
        self.next += 1;
        self.pending = Some(self.next);
        self.pending
    }

    fn cancel_frame(&mut self, handle: u64) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

/// Counts draw calls instead of rasterising.
#[derive(Default)]
struct CountingSurface {
    clears: u64,
    glows: u64,
    discs: u64,
    lines: u64,
    line_alpha: f64,
}

impl Surface for CountingSurface {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn fill_glow(&mut self, _center: Vec2, _radius: f32, _stops: &[GradientStop]) {
        self.glows += 1;
    }

    fn fill_disc(&mut self, _center: Vec2, _radius: f32, _color: Hsla) {
        self.discs += 1;
    }

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, color: Hsla) {
        self.lines += 1;
        self.line_alpha += color.a as f64;
    }
}

// Pointer orbits the centre for three quarters of each lap, then leaves.
fn scripted_pointer(tick: u64, viewport: Viewport) -> Option<Vec2> {
    const LAP: u64 = 480;
    let phase = (tick % LAP) as f32 / LAP as f32;
    if phase > 0.75 {
        return None;
    }
    let center = viewport.size() * 0.5;
    let radius = viewport.size().min_element() * 0.3;
    let angle = phase * TAU;
    Some(center + Vec2::new(angle.cos(), angle.sin()) * radius)
}

fn field_summary(field: &ParticleField) -> (f32, f32) {
    let n = field.particles().len().max(1) as f32;
    let (offset, speed) = field.particles().iter().fold((0.0, 0.0), |(o, s), p| {
        (o + p.position.distance(p.base), s + p.velocity.length())
    });
    (offset / n, speed / n)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let viewport = Viewport::new(args.width, args.height);
    if viewport.is_empty() {
        anyhow::bail!("viewport {}x{} has zero area", args.width, args.height);
    }

    let scheme = SchemeFlag::new(ColorScheme::from_dark(args.dark));
    let mut driver = FieldDriver::new(
        ParticleField::default(),
        scheme,
        SteppedScheduler::default(),
    );
    let mut rng = StdRng::seed_from_u64(args.seed);
    driver.resize(viewport, &mut rng);
    driver.start();

    let mut surface = CountingSurface::default();
    let report_every = args.report_every.max(1);
    let started = Instant::now();
    let mut connections_in_window = 0usize;

    for tick in 1..=args.ticks {
        match scripted_pointer(tick, viewport).filter(|_| !args.no_pointer) {
            Some(p) => driver.pointer_moved(p.x, p.y),
            None => driver.pointer_left(),
        }
        let Some(stats) = driver.on_frame(&mut surface) else {
            log::warn!("driver stopped at tick {tick}");
            break;
        };
        connections_in_window += stats.connections;

        if tick % report_every == 0 {
            let (offset, speed) = field_summary(&driver.field);
            log::info!(
                "tick {:>6}: {:.1} connections/frame, mean offset {:.2}px, mean speed {:.3}px/tick",
                tick,
                connections_in_window as f32 / report_every as f32,
                offset,
                speed
            );
            connections_in_window = 0;
        }
    }

    driver.teardown();
    let elapsed = started.elapsed();
    let frames = surface.clears.max(1);
    log::info!(
        "{} frames in {:.2?} ({:.1} us/frame); {} glows, {} cores, {} lines (mean alpha {:.4})",
        surface.clears,
        elapsed,
        elapsed.as_secs_f64() * 1e6 / frames as f64,
        surface.glows,
        surface.discs,
        surface.lines,
        if surface.lines > 0 {
            surface.line_alpha / surface.lines as f64
        } else {
            0.0
        }
    );
    log::debug!("scheduler pending after teardown: {:?}", driver.scheduler().pending);
    Ok(())
}
