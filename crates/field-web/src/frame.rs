use crate::canvas::CanvasSurface;
use field_core::{FieldDriver, FrameScheduler};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_INTERVAL: Duration = Duration::from_secs(5);

/// Holds the animation-frame callback. Emptied on teardown to break the
/// closure -> context -> scheduler -> closure cycle.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.tick.borrow();
        let callback = slot.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

pub struct FrameContext {
    pub driver: FieldDriver<RafScheduler>,
    pub surface: CanvasSurface,
    pub rng: StdRng,

    pub last_report: Instant,
    pub frames_since_report: u32,
    pub connections_since_report: usize,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let Some(stats) = self.driver.on_frame(&mut self.surface) else {
            return;
        };
        self.frames_since_report += 1;
        self.connections_since_report += stats.connections;

        let elapsed = self.last_report.elapsed();
        if elapsed >= STATS_INTERVAL {
            let frames = self.frames_since_report.max(1);
            log::debug!(
                "[frame] {:.1} fps, {} particles, {:.1} connections/frame",
                frames as f32 / elapsed.as_secs_f32(),
                stats.particles,
                self.connections_since_report as f32 / frames as f32
            );
            self.last_report = Instant::now();
            self.frames_since_report = 0;
            self.connections_since_report = 0;
        }
    }
}

/// Install the tick callback and request the first frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, tick: &TickSlot) {
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    frame_ctx.borrow_mut().driver.start();
}
