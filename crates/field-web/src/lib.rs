#![cfg(target_arch = "wasm32")]
use field_core::{FieldDriver, ParticleField, SchemeFlag};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod dom;
mod events;
mod frame;
mod input;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("field-web starting");
    Ok(())
}

/// Live particle field. Freeing the handle from JS unmounts it as well.
#[wasm_bindgen]
pub struct ParticleFieldHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticleFieldHandle {
    /// Stop the loop, detach every listener and observer, and remove the
    /// canvas. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.teardown();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

impl Drop for ParticleFieldHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount the particle field onto the page. Returns `None` (and renders
/// nothing) when the drawing surface cannot be acquired.
#[wasm_bindgen]
pub fn mount() -> Option<ParticleFieldHandle> {
    match mount_field() {
        Ok(mounted) => Some(ParticleFieldHandle {
            mounted: Some(mounted),
        }),
        Err(e) => {
            log::warn!("particle field disabled: {:?}", e);
            None
        }
    }
}

struct Mounted {
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    tick: frame::TickSlot,
    listeners: events::Listeners,
    theme: theme::ThemeWatcher,
    canvas: web::HtmlCanvasElement,
}

impl Mounted {
    fn teardown(mut self) {
        // Cancel the pending frame before dropping the callback it points at.
        self.frame_ctx.borrow_mut().driver.teardown();
        self.tick.borrow_mut().take();
        self.listeners.remove_all();
        self.theme.disconnect();
        self.canvas.remove();
        log::info!("particle field unmounted");
    }
}

fn mount_field() -> anyhow::Result<Mounted> {
    let (window, document) = dom::window_document()?;
    let (canvas, ctx) = dom::create_canvas(&document)?;

    let scheme = SchemeFlag::default();
    let theme = theme::ThemeWatcher::observe(&document, scheme.clone())?;

    let tick: frame::TickSlot = Rc::new(RefCell::new(None));
    let scheduler = frame::RafScheduler::new(window.clone(), tick.clone());
    let driver = FieldDriver::new(ParticleField::default(), scheme, scheduler);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver,
        surface: canvas::CanvasSurface::new(canvas.clone(), ctx),
        rng: StdRng::from_entropy(),
        last_report: Instant::now(),
        frames_since_report: 0,
        connections_since_report: 0,
    }));

    let listeners = match events::wire_input_handlers(&events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        frame_ctx: frame_ctx.clone(),
    }) {
        Ok(l) => l,
        Err(e) => {
            theme.disconnect();
            return Err(e);
        }
    };

    if let Err(e) = dom::attach_canvas(&document, &canvas) {
        let mut listeners = listeners;
        listeners.remove_all();
        theme.disconnect();
        return Err(e);
    }

    // Initial measure; seeds as soon as the viewport has area.
    let viewport = dom::inner_viewport(&window);
    dom::sync_canvas_size(&canvas, viewport);
    {
        let mut ctx = frame_ctx.borrow_mut();
        let frame::FrameContext { driver, rng, .. } = &mut *ctx;
        driver.resize(viewport, rng);
    }

    frame::start_loop(frame_ctx.clone(), &tick);
    log::info!(
        "particle field mounted at {}x{}",
        viewport.width,
        viewport.height
    );

    Ok(Mounted {
        frame_ctx,
        tick,
        listeners,
        theme,
        canvas,
    })
}
