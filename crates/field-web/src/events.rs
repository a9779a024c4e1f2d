use crate::dom;
use crate::frame::FrameContext;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that stays registered until `remove` is called.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn add(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {kind} listener: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    pub fn remove(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Default)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    pub fn push(&mut self, listener: Listener) {
        self.0.push(listener);
    }

    pub fn remove_all(&mut self) {
        for listener in self.0.drain(..) {
            listener.remove();
        }
    }
}

pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
}

pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Listeners> {
    let mut listeners = Listeners::default();
    let wired = wire_resize(w)
        .and_then(|l| {
            listeners.push(l);
            wire_pointermove(w)
        })
        .and_then(|l| {
            listeners.push(l);
            wire_pointerleave(w)
        });
    match wired {
        Ok(l) => {
            listeners.push(l);
            Ok(listeners)
        }
        Err(e) => {
            listeners.remove_all();
            Err(e)
        }
    }
}

fn wire_resize(w: &InputWiring) -> anyhow::Result<Listener> {
    let window = w.window.clone();
    let canvas = w.canvas.clone();
    let frame_ctx = w.frame_ctx.clone();
    Listener::add(&w.window, "resize", move |_ev| {
        let viewport = dom::inner_viewport(&window);
        dom::sync_canvas_size(&canvas, viewport);
        let mut ctx = frame_ctx.borrow_mut();
        let FrameContext { driver, rng, .. } = &mut *ctx;
        driver.resize(viewport, rng);
    })
}

fn wire_pointermove(w: &InputWiring) -> anyhow::Result<Listener> {
    let frame_ctx = w.frame_ctx.clone();
    Listener::add(&w.window, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let (x, y) = input::pointer_px(ev.client_x(), ev.client_y());
            frame_ctx.borrow_mut().driver.pointer_moved(x, y);
        }
    })
}

fn wire_pointerleave(w: &InputWiring) -> anyhow::Result<Listener> {
    let frame_ctx = w.frame_ctx.clone();
    Listener::add(&w.document, "mouseleave", move |_ev| {
        frame_ctx.borrow_mut().driver.pointer_left();
    })
}
