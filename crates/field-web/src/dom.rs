use crate::input;
use anyhow::anyhow;
use field_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

// Full-viewport overlay below the UI; screen blending so glows brighten the
// background instead of covering it.
const CANVAS_STYLE: &str = "position:fixed;inset:0;z-index:0;pointer-events:none;mix-blend-mode:screen";

#[inline]
pub fn window_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    Ok((window, document))
}

/// Create the canvas and its 2D context. The canvas is not attached yet, so a
/// failure leaves the page untouched.
pub fn create_canvas(
    document: &web::Document,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("not a canvas: {:?}", e))?;
    canvas
        .set_attribute("style", CANVAS_STYLE)
        .map_err(|e| anyhow!("style canvas: {:?}", e))?;
    canvas
        .set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow!("aria-hidden: {:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context type: {:?}", e))?;
    Ok((canvas, ctx))
}

pub fn attach_canvas(document: &web::Document, canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    body.append_child(canvas)
        .map_err(|e| anyhow!("append canvas: {:?}", e))?;
    Ok(())
}

#[inline]
pub fn inner_viewport(window: &web::Window) -> Viewport {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    input::viewport_from_inner(w, h)
}

/// Match the canvas backing store to the viewport. Particle state is untouched.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width);
    canvas.set_height(viewport.height);
}

#[inline]
pub fn root_is_dark(document: &web::Document) -> bool {
    document
        .document_element()
        .map(|el| input::class_list_is_dark(&el.class_name()))
        .unwrap_or(false)
}
