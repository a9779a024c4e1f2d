use field_core::Viewport;

// Class on <html> that marks the dark presentation mode
pub const DARK_CLASS: &str = "dark";

#[inline]
pub fn class_list_is_dark(class_attr: &str) -> bool {
    class_attr
        .split_ascii_whitespace()
        .any(|token| token == DARK_CLASS)
}

/// Map `window.innerWidth/innerHeight` to a viewport; anything unmeasurable
/// becomes an empty viewport so seeding waits for a real size.
#[inline]
pub fn viewport_from_inner(width: f64, height: f64) -> Viewport {
    match Viewport::checked(width, height) {
        Ok(vp) => vp,
        Err(e) => {
            log::debug!("[field] viewport not measurable yet: {e}");
            Viewport::default()
        }
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_px(client_x: i32, client_y: i32) -> (f32, f32) {
    (client_x as f32, client_y as f32)
}
