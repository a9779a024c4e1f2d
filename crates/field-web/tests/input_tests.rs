// Host-side tests for pure input helpers.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use field_core::Viewport;
use input::*;

#[test]
fn dark_class_detected_among_other_classes() {
    assert!(class_list_is_dark("dark"));
    assert!(class_list_is_dark("antialiased dark scroll-smooth"));
    assert!(class_list_is_dark("  dark\t"));
}

#[test]
fn dark_class_requires_exact_token() {
    assert!(!class_list_is_dark(""));
    assert!(!class_list_is_dark("light"));
    assert!(!class_list_is_dark("darkmode"));
    assert!(!class_list_is_dark("not-dark"));
}

#[test]
fn viewport_from_inner_truncates_fractional_pixels() {
    assert_eq!(viewport_from_inner(1440.6, 900.2), Viewport::new(1440, 900));
}

#[test]
fn viewport_from_inner_defers_unmeasurable_sizes() {
    assert!(viewport_from_inner(0.0, 900.0).is_empty());
    assert!(viewport_from_inner(1200.0, 0.4).is_empty());
    assert!(viewport_from_inner(f64::INFINITY, 900.0).is_empty());
    assert!(viewport_from_inner(f64::NAN, f64::NAN).is_empty());
}

#[test]
fn pointer_px_passes_client_coordinates_through() {
    assert_eq!(pointer_px(0, 0), (0.0, 0.0));
    assert_eq!(pointer_px(640, 360), (640.0, 360.0));
    assert_eq!(pointer_px(-5, 12), (-5.0, 12.0));
}
