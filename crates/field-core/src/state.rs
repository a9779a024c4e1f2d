//! Host-facing state types: viewport, pointer and colour scheme.
//!
//! These are written by event handlers and read once per tick. They avoid any
//! platform-specific API so both the web and native frontends can feed them.

use crate::error::FieldError;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Drawing surface size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert a host measurement (CSS pixels, possibly fractional) into a
    /// non-empty viewport.
    pub fn checked(width: f64, height: f64) -> Result<Self, FieldError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(FieldError::NonFiniteViewport { width, height });
        }
        let vp = Self::new(width.max(0.0) as u32, height.max(0.0) as u32);
        if vp.is_empty() {
            return Err(FieldError::EmptyViewport {
                width: vp.width,
                height: vp.height,
            });
        }
        Ok(vp)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Last known pointer location, or `Away` once it has left the tracked
/// surface (or before it ever entered).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pointer {
    At(Vec2),
    #[default]
    Away,
}

impl Pointer {
    #[inline]
    pub fn at(x: f32, y: f32) -> Self {
        Pointer::At(Vec2::new(x, y))
    }

    /// Distance from `point` to the pointer; `None` when the pointer is away.
    #[inline]
    pub fn distance_to(&self, point: Vec2) -> Option<f32> {
        match self {
            Pointer::At(p) => Some(p.distance(point)),
            Pointer::Away => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[inline]
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

/// Shared single-writer/single-reader cell for the page colour scheme.
///
/// The theme watcher holds one clone and writes; the frame loop holds another
/// and reads once per tick.
#[derive(Clone, Debug, Default)]
pub struct SchemeFlag(Rc<Cell<ColorScheme>>);

impl SchemeFlag {
    pub fn new(initial: ColorScheme) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    #[inline]
    pub fn get(&self) -> ColorScheme {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, scheme: ColorScheme) {
        self.0.set(scheme);
    }
}
