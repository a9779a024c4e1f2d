//! Render planning: turns particle state into draw calls against a `Surface`.
//!
//! The surface is the only platform seam. The web frontend backs it with a
//! `CanvasRenderingContext2d`; tests and the native runner use recorders.

use crate::constants::*;
use crate::params::FieldParams;
use crate::particle::{Hue, Particle};
use crate::state::ColorScheme;
use glam::Vec2;
use std::fmt;

/// CSS-style colour: hue in degrees, saturation/lightness in percent, alpha 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    #[inline]
    pub fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Hsla,
}

/// Drawing operations the field needs from a host.
pub trait Surface {
    /// Clear the whole drawing area.
    fn clear(&mut self);
    /// Fill a disc of `radius` with a radial gradient centred on `center`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);
    /// Fill a solid disc.
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Hsla);
    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla);
}

/// Theme-dependent styling. Only rendering reads this; physics never does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub saturation: f32,
    pub glow_lightness: f32,
    pub core_lightness: f32,
    pub glow_alpha: f32,
    pub line_lightness: f32,
    pub line_alpha: f32,
}

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                saturation: 90.0,
                glow_lightness: 60.0,
                core_lightness: 75.0,
                glow_alpha: 0.5,
                line_lightness: 55.0,
                line_alpha: 0.12,
            },
            ColorScheme::Light => Self {
                saturation: 70.0,
                glow_lightness: 55.0,
                core_lightness: 65.0,
                glow_alpha: 0.35,
                line_lightness: 50.0,
                line_alpha: 0.08,
            },
        }
    }
}

/// Counts from one painted frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub connections: usize,
}

/// Visible intensity of a particle: boosted near the pointer, otherwise an
/// idle level modulated by its pulse.
#[inline]
pub fn glow_intensity(distance: Option<f32>, pulse: f32, params: &FieldParams) -> f32 {
    match distance.and_then(|d| params.proximity(d)) {
        Some(near) => NEAR_GLOW_BASE + near * NEAR_GLOW_SPAN,
        None => IDLE_GLOW + pulse * IDLE_GLOW_SWING,
    }
}

/// Alpha of a connection line at `distance`, or `None` when the pair is too
/// far apart to be connected.
#[inline]
pub fn connection_alpha(distance: f32, params: &FieldParams, palette: &Palette) -> Option<f32> {
    (distance < params.connection_distance)
        .then(|| (1.0 - distance / params.connection_distance) * palette.line_alpha)
}

/// Paint one frame of the field onto `surface`.
pub fn paint<S: Surface + ?Sized>(
    particles: &[Particle],
    params: &FieldParams,
    frame: u64,
    scheme: ColorScheme,
    surface: &mut S,
) -> FrameStats {
    let palette = Palette::for_scheme(scheme);
    surface.clear();

    for p in particles {
        let pulse = p.pulse(frame);
        let glow = glow_intensity(p.pointer_distance, pulse, params);
        let visible = p.size + pulse * PULSE_SIZE_SWING;
        paint_particle(surface, p.position, p.hue, visible, glow, &palette);
    }

    // O(N^2) over all pairs; fine for the fixed population.
    let mut connections = 0;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let dist = a.position.distance(b.position);
            if let Some(alpha) = connection_alpha(dist, params, &palette) {
                let color = Hsla::new(
                    a.hue.degrees(),
                    CONNECTION_SATURATION,
                    palette.line_lightness,
                    alpha,
                );
                surface.stroke_line(a.position, b.position, CONNECTION_WIDTH, color);
                connections += 1;
            }
        }
    }

    FrameStats {
        particles: particles.len(),
        connections,
    }
}

fn paint_particle<S: Surface + ?Sized>(
    surface: &mut S,
    at: Vec2,
    hue: Hue,
    visible: f32,
    glow: f32,
    palette: &Palette,
) {
    let glow_color = Hsla::new(hue.degrees(), palette.saturation, palette.glow_lightness, 0.0);
    let glow_alpha = glow * palette.glow_alpha;
    let stops = [
        GradientStop {
            offset: 0.0,
            color: glow_color.with_alpha(glow_alpha),
        },
        GradientStop {
            offset: GLOW_MID_STOP,
            color: glow_color.with_alpha(glow_alpha * GLOW_MID_STOP),
        },
        GradientStop {
            offset: 1.0,
            color: glow_color,
        },
    ];
    surface.fill_glow(at, visible * GLOW_RADIUS_SCALE, &stops);

    let core = Hsla::new(hue.degrees(), palette.saturation, palette.core_lightness, glow);
    surface.fill_disc(at, visible, core);
}
