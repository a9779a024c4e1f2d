// Test doubles shared by the host-side integration tests.

#![allow(dead_code)]
use field_core::{FrameScheduler, GradientStop, Hsla, Surface};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Glow {
        center: Vec2,
        radius: f32,
        stops: Vec<GradientStop>,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Hsla,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Hsla,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn lines(&self) -> impl Iterator<Item = (&Vec2, &Vec2, &Hsla)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Line { from, to, color, .. } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn discs(&self) -> impl Iterator<Item = (&Vec2, f32, &Hsla)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Disc {
                center,
                radius,
                color,
            } => Some((center, *radius, color)),
            _ => None,
        })
    }

    pub fn glows(&self) -> impl Iterator<Item = (&Vec2, f32, &[GradientStop])> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Glow {
                center,
                radius,
                stops,
            } => Some((center, *radius, stops.as_slice())),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.calls.push(DrawCall::Glow {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.calls.push(DrawCall::Disc {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            width,
            color,
        });
    }
}

/// Scheduler that hands out increasing ids and records cancellations.
#[derive(Default)]
pub struct FakeScheduler {
    pub next_id: u32,
    pub requested: Vec<u32>,
    pub cancelled: Vec<u32>,
    pub refuse: bool,
}

impl FrameScheduler for FakeScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.requested.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}
