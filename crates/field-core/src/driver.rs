//! Frame driver: the single mutable simulation context a host owns.
//!
//! The host feeds inputs (`resize`, `pointer_moved`, `pointer_left`, the
//! scheme flag) between ticks and calls `on_frame` from its scheduler
//! callback. `teardown` cancels any pending request; after it returns no
//! frame touches the surface again.

use crate::field::ParticleField;
use crate::render::{FrameStats, Surface};
use crate::state::{Pointer, SchemeFlag, Viewport};
use rand::Rng;

/// Host frame scheduling (e.g. `requestAnimationFrame`).
pub trait FrameScheduler {
    type Handle: Copy;

    /// Ask for the next tick. `None` when the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    TornDown,
}

pub struct FieldDriver<S: FrameScheduler> {
    pub field: ParticleField,
    pub scheme: SchemeFlag,
    pointer: Pointer,
    viewport: Viewport,
    scheduler: S,
    pending: Option<S::Handle>,
    state: DriverState,
}

impl<S: FrameScheduler> FieldDriver<S> {
    pub fn new(field: ParticleField, scheme: SchemeFlag, scheduler: S) -> Self {
        Self {
            field,
            scheme,
            pointer: Pointer::Away,
            viewport: Viewport::default(),
            scheduler,
            pending: None,
            state: DriverState::Idle,
        }
    }

    /// Begin the loop by requesting the first frame.
    pub fn start(&mut self) {
        if self.state == DriverState::TornDown || self.pending.is_some() {
            return;
        }
        self.state = DriverState::Running;
        self.schedule();
    }

    /// Scheduler callback. Integrates, paints and requests the next frame.
    /// Returns `None` without touching `surface` once torn down.
    pub fn on_frame<T: Surface + ?Sized>(&mut self, surface: &mut T) -> Option<FrameStats> {
        self.pending = None;
        if self.state != DriverState::Running {
            return None;
        }
        self.field.step(self.pointer);
        let stats = self.field.paint(self.scheme.get(), surface);
        self.schedule();
        Some(stats)
    }

    /// Record a new viewport. Seeds the field the first time the viewport is
    /// non-empty; never discards existing particles.
    pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.viewport = viewport;
        self.field.seed(viewport, rng);
    }

    #[inline]
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Pointer::at(x, y);
    }

    #[inline]
    pub fn pointer_left(&mut self) {
        self.pointer = Pointer::Away;
    }

    /// Cancel any pending frame and stop for good. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state != DriverState::TornDown {
            log::info!("[field] teardown after {} frames", self.field.frame());
        }
        self.state = DriverState::TornDown;
    }

    #[inline]
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn schedule(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[field] host refused a frame request; loop stopped");
        }
    }
}
