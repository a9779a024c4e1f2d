// Host-side tests for the frame driver lifecycle.

mod common;

use common::{FakeScheduler, RecordingSurface};
use field_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn driver() -> FieldDriver<FakeScheduler> {
    FieldDriver::new(
        ParticleField::default(),
        SchemeFlag::default(),
        FakeScheduler::default(),
    )
}

#[test]
fn start_requests_exactly_one_frame() {
    let mut d = driver();
    d.start();
    d.start();
    assert_eq!(d.state(), DriverState::Running);
    assert_eq!(d.scheduler().requested, vec![1]);
    assert!(d.has_pending_frame());
}

#[test]
fn each_frame_paints_and_reschedules() {
    let mut d = driver();
    let mut rng = StdRng::seed_from_u64(1);
    d.resize(Viewport::new(800, 600), &mut rng);
    d.start();
    let mut surface = RecordingSurface::default();
    for _ in 0..5 {
        let stats = d.on_frame(&mut surface).expect("running");
        assert_eq!(stats.particles, PARTICLE_COUNT);
    }
    assert_eq!(d.field.frame(), 5);
    assert_eq!(d.scheduler().requested.len(), 6);
    assert!(d.has_pending_frame());
}

#[test]
fn teardown_with_pending_frame_cancels_and_blocks_painting() {
    let mut d = driver();
    let mut rng = StdRng::seed_from_u64(2);
    d.resize(Viewport::new(640, 480), &mut rng);
    d.start();
    let mut surface = RecordingSurface::default();
    d.on_frame(&mut surface);
    let painted = surface.calls.len();
    let pending = *d.scheduler().requested.last().expect("pending id");

    d.teardown();
    assert_eq!(d.scheduler().cancelled, vec![pending]);
    assert!(!d.has_pending_frame());

    // A callback that was already in flight must not touch the surface.
    assert!(d.on_frame(&mut surface).is_none());
    assert_eq!(surface.calls.len(), painted);
    assert_eq!(d.scheduler().requested.len(), 2);
    d.start();
    assert_eq!(d.scheduler().requested.len(), 2);
}

#[test]
fn teardown_without_pending_frame_is_safe_and_idempotent() {
    let mut d = driver();
    d.teardown();
    d.teardown();
    assert_eq!(d.state(), DriverState::TornDown);
    assert!(d.scheduler().cancelled.is_empty());
}

#[test]
fn resizes_never_change_particle_count() {
    let mut d = driver();
    let mut rng = StdRng::seed_from_u64(3);
    d.resize(Viewport::new(0, 0), &mut rng);
    assert!(!d.field.is_seeded());
    d.resize(Viewport::new(1024, 768), &mut rng);
    let first = d.field.particles().to_vec();
    for (w, h) in [(320, 200), (0, 0), (2560, 1440), (1, 1), (1024, 768)] {
        d.resize(Viewport::new(w, h), &mut rng);
        assert_eq!(d.field.particles().len(), PARTICLE_COUNT);
        assert_eq!(d.viewport(), Viewport::new(w, h));
    }
    assert_eq!(d.field.particles(), first.as_slice());
}

#[test]
fn pointer_enters_and_leaves() {
    let mut d = driver();
    assert_eq!(d.pointer(), Pointer::Away);
    d.pointer_moved(12.0, 34.0);
    assert_eq!(d.pointer(), Pointer::at(12.0, 34.0));
    d.pointer_left();
    assert_eq!(d.pointer(), Pointer::Away);
}

#[test]
fn scheme_change_is_picked_up_without_restart() {
    let mut d = driver();
    let mut rng = StdRng::seed_from_u64(4);
    d.resize(Viewport::new(300, 300), &mut rng);
    d.start();
    let writer = d.scheme.clone();

    let mut light = RecordingSurface::default();
    d.on_frame(&mut light);
    writer.set(ColorScheme::Dark);
    let mut dark = RecordingSurface::default();
    d.on_frame(&mut dark);

    let (_, _, light_core) = light.discs().next().expect("core");
    let (_, _, dark_core) = dark.discs().next().expect("core");
    assert_eq!(light_core.l, 65.0);
    assert_eq!(dark_core.l, 75.0);
    assert_eq!(d.state(), DriverState::Running);
    assert_eq!(d.scheduler().requested.len(), 3);
}

#[test]
fn refused_request_stops_the_loop_quietly() {
    let mut d = FieldDriver::new(
        ParticleField::default(),
        SchemeFlag::default(),
        FakeScheduler {
            refuse: true,
            ..FakeScheduler::default()
        },
    );
    d.start();
    assert!(!d.has_pending_frame());
    d.teardown();
    assert!(d.scheduler().cancelled.is_empty());
}
