//! Integration tests for swarm-sim.

use std::f32::consts::PI;

use swarm_core::{BoidConstants, Bounds, Frame, SwarmConfig};

use crate::{Boid, NoopObserver, Swarm, SwarmObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> SwarmConfig {
    SwarmConfig {
        width: 100.0,
        height: 100.0,
        padding: 8.0,
        boid_count: 0,
        seed: 42,
        total_frames: 0,
        snapshot_interval_frames: 0,
        constants: BoidConstants::default(),
    }
}

fn empty_swarm() -> Swarm {
    Swarm::new(test_config()).unwrap()
}

fn boid(x: f32, y: f32, heading: f32) -> Boid {
    Boid { x, y, heading }
}

fn bounds_100() -> Bounds {
    Bounds::new(100.0, 100.0, 8.0).unwrap()
}

// ── Spawn and lifecycle ───────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn new_spawns_configured_count() {
        let cfg = SwarmConfig { boid_count: 25, ..test_config() };
        let swarm = Swarm::new(cfg).unwrap();
        assert_eq!(swarm.len(), 25);
    }

    #[test]
    fn new_rejects_degenerate_dimensions() {
        let cfg = SwarmConfig { width: 0.0, ..test_config() };
        assert!(Swarm::new(cfg).is_err());
    }

    #[test]
    fn spawn_positions_within_logical_bounds() {
        let mut swarm = empty_swarm();
        swarm.spawn(200);
        for b in &swarm.boids {
            assert!((0.0..100.0).contains(&b.x), "x={}", b.x);
            assert!((0.0..100.0).contains(&b.y), "y={}", b.y);
            assert!((-PI..PI).contains(&b.heading), "heading={}", b.heading);
        }
    }

    #[test]
    fn spawn_appends() {
        let mut swarm = empty_swarm();
        swarm.spawn(5);
        swarm.spawn(3);
        assert_eq!(swarm.len(), 8);
    }

    #[test]
    fn spawn_is_deterministic_per_seed() {
        let mut a = empty_swarm();
        let mut b = empty_swarm();
        a.spawn(50);
        b.spawn(50);
        assert_eq!(a.boids, b.boids);

        let mut c = Swarm::new(SwarmConfig { seed: 7, ..test_config() }).unwrap();
        c.spawn(50);
        assert_ne!(a.boids, c.boids);
    }

    #[test]
    fn clear_empties_and_is_idempotent() {
        let mut swarm = empty_swarm();
        swarm.spawn(10);
        swarm.clear();
        assert!(swarm.is_empty());
        swarm.clear(); // no-op on empty
        assert!(swarm.is_empty());
    }
}

// ── Neighbor detection ────────────────────────────────────────────────────────

#[cfg(test)]
mod neighbors {
    use super::*;
    use swarm_core::BoidId;

    #[test]
    fn lone_boid_has_none() {
        let flock = [boid(50.0, 50.0, 0.0)];
        let consts = BoidConstants::default();
        assert!(flock[0].neighbors(0, &flock, bounds_100(), &consts).is_empty());
    }

    #[test]
    fn vision_boundary_is_strict() {
        let consts = BoidConstants::default(); // vision 50
        // Distance exactly `vision` is excluded; just inside is included.
        let flock = [boid(0.0, 0.0, 0.0), boid(50.0, 0.0, 0.0), boid(49.0, 0.0, 0.0)];
        let ids = flock[0].neighbors(0, &flock, bounds_100(), &consts);
        assert_eq!(ids, vec![BoidId(2)]);
    }

    #[test]
    fn detects_across_the_seam() {
        let consts = BoidConstants::default();
        let flock = [boid(1.0, 50.0, 0.0), boid(99.0, 50.0, 0.0)];
        let ids = flock[0].neighbors(0, &flock, bounds_100(), &consts);
        assert_eq!(ids, vec![BoidId(1)]);
        assert!((bounds_100().distance(flock[0].position(), flock[1].position()) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn coincident_boids_see_each_other_not_themselves() {
        // Exclusion is by index identity, not state equality.
        let consts = BoidConstants::default();
        let flock = [boid(20.0, 20.0, 1.0), boid(20.0, 20.0, 1.0)];
        assert_eq!(flock[0].neighbors(0, &flock, bounds_100(), &consts), vec![BoidId(1)]);
        assert_eq!(flock[1].neighbors(1, &flock, bounds_100(), &consts), vec![BoidId(0)]);
    }

    #[test]
    fn zero_vision_sees_nothing() {
        let consts = BoidConstants { vision: 0.0, ..BoidConstants::default() };
        let flock = [boid(20.0, 20.0, 0.0), boid(20.0, 20.0, 0.0)];
        assert!(flock[0].neighbors(0, &flock, bounds_100(), &consts).is_empty());
    }
}

// ── Steering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod steering {
    use super::*;

    const RADIAL: f32 = PI / 60.0;

    #[test]
    fn no_neighbors_keeps_heading_and_moves_speed_units() {
        // Lone boid at (50,50) heading 0 on a 100×100 world ends one step
        // at (52,50), heading untouched.
        let mut b = boid(50.0, 50.0, 0.0);
        let flock = [b];
        b.step(0, &flock, bounds_100(), &BoidConstants::default());
        assert!((b.x - 52.0).abs() < 1e-4);
        assert!((b.y - 50.0).abs() < 1e-4);
        assert_eq!(b.heading, 0.0);
    }

    #[test]
    fn no_neighbor_translation_wraps_into_padded_band() {
        let mut b = boid(107.0, 50.0, 0.0);
        let flock = [b];
        b.step(0, &flock, bounds_100(), &BoidConstants::default());
        // 107 + 2 = 109 wraps past width+padding to -8 + 1.
        assert!((b.x - (-7.0)).abs() < 1e-3, "x={}", b.x);
    }

    #[test]
    fn collision_override_points_directly_away() {
        // Two boids 2 apart (threshold 2·radius = 16), already heading away:
        // the override leaves both headings fixed and they separate.
        let consts = BoidConstants::default();
        let a = boid(10.0, 10.0, PI);
        let b = boid(12.0, 10.0, 0.0);
        let flock = [a, b];

        let mut a2 = a;
        a2.step(0, &flock, bounds_100(), &consts);
        // atan2(0, -2) = π; delta 0; π re-wraps to -π, same direction.
        assert!((a2.heading.abs() - PI).abs() < 1e-5);
        assert!((a2.x - 8.0).abs() < 1e-3);

        let mut b2 = b;
        b2.step(1, &flock, bounds_100(), &consts);
        assert!(b2.heading.abs() < 1e-5);
        assert!((b2.x - 14.0).abs() < 1e-3);
    }

    #[test]
    fn collision_turn_is_rate_limited_and_clockwise_for_opposite_target() {
        // Target is π behind the current heading: wrap(π, -π, π) = -π, so
        // the clamped turn is exactly -radial_speed.
        let consts = BoidConstants::default();
        let a = boid(10.0, 10.0, 0.0);
        let b = boid(12.0, 10.0, 0.0);
        let flock = [a, b];

        let mut a2 = a;
        a2.step(0, &flock, bounds_100(), &consts);
        assert!((a2.heading - (-RADIAL)).abs() < 1e-5, "heading={}", a2.heading);
    }

    #[test]
    fn collision_tie_break_keeps_first_scanned_neighbor() {
        // Two neighbors at identical distance; strict `<` keeps the first.
        // Nearest = (10, 0) → target π → no turn from heading π.  Were the
        // second to win, the target -π/2 would turn the boid.
        let consts = BoidConstants::default();
        let me = boid(0.0, 0.0, PI);
        let flock = [me, boid(10.0, 0.0, PI), boid(0.0, 10.0, PI)];

        let mut stepped = me;
        stepped.step(0, &flock, bounds_100(), &consts);
        assert!((stepped.heading.abs() - PI).abs() < 1e-5, "heading={}", stepped.heading);
    }

    #[test]
    fn flocking_blends_alignment_over_cohesion_three_to_one() {
        // Neighbor 20 units away (outside collision range) heading π/2.
        // meanh = π/2, center bearing = 0 → target atan2(3, 1) ≈ 1.249.
        // One frame only turns radial_speed toward it.
        let consts = BoidConstants::default();
        let me = boid(50.0, 50.0, 0.0);
        let flock = [me, boid(70.0, 50.0, PI / 2.0)];

        let mut stepped = me;
        stepped.step(0, &flock, bounds_100(), &consts);
        assert!((stepped.heading - RADIAL).abs() < 1e-5, "heading={}", stepped.heading);
    }

    #[test]
    fn centroid_averages_raw_coordinates() {
        // Known preserved quirk: the flock centroid is the arithmetic mean
        // of raw coordinates, while neighbor detection is torus-aware.  The
        // neighbor sits 30 units away across the seam, but the center
        // bearing is computed the long way round (toward +x, bearing 0).
        // With the boid pre-aligned to the raw-coordinate target it does not
        // turn; a torus-aware centroid would have turned it by radial_speed.
        let consts = BoidConstants::default();
        let target = 3.0_f32.atan2(1.0); // blend of 3×(π/2) and bearing 0
        let me = boid(5.0, 50.0, target);
        let flock = [me, boid(75.0, 50.0, PI / 2.0)];

        let mut stepped = me;
        stepped.step(0, &flock, bounds_100(), &consts);
        assert!((stepped.heading - target).abs() < 1e-3, "heading={}", stepped.heading);
    }
}

// ── Swarm stepping ────────────────────────────────────────────────────────────

#[cfg(test)]
mod stepping {
    use super::*;

    #[test]
    fn invariants_hold_after_many_steps() {
        let mut swarm = empty_swarm();
        swarm.spawn(30);
        for _ in 0..50 {
            swarm.step();
        }
        for b in &swarm.boids {
            assert!((-PI..PI).contains(&b.heading), "heading={}", b.heading);
            assert!((-8.0..108.0).contains(&b.x), "x={}", b.x);
            assert!((-8.0..108.0).contains(&b.y), "y={}", b.y);
        }
    }

    #[test]
    fn zero_boid_step_is_noop_but_advances_frame() {
        let mut swarm = empty_swarm();
        swarm.step();
        swarm.step();
        assert_eq!(swarm.frame, Frame(2));
        assert!(swarm.is_empty());
    }

    #[test]
    fn update_order_is_sequential_not_snapshotted() {
        // A 400-wide world; boid A retreats out of B's vision during the
        // same frame.  Updated-in-place semantics: B, stepping second, sees
        // A's new position (51.5 away) and keeps its heading.  With the
        // order swapped B steps first, still sees A 49.5 away, and turns.
        let cfg = SwarmConfig { width: 400.0, height: 400.0, ..test_config() };
        let a = boid(10.0, 10.0, PI);
        let b = boid(59.5, 10.0, 0.0);

        let mut forward = Swarm::new(cfg.clone()).unwrap();
        forward.boids = vec![a, b];
        forward.step();
        assert_eq!(forward.boids[1].heading, 0.0);

        let mut swapped = Swarm::new(cfg).unwrap();
        swapped.boids = vec![b, a];
        swapped.step();
        assert!(
            (swapped.boids[0].heading - (-PI / 60.0)).abs() < 1e-5,
            "heading={}",
            swapped.boids[0].heading
        );
    }

    #[test]
    fn same_seed_same_trajectories() {
        let cfg = SwarmConfig { boid_count: 40, ..test_config() };
        let mut a = Swarm::new(cfg.clone()).unwrap();
        let mut b = Swarm::new(cfg).unwrap();
        for _ in 0..20 {
            a.step();
            b.step();
        }
        assert_eq!(a.boids, b.boids);
    }

    #[test]
    fn resize_between_steps_is_tolerated() {
        let mut swarm = empty_swarm();
        swarm.spawn(10);
        swarm.step();
        swarm.set_bounds(50.0, 50.0).unwrap();
        swarm.step();
        for b in &swarm.boids {
            assert!((-8.0..58.0).contains(&b.x), "x={}", b.x);
            assert!((-8.0..58.0).contains(&b.y), "y={}", b.y);
        }
    }

    #[test]
    fn resize_rejects_degenerate_dimensions() {
        let mut swarm = empty_swarm();
        assert!(swarm.set_bounds(-1.0, 50.0).is_err());
        // Bounds unchanged after the failed resize.
        assert_eq!(swarm.bounds.width, 100.0);
    }
}

// ── Frame loop and observers ──────────────────────────────────────────────────

#[cfg(test)]
mod frame_loop {
    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        starts: usize,
        ends: usize,
        snapshots: Vec<(Frame, usize)>,
        sim_end: Option<Frame>,
    }

    impl SwarmObserver for CountingObserver {
        fn on_frame_start(&mut self, _frame: Frame) {
            self.starts += 1;
        }
        fn on_frame_end(&mut self, _frame: Frame, _boid_count: usize) {
            self.ends += 1;
        }
        fn on_snapshot(&mut self, frame: Frame, boids: &[Boid]) {
            self.snapshots.push((frame, boids.len()));
        }
        fn on_sim_end(&mut self, final_frame: Frame) {
            self.sim_end = Some(final_frame);
        }
    }

    #[test]
    fn run_reaches_end_frame_and_fires_hooks() {
        let cfg = SwarmConfig {
            boid_count: 3,
            total_frames: 10,
            snapshot_interval_frames: 5,
            ..test_config()
        };
        let mut swarm = Swarm::new(cfg).unwrap();
        let mut obs = CountingObserver::default();
        swarm.run(&mut obs);

        assert_eq!(swarm.frame, Frame(10));
        assert_eq!(obs.starts, 10);
        assert_eq!(obs.ends, 10);
        assert_eq!(obs.snapshots, vec![(Frame(0), 3), (Frame(5), 3)]);
        assert_eq!(obs.sim_end, Some(Frame(10)));
    }

    #[test]
    fn run_frames_ignores_end_frame() {
        let mut swarm = empty_swarm(); // total_frames = 0
        swarm.run_frames(3, &mut NoopObserver);
        assert_eq!(swarm.frame, Frame(3));
    }

    #[test]
    fn run_on_finished_swarm_only_fires_sim_end() {
        let cfg = SwarmConfig { total_frames: 2, ..test_config() };
        let mut swarm = Swarm::new(cfg).unwrap();
        swarm.run(&mut NoopObserver);
        let mut obs = CountingObserver::default();
        swarm.run(&mut obs);
        assert_eq!(obs.starts, 0);
        assert_eq!(obs.sim_end, Some(Frame(2)));
    }
}
