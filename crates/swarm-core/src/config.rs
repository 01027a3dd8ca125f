//! Per-run constants and top-level configuration.

use std::f32::consts::PI;

use crate::error::SwarmResult;
use crate::frame::Frame;
use crate::torus::Bounds;

// ── BoidConstants ─────────────────────────────────────────────────────────────

/// The fixed per-boid parameters, identical for every boid and immutable for
/// the run.
///
/// These are deliberately one shared value rather than fields duplicated on
/// each boid: a boid's own state is exactly `x, y, heading`, and the swarm
/// hands the constants to each step call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoidConstants {
    /// Body radius in world units.  Two boids closer than `2 * radius` are
    /// about to collide and trigger the avoidance override.
    pub radius: f32,
    /// Distance travelled per frame along the heading.
    pub speed: f32,
    /// Maximum heading change per frame, radians.
    pub radial_speed: f32,
    /// Neighbor detection radius (toroidal distance, strict `<`).
    pub vision: f32,
}

impl Default for BoidConstants {
    fn default() -> Self {
        Self {
            radius: 8.0,
            speed: 2.0,
            radial_speed: PI / 60.0,
            vision: 50.0,
        }
    }
}

// ── SwarmConfig ───────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in the application crate and passed to
/// `Swarm::new`.  The same config and seed always reproduce the same run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmConfig {
    /// Logical world width.  Must be positive.
    pub width: f32,

    /// Logical world height.  Must be positive.
    pub height: f32,

    /// Border band beyond the logical bounds before positions wrap.
    pub padding: f32,

    /// Boids spawned at construction.  `spawn` can add more later.
    pub boid_count: usize,

    /// Master RNG seed.  Drives spawn positions and headings.
    pub seed: u64,

    /// Total frames for `Swarm::run`.  Irrelevant to host-driven stepping.
    pub total_frames: u64,

    /// Emit an `on_snapshot` callback every N frames.  0 disables snapshots.
    pub snapshot_interval_frames: u64,

    /// Fixed per-boid parameters.
    pub constants: BoidConstants,
}

impl SwarmConfig {
    /// The frame at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> Frame {
        Frame(self.total_frames)
    }

    /// Validate the dimensions and build the world bounds.
    pub fn bounds(&self) -> SwarmResult<Bounds> {
        Bounds::new(self.width, self.height, self.padding)
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 8.0,
            boid_count: 0,
            seed: 0,
            total_frames: 0,
            snapshot_interval_frames: 0,
            constants: BoidConstants::default(),
        }
    }
}
