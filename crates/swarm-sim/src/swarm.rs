//! The `Swarm`: world bounds, the boid sequence, and the frame loop.

use swarm_core::{BoidConstants, Bounds, Frame, SwarmConfig, SwarmResult, SwarmRng};

use crate::boid::Boid;
use crate::observer::SwarmObserver;

/// The simulation environment: toroidal world dimensions plus the ordered
/// boid sequence it owns.
///
/// The swarm has no behavior of its own beyond bookkeeping — spawning,
/// clearing, and invoking each boid's step.  Insertion order of `boids` is
/// not semantically meaningful, but it *is* the update order (see
/// [`step`][Swarm::step]).
pub struct Swarm {
    /// The run configuration this swarm was built from.
    pub config: SwarmConfig,

    /// World dimensions and wrap padding.  Mutable between frames via
    /// [`set_bounds`][Swarm::set_bounds].
    pub bounds: Bounds,

    /// Fixed per-boid parameters, shared by every boid.
    pub constants: BoidConstants,

    /// The ordered boid sequence.  Public for read-only render access;
    /// hosts must not mutate it concurrently with `step`.
    pub boids: Vec<Boid>,

    /// Frames stepped so far.
    pub frame: Frame,

    rng: SwarmRng,
}

impl Swarm {
    /// Validate the configured dimensions, seed the RNG, and spawn
    /// `config.boid_count` boids.
    pub fn new(config: SwarmConfig) -> SwarmResult<Swarm> {
        let bounds = config.bounds()?;
        let mut swarm = Swarm {
            bounds,
            constants: config.constants,
            boids: Vec::with_capacity(config.boid_count),
            frame: Frame::ZERO,
            rng: SwarmRng::new(config.seed),
            config,
        };
        let count = swarm.config.boid_count;
        swarm.spawn(count);
        Ok(swarm)
    }

    // ── Boid lifecycle ────────────────────────────────────────────────────

    /// Append `n` freshly spawned boids.
    ///
    /// No upper bound is enforced here; the host may impose one.
    pub fn spawn(&mut self, n: usize) {
        self.boids.reserve(n);
        for _ in 0..n {
            let boid = Boid::spawn(&self.bounds, &mut self.rng);
            self.boids.push(boid);
        }
    }

    /// Empty the boid sequence.  No effect on an already-empty swarm.
    pub fn clear(&mut self) {
        self.boids.clear();
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    // ── Host hooks ────────────────────────────────────────────────────────

    /// Replace the logical world dimensions (host surface resize).
    ///
    /// Takes effect at the next `step`; boids are not repositioned — they
    /// wrap against the new extent as they move.
    pub fn set_bounds(&mut self, width: f32, height: f32) -> SwarmResult<()> {
        self.bounds.resize(width, height)
    }

    /// Advance the simulation by one frame.
    ///
    /// Boids are stepped in sequence order against the live sequence: each
    /// boid is copied out, steps while reading `self.boids` (which already
    /// contains this frame's updates for earlier indices), and is written
    /// back.  Later boids therefore see a mix of updated and not-yet-updated
    /// neighbors — the defined semantics, deliberately not snapshot-isolated.
    ///
    /// Infallible; with zero boids it only advances the frame counter.
    pub fn step(&mut self) {
        for i in 0..self.boids.len() {
            let mut boid = self.boids[i];
            boid.step(i, &self.boids, self.bounds, &self.constants);
            self.boids[i] = boid;
        }
        self.frame = self.frame.offset(1);
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Step from the current frame to `config.end_frame()`, invoking
    /// observer hooks at every frame boundary.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.  Hosts with their own scheduler (an animation-frame
    /// callback, say) call [`step`][Swarm::step] directly instead.
    pub fn run<O: SwarmObserver>(&mut self, observer: &mut O) {
        while self.frame < self.config.end_frame() {
            self.frame_with(observer);
        }
        observer.on_sim_end(self.frame);
    }

    /// Step exactly `n` frames from the current position (ignores
    /// `end_frame`).  Useful for tests and incremental stepping.
    pub fn run_frames<O: SwarmObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.frame_with(observer);
        }
    }

    fn frame_with<O: SwarmObserver>(&mut self, observer: &mut O) {
        let now = self.frame;
        observer.on_frame_start(now);
        self.step();
        observer.on_frame_end(now, self.boids.len());
        if self.config.snapshot_interval_frames > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_frames)
        {
            observer.on_snapshot(now, &self.boids);
        }
    }
}
