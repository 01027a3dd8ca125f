//! Swarm observer trait for progress reporting and state recording.

use swarm_core::Frame;

use crate::boid::Boid;

/// Callbacks invoked by [`Swarm::run`][crate::Swarm::run] at key points in
/// the frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Snapshot consumers get the boid slice
/// read-only — renderers and recorders must not mutate simulation state.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SwarmObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, frame: Frame, boids: usize) {
///         if frame.0 % self.interval == 0 {
///             println!("{frame}: {boids} boids");
///         }
///     }
/// }
/// ```
pub trait SwarmObserver {
    /// Called at the very start of each frame, before any boid steps.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after every boid has stepped for `frame`.
    fn on_frame_end(&mut self, _frame: Frame, _boid_count: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_frames`
    /// frames) with read-only access to the full post-step boid state.
    fn on_snapshot(&mut self, _frame: Frame, _boids: &[Boid]) {}

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SwarmObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SwarmObserver for NoopObserver {}
