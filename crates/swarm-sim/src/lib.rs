//! `swarm-sim` — the flocking simulation for `rust_swarm`.
//!
//! # Per-frame control flow
//!
//! ```text
//! Swarm::step():
//!   for each boid, in sequence order:
//!     ① Neighbors — all-pairs toroidal scan, strict `< vision`
//!     ② Steer     — collision override, or 3:1 align/cohere blend,
//!                   turn rate capped at `radial_speed`
//!     ③ Advance   — move `speed` units along the heading, wrap into
//!                   the padded band
//! ```
//!
//! Boids are updated **in place, in sequence order**: a boid later in the
//! sequence sees earlier boids' already-updated state for the current frame.
//! That ordering dependency is the defined semantics, not an accident — do
//! not replace it with a double-buffered update.
//!
//! The host calls [`Swarm::step`] once per logical frame (or hands control
//! to [`Swarm::run`]) and then reads `x`, `y`, `heading` for drawing.
//! Single-threaded, synchronous, no I/O.
//!
//! # Quick-start
//!
//! ```rust
//! use swarm_core::SwarmConfig;
//! use swarm_sim::{NoopObserver, Swarm};
//!
//! let config = SwarmConfig {
//!     width: 800.0,
//!     height: 600.0,
//!     boid_count: 200,
//!     seed: 42,
//!     total_frames: 60,
//!     ..SwarmConfig::default()
//! };
//! let mut swarm = Swarm::new(config).unwrap();
//! swarm.run(&mut NoopObserver);
//! ```

pub mod boid;
pub mod observer;
pub mod swarm;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use boid::Boid;
pub use observer::{NoopObserver, SwarmObserver};
pub use swarm::Swarm;
