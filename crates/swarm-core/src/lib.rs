//! `swarm-core` — foundational types for the `rust_swarm` boids simulator.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It
//! intentionally has no `swarm-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `BoidId`                                            |
//! | [`frame`]   | `Frame` counter                                     |
//! | [`angle`]   | `wrap`, `clamp_abs`, `wrap_angle`, `mean_angle`     |
//! | [`torus`]   | `Point`, `Bounds`, toroidal distance                |
//! | [`config`]  | `BoidConstants`, `SwarmConfig`                      |
//! | [`rng`]     | `SwarmRng` (deterministic, seedable)                |
//! | [`error`]   | `SwarmError`, `SwarmResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod angle;
pub mod config;
pub mod error;
pub mod frame;
pub mod ids;
pub mod rng;
pub mod torus;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BoidConstants, SwarmConfig};
pub use error::{SwarmError, SwarmResult};
pub use frame::Frame;
pub use ids::BoidId;
pub use rng::SwarmRng;
pub use torus::{Bounds, Point};
