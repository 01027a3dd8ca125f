//! `swarm-output` — recording backends for `rust_swarm`.
//!
//! The simulator itself performs no I/O; this crate bridges the
//! [`SwarmObserver`][swarm_sim::SwarmObserver] hooks to pluggable
//! [`OutputWriter`] backends so a headless run leaves an inspectable trace
//! (a renderer is just another read-only consumer of the same snapshots).
//!
//! | Module       | Contents                                     |
//! |--------------|----------------------------------------------|
//! | [`row`]      | `BoidSnapshotRow`, `FrameSummaryRow`         |
//! | [`writer`]   | the `OutputWriter` trait                     |
//! | [`csv`]      | `CsvWriter` backend                          |
//! | [`observer`] | `SwarmOutputObserver<W>`                     |
//! | [`error`]    | `OutputError`, `OutputResult`                |

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SwarmOutputObserver;
pub use row::{BoidSnapshotRow, FrameSummaryRow};
pub use writer::OutputWriter;
