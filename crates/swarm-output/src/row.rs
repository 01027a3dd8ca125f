//! Plain data row types written by output backends.

/// A snapshot of one boid's pose at a given frame.
///
/// These are exactly the fields a renderer reads (`radius` is a shared
/// constant, not per-boid state, so it is not repeated per row).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidSnapshotRow {
    pub boid_id: u32,
    pub frame:   u64,
    pub x:       f32,
    pub y:       f32,
    /// Radians in `[-π, π)`.
    pub heading: f32,
}

/// Summary for one simulation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummaryRow {
    pub frame:      u64,
    pub boid_count: u64,
}
