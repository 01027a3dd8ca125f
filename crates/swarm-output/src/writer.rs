//! The `OutputWriter` trait implemented by all backend writers.

use crate::{BoidSnapshotRow, FrameSummaryRow, OutputResult};

/// Trait implemented by recording backends (CSV today; the observer is
/// generic so others slot in without touching the sim).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SwarmOutputObserver::take_error`][crate::SwarmOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of boid pose snapshots.
    fn write_snapshots(&mut self, rows: &[BoidSnapshotRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
