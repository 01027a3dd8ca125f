//! `SwarmOutputObserver<W>` — bridges `SwarmObserver` to an `OutputWriter`.

use swarm_core::Frame;
use swarm_sim::{Boid, SwarmObserver};

use crate::row::{BoidSnapshotRow, FrameSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SwarmObserver`] that writes boid snapshots and frame summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `swarm.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SwarmOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SwarmOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `swarm.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SwarmObserver for SwarmOutputObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, boid_count: usize) {
        let row = FrameSummaryRow {
            frame:      frame.0,
            boid_count: boid_count as u64,
        };
        let result = self.writer.write_frame_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Frame, boids: &[Boid]) {
        let rows: Vec<BoidSnapshotRow> = boids
            .iter()
            .enumerate()
            .map(|(i, b)| BoidSnapshotRow {
                boid_id: i as u32,
                frame:   frame.0,
                x:       b.x,
                y:       b.y,
                heading: b.heading,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_frame: Frame) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
