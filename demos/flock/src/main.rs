//! flock — headless demo run for the rust_swarm simulator.
//!
//! Spawns 200 boids on an 800×600 toroidal world and runs 600 frames
//! (ten seconds at a 60 fps host), recording pose snapshots to CSV.
//! A windowed host would instead call `swarm.step()` from its
//! animation-frame callback and draw each boid's `x, y, heading`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use swarm_core::{BoidConstants, Frame, SwarmConfig};
use swarm_output::{CsvWriter, SwarmOutputObserver};
use swarm_sim::{Boid, Swarm, SwarmObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const BOID_COUNT:      usize = 200;
const SEED:            u64   = 42;
const WIDTH:           f32   = 800.0;
const HEIGHT:          f32   = 600.0;
const PADDING:         f32   = 8.0;
const TOTAL_FRAMES:    u64   = 600;
const SNAPSHOT_EVERY:  u64   = 60; // one snapshot per simulated second

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: swarm_output::OutputWriter> {
    inner:         SwarmOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: swarm_output::OutputWriter> CountingObserver<W> {
    fn new(inner: SwarmOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: swarm_output::OutputWriter> SwarmObserver for CountingObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, boid_count: usize) {
        self.summary_rows += 1;
        self.inner.on_frame_end(frame, boid_count);
    }

    fn on_snapshot(&mut self, frame: Frame, boids: &[Boid]) {
        self.snapshot_rows += boids.len();
        self.inner.on_snapshot(frame, boids);
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.inner.on_sim_end(final_frame);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== flock — rust_swarm boids demo ===");
    println!("Boids: {BOID_COUNT}  |  Frames: {TOTAL_FRAMES}  |  Seed: {SEED}");
    println!();

    // 1. Sim config.
    let config = SwarmConfig {
        width:                    WIDTH,
        height:                   HEIGHT,
        padding:                  PADDING,
        boid_count:               BOID_COUNT,
        seed:                     SEED,
        total_frames:             TOTAL_FRAMES,
        snapshot_interval_frames: SNAPSHOT_EVERY,
        constants:                BoidConstants::default(),
    };
    println!(
        "World: {WIDTH}×{HEIGHT} (+{PADDING} wrap band), snapshot every {SNAPSHOT_EVERY} frames"
    );

    // 2. Build the swarm.
    let mut swarm = Swarm::new(config)?;

    // 3. Set up CSV output.
    std::fs::create_dir_all("output/flock")?;
    let writer = CsvWriter::new(Path::new("output/flock"))?;
    let mut obs = CountingObserver::new(SwarmOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    swarm.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), swarm.frame);
    println!("  boid_snapshots.csv  : {} rows", obs.snapshot_rows);
    println!("  frame_summaries.csv : {} rows", obs.summary_rows);
    println!();

    // 6. Final pose table for the first few boids.
    println!("{:<8} {:>18} {:>10}", "Boid", "position", "heading");
    println!("{}", "-".repeat(38));
    for (i, b) in swarm.boids.iter().take(8).enumerate() {
        println!("{:<8} {:>18} {:>10.4}", i, b.position().to_string(), b.heading);
    }

    Ok(())
}
