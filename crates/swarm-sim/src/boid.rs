//! A single boid: position, heading, neighbor query, and the steering rule.

use std::f32::consts::PI;

use swarm_core::angle::{clamp_abs, mean_angle, wrap, wrap_angle};
use swarm_core::{BoidConstants, BoidId, Bounds, Point, SwarmRng};

/// One simulated boid.
///
/// A boid's own state is exactly position and heading; the shared
/// [`BoidConstants`] are passed in at call time, and so is the flock slice —
/// a boid holds no reference to the swarm or to other boids, and derives its
/// neighbor set transiently each step.
///
/// All fields are public for read-only render access (`x`, `y`, `heading`
/// plus `constants.radius` are everything a drawing surface needs).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boid {
    pub x: f32,
    pub y: f32,
    /// Radians, kept in `[-π, π)` after every step.
    pub heading: f32,
}

impl Boid {
    /// Construct a boid with uniformly random position in
    /// `[0, width) × [0, height)` and heading in `[-π, π)`.
    ///
    /// A pure function of its explicit parameters — no global lookups.
    pub fn spawn(bounds: &Bounds, rng: &mut SwarmRng) -> Boid {
        Boid {
            x: rng.unit() * bounds.width,
            y: rng.unit() * bounds.height,
            heading: rng.unit() * 2.0 * PI - PI,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Every other boid whose toroidal distance to `self` is strictly below
    /// `vision`.
    ///
    /// `index` is this boid's own slot in `flock`; exclusion is by that
    /// identity, not by state equality, so two coincident boids still see
    /// each other.  O(n) — the all-pairs scan is the intended baseline.
    pub fn neighbors(
        &self,
        index: usize,
        flock: &[Boid],
        bounds: Bounds,
        constants: &BoidConstants,
    ) -> Vec<BoidId> {
        let here = self.position();
        flock
            .iter()
            .enumerate()
            .filter(|&(j, other)| {
                j != index && bounds.distance(here, other.position()) < constants.vision
            })
            .map(|(j, _)| BoidId(j as u32))
            .collect()
    }

    /// One simulation step: steer, then advance.
    ///
    /// The two behavior modes are selected fresh each frame from the
    /// neighbor set — no mode persists across frames:
    ///
    /// - **Collision avoidance**: if the nearest neighbor is closer than
    ///   `2 * radius`, the target heading points directly away from it.
    ///   A hard override; the flock average is discarded for this frame.
    /// - **Flocking**: otherwise the target blends the circular mean of
    ///   neighbor headings (weight 3) with the bearing toward the flock's
    ///   mean position (weight 1).
    ///
    /// Either way the turn is capped at `radial_speed` per frame.  With no
    /// neighbors at all the heading is untouched and the boid just advances.
    pub fn step(&mut self, index: usize, flock: &[Boid], bounds: Bounds, constants: &BoidConstants) {
        let neighbors = self.neighbors(index, flock, bounds, constants);
        if !neighbors.is_empty() {
            let here = self.position();

            let mut mean_hx = 0.0_f32;
            let mut mean_hy = 0.0_f32;
            let mut mean_x = 0.0_f32;
            let mut mean_y = 0.0_f32;

            // Nearest neighbor, tracked only inside the collision threshold.
            // Strict `<` means the first boid attaining the minimum wins.
            let mut min_dist = constants.radius * 2.0;
            let mut nearest: Option<BoidId> = None;

            for &id in &neighbors {
                let other = &flock[id.index()];
                mean_hx += other.heading.cos();
                mean_hy += other.heading.sin();
                mean_x += other.x;
                mean_y += other.y;

                let dist = bounds.distance(here, other.position());
                if dist < min_dist {
                    min_dist = dist;
                    nearest = Some(id);
                }
            }

            let n = neighbors.len() as f32;
            let target = match nearest {
                // Keep away!
                Some(id) => {
                    let other = &flock[id.index()];
                    (self.y - other.y).atan2(self.x - other.x)
                }
                // Match the flock's heading and drift toward its center.
                //
                // The centroid averages raw coordinates, NOT torus-aware
                // ones — near a world edge it can land far from the visual
                // cluster.  Kept as-is; the tests pin this.
                None => {
                    let mean_heading = (mean_hy / n).atan2(mean_hx / n);
                    let center = (mean_y / n - self.y).atan2(mean_x / n - self.x);
                    mean_angle(&[mean_heading, mean_heading, mean_heading, center])
                }
            };

            let delta = wrap(target - self.heading, -PI, PI);
            let delta = clamp_abs(delta, constants.radial_speed);
            self.heading = wrap_angle(self.heading + delta);
        }

        self.advance(bounds, constants);
    }

    /// Advance `speed` units along the current heading, wrapping into the
    /// padded band `[-padding, width + padding) × [-padding, height + padding)`.
    ///
    /// The sole position-mutation path — it alone establishes the position
    /// invariant.
    pub fn advance(&mut self, bounds: Bounds, constants: &BoidConstants) {
        self.x = bounds.wrap_x(self.x + self.heading.cos() * constants.speed);
        self.y = bounds.wrap_y(self.y + self.heading.sin() * constants.speed);
    }
}
