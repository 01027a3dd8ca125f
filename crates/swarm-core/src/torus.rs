//! Toroidal world geometry: `Point` and `Bounds`.
//!
//! The world is a bounded 2D plane whose axes are periodic — exiting one edge
//! re-enters the opposite edge.  Positions use `f32` (single precision): at
//! canvas scale that is sub-pixel accuracy, and it halves memory per boid
//! vs. `f64`.

use crate::angle::wrap;
use crate::error::{SwarmError, SwarmResult};

// ── Point ─────────────────────────────────────────────────────────────────────

/// A 2D world coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` on a torus of the given period.
    ///
    /// Per axis the wrap-around delta is `min(|Δ|, period − |Δ|)`; the axes
    /// combine via hypotenuse.  This is the sole metric used for neighbor
    /// detection, so flocking behaves identically across world edges.
    pub fn torus_distance(self, other: Point, width: f32, height: f32) -> f32 {
        let dx = (self.x - other.x).abs();
        let dx = dx.min(width - dx);
        let dy = (self.y - other.y).abs();
        let dy = dy.min(height - dy);
        dx.hypot(dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// The logical simulation bounds plus the wrap border.
///
/// Boids may roam into a band of `padding` units beyond
/// `[0, width) × [0, height)` before wrapping, which softens the visual pop
/// of re-entry on the opposite edge.  `Bounds` is cheap to copy and holds no
/// heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Bounds {
    /// Validate and construct.
    ///
    /// Degenerate dimensions would make `wrap` ill-defined, so they are
    /// rejected here rather than checked inside the per-frame hot path.
    pub fn new(width: f32, height: f32, padding: f32) -> SwarmResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(SwarmError::Config(format!("width must be positive, got {width}")));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(SwarmError::Config(format!("height must be positive, got {height}")));
        }
        if !(padding.is_finite() && padding >= 0.0) {
            return Err(SwarmError::Config(format!("padding must be non-negative, got {padding}")));
        }
        Ok(Self { width, height, padding })
    }

    /// Replace the logical dimensions (host surface resize between frames).
    ///
    /// Takes effect at the next step; existing boid positions are left
    /// untouched and simply wrap against the new extent.
    pub fn resize(&mut self, width: f32, height: f32) -> SwarmResult<()> {
        let next = Bounds::new(width, height, self.padding)?;
        *self = next;
        Ok(())
    }

    /// Wrap an x coordinate into `[-padding, width + padding)`.
    #[inline]
    pub fn wrap_x(&self, x: f32) -> f32 {
        wrap(x, -self.padding, self.width + self.padding)
    }

    /// Wrap a y coordinate into `[-padding, height + padding)`.
    #[inline]
    pub fn wrap_y(&self, y: f32) -> f32 {
        wrap(y, -self.padding, self.height + self.padding)
    }

    /// Toroidal distance between two points under these dimensions.
    #[inline]
    pub fn distance(&self, a: Point, b: Point) -> f32 {
        a.torus_distance(b, self.width, self.height)
    }
}
