//! Geometric types for glyph layout and canvas placement
//!
//! Provides type-safe wrappers for positions and ink bounds to avoid
//! common integer confusion (e.g., swapping width/height or x/y).

/// A position in canvas space (pixels, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by the same amount on both axes
    pub fn offset(self, delta: i32) -> Self {
        Self {
            x: self.x + delta,
            y: self.y + delta,
        }
    }
}

/// Ink bounding box relative to a pen origin on the baseline.
///
/// Edges are half-open: `left..right` and `top..bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InkBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl InkBounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Smallest box enclosing both; empty boxes are ignored
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Whether both dimensions fit inside a square of `edge` pixels
    pub fn fits_within(&self, edge: f64) -> bool {
        self.width() as f64 <= edge && self.height() as f64 <= edge
    }
}
