use serde::{Deserialize, Serialize};

/// Represents a point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Four-sided pixel insets, ordered left, top, right, bottom
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Side-wise sum of two insets, saturating at the `i32` range
    pub fn offset_by(&self, other: &Insets) -> Insets {
        Insets::new(
            self.left.saturating_add(other.left),
            self.top.saturating_add(other.top),
            self.right.saturating_add(other.right),
            self.bottom.saturating_add(other.bottom),
        )
    }

    /// Converts density-independent insets into device pixels.
    ///
    /// Each side is truncated towards zero, the same way a dimension resource
    /// is read back as an integer pixel size.
    pub fn scaled(&self, pixel_ratio: f32) -> Insets {
        let scale = |dp: i32| (dp as f32 * pixel_ratio) as i32;
        Insets::new(
            scale(self.left),
            scale(self.top),
            scale(self.right),
            scale(self.bottom),
        )
    }
}

impl From<[i32; 4]> for Insets {
    fn from(sides: [i32; 4]) -> Self {
        Insets::new(sides[0], sides[1], sides[2], sides[3])
    }
}

impl From<Insets> for [i32; 4] {
    fn from(insets: Insets) -> Self {
        [insets.left, insets.top, insets.right, insets.bottom]
    }
}
