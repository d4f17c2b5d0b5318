use crate::core::geo::{Insets, Point};

/// Screen-space facts about the map view that chrome placement depends on
pub trait Projection {
    /// Measured width of the map view in pixels
    fn width(&self) -> f32;

    /// Measured height of the map view in pixels
    fn height(&self) -> f32;

    /// Padding the map view reserves around its content, added to every
    /// chrome margin
    fn content_padding(&self) -> Insets;
}

/// Projection backed by the map view's own size and padding
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportProjection {
    size: Point,
    content_padding: Insets,
}

impl ViewportProjection {
    pub fn new(size: Point) -> Self {
        Self {
            size,
            content_padding: Insets::ZERO,
        }
    }

    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    pub fn set_content_padding(&mut self, padding: Insets) {
        self.content_padding = padding;
    }
}

impl Projection for ViewportProjection {
    fn width(&self) -> f32 {
        self.size.x as f32
    }

    fn height(&self) -> f32 {
        self.size.y as f32
    }

    fn content_padding(&self) -> Insets {
        self.content_padding
    }
}
