//! Pixel-to-normalized pointer tracking.

use glam::Vec2;

/// Viewport dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height. Degenerate sizes report `1.0`.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Map a pixel position to normalized coordinates: origin at the
    /// viewport center, `+x` right, `+y` up, roughly `[-1, 1]`.
    ///
    /// Positions outside the viewport map outside that range; nothing is
    /// clamped.
    #[must_use]
    pub fn normalize(&self, x: f32, y: f32) -> Vec2 {
        let width = self.width.max(1) as f32;
        let height = self.height.max(1) as f32;
        Vec2::new((x / width) * 2.0 - 1.0, -((y / height) * 2.0 - 1.0))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Last observed pointer position in normalized coordinates.
///
/// Mouse and touch positions both land here; there is a single pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    position: Vec2,
}

impl PointerTracker {
    /// A tracker resting at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw pixel position.
    pub fn update(&mut self, x: f32, y: f32, viewport: Viewport) {
        self.position = viewport.normalize(x, y);
    }

    /// The latest sample, or the origin before any input.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Reset to the origin.
    pub fn clear(&mut self) {
        self.position = Vec2::ZERO;
    }
}
