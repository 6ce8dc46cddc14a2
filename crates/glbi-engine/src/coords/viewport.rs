/// Drawable size in pixels.
///
/// The renderer uses the physical framebuffer size to convert point sizes
/// (given in pixels) into virtual units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width divided by height. Returns `None` for a degenerate viewport
    /// (minimized windows report a zero height).
    #[inline]
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.is_valid() {
            Some(self.width / self.height)
        } else {
            None
        }
    }
}
