use super::{Vec2, Viewport};

/// Visible rectangle of virtual space (a 2D orthographic projection).
///
/// `left < right` and `bottom < top`; +Y points up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl OrthoBounds {
    #[inline]
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }

    /// Bounds centered on the origin with the given half extents.
    #[inline]
    pub const fn centered(half_width: f32, half_height: f32) -> Self {
        Self::new(-half_width, half_width, -half_height, half_height)
    }

    /// Aspect-corrected bounds for a square virtual space of full extent `view_size`.
    ///
    /// Landscape windows widen the horizontal extent by `aspect`; portrait and
    /// square windows keep the horizontal extent and grow the vertical one by
    /// `1 / aspect`. Non-positive or non-finite aspects fall back to square.
    pub fn for_aspect(view_size: f32, aspect: f32) -> Self {
        let half = view_size / 2.0;
        if !(aspect.is_finite() && aspect > 0.0) {
            return Self::centered(half, half);
        }

        if aspect > 1.0 {
            Self::centered(half * aspect, half)
        } else {
            Self::centered(half, half / aspect)
        }
    }

    /// Same as [`for_aspect`](Self::for_aspect) using the viewport's aspect ratio.
    pub fn for_viewport(view_size: f32, viewport: Viewport) -> Option<Self> {
        viewport
            .aspect_ratio()
            .map(|aspect| Self::for_aspect(view_size, aspect))
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.top - self.bottom
    }

    #[inline]
    pub fn half_extents(self) -> Vec2 {
        Vec2::new(self.width() / 2.0, self.height() / 2.0)
    }

    /// Maps a virtual-space position to normalized device coordinates.
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> Vec2 {
        Vec2::new(
            2.0 * (p.x - self.left) / self.width() - 1.0,
            2.0 * (p.y - self.bottom) / self.height() - 1.0,
        )
    }

    /// Virtual units covered by one pixel along each axis.
    #[inline]
    pub fn units_per_pixel(self, viewport: Viewport) -> Vec2 {
        Vec2::new(
            self.width() / viewport.width.max(1.0),
            self.height() / viewport.height.max(1.0),
        )
    }

    /// Packs the bounds for the projection uniform.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.left, self.right, self.bottom, self.top]
    }
}

impl Default for OrthoBounds {
    /// Clip space itself: `[-1, 1]` on both axes.
    fn default() -> Self {
        Self::centered(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── for_aspect ────────────────────────────────────────────────────────

    #[test]
    fn landscape_widens_horizontal_extent_only() {
        let b = OrthoBounds::for_aspect(1.0, 1024.0 / 720.0);
        assert!(approx(b.half_extents().x, 0.5 * 1024.0 / 720.0));
        assert!(approx(b.half_extents().y, 0.5));
    }

    #[test]
    fn portrait_grows_vertical_extent_only() {
        let b = OrthoBounds::for_aspect(6.0, 0.5);
        assert!(approx(b.half_extents().x, 3.0));
        assert!(approx(b.half_extents().y, 6.0));
    }

    #[test]
    fn square_window_keeps_view_size() {
        let b = OrthoBounds::for_aspect(4.0, 1.0);
        assert_eq!(b, OrthoBounds::centered(2.0, 2.0));
    }

    #[test]
    fn rule_holds_across_aspects() {
        for i in 1..200 {
            let aspect = i as f32 * 0.025;
            let b = OrthoBounds::for_aspect(2.0, aspect);
            let h = b.half_extents();
            if aspect > 1.0 {
                assert!(approx(h.x, aspect), "aspect {aspect}");
                assert!(approx(h.y, 1.0), "aspect {aspect}");
            } else {
                assert!(approx(h.x, 1.0), "aspect {aspect}");
                assert!(approx(h.y, 1.0 / aspect), "aspect {aspect}");
            }
            assert!(approx(b.left, -b.right));
            assert!(approx(b.bottom, -b.top));
        }
    }

    #[test]
    fn degenerate_aspect_falls_back_to_square() {
        assert_eq!(OrthoBounds::for_aspect(2.0, 0.0), OrthoBounds::centered(1.0, 1.0));
        assert_eq!(OrthoBounds::for_aspect(2.0, f32::NAN), OrthoBounds::centered(1.0, 1.0));
    }

    #[test]
    fn for_viewport_rejects_zero_height() {
        assert!(OrthoBounds::for_viewport(2.0, Viewport::new(800.0, 0.0)).is_none());
        assert!(OrthoBounds::for_viewport(2.0, Viewport::new(800.0, 400.0)).is_some());
    }

    // ── to_ndc ────────────────────────────────────────────────────────────

    #[test]
    fn ndc_maps_corners_to_unit_square() {
        let b = OrthoBounds::new(-3.0, 5.0, -1.0, 1.0);
        assert_eq!(b.to_ndc(Vec2::new(-3.0, -1.0)), Vec2::new(-1.0, -1.0));
        assert_eq!(b.to_ndc(Vec2::new(5.0, 1.0)), Vec2::new(1.0, 1.0));
        assert_eq!(b.to_ndc(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn units_per_pixel_uses_viewport_size() {
        let b = OrthoBounds::centered(100.0, 50.0);
        let u = b.units_per_pixel(Viewport::new(400.0, 200.0));
        assert!(approx(u.x, 0.5));
        assert!(approx(u.y, 0.5));
    }
}
