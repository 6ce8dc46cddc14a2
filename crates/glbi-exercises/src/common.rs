use glbi_engine::core::{AppControl, FrameCtx};
use glbi_engine::paint::Color;
use glbi_engine::render::PrimitiveRenderer;
use glbi_engine::scene::{Painter, SceneError, SetOfPoints};

/// Background shared by the TD01/TD02 exercises.
pub const CLEAR_COLOR: Color = Color::rgb(0.2, 0.0, 0.0);

/// Origin, right, top and bottom-left sample points.
pub const SAMPLE_COORDS: [f32; 8] = [
    0.0, 0.0,
    0.5, 0.0,
    0.0, 0.5,
    -0.5, -0.5,
];

/// White, red, green and violet, one per sample point.
pub const SAMPLE_COLORS: [f32; 12] = [
    1.0, 1.0, 1.0,
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.8, 0.0, 0.8,
];

/// The four colored sample points, logged point by point.
pub fn sample_points() -> Result<SetOfPoints, SceneError> {
    let mut set = SetOfPoints::new();
    set.init_set(&SAMPLE_COORDS, &SAMPLE_COLORS)?;

    log::info!("{} points initialized", set.len());
    for (i, p) in set.points().iter().enumerate() {
        log::info!(
            "point {i}: ({}, {}) color ({}, {}, {})",
            p.pos.x,
            p.pos.y,
            p.color.r,
            p.color.g,
            p.color.b
        );
    }
    Ok(set)
}

/// Painter plus renderer: what every drawing exercise records into and
/// presents from.
#[derive(Default)]
pub struct Stage {
    pub painter: Painter,
    renderer: PrimitiveRenderer,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts recording a frame.
    pub fn begin(&mut self) -> &mut Painter {
        self.painter.begin_frame();
        &mut self.painter
    }

    /// Clears to `clear` and draws everything recorded since [`begin`](Self::begin).
    pub fn present(&mut self, ctx: &mut FrameCtx<'_, '_>, clear: Color) -> AppControl {
        let Stage { painter, renderer } = self;
        ctx.render(clear, |rctx, target| renderer.render(rctx, target, painter.draw_list()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_pairs_each_point_with_its_color() {
        let set = sample_points().expect("sample data is well formed");
        assert_eq!(set.len(), 4);
        assert_eq!(set.points()[3].color, Color::rgb(0.8, 0.0, 0.8));
        assert_eq!(set.points()[1].pos.x, 0.5);
    }
}
