//! The sample points, switched between points and a line strip by any key.

use anyhow::Result;
use glbi_engine::core::{App, AppControl, FrameCtx};
use glbi_engine::scene::{PointNature, SetOfPoints};
use glbi_engine::window::RuntimeConfig;

use crate::common::{sample_points, Stage, CLEAR_COLOR};

pub const POINT_SIZE: f32 = 10.0;

pub fn config() -> RuntimeConfig {
    RuntimeConfig { title: "TD 02 Ex 02".to_string(), ..RuntimeConfig::default() }
}

pub struct LineToggle {
    points: SetOfPoints,
    stage: Stage,
}

impl LineToggle {
    pub fn new() -> Result<Self> {
        Ok(Self { points: sample_points()?, stage: Stage::new() })
    }

    pub fn nature(&self) -> PointNature {
        self.points.nature()
    }

    /// Any key press flips the display mode.
    pub fn on_key(&mut self) -> PointNature {
        let nature = self.points.toggle_nature();
        log::info!("display mode: {}", nature.label());
        nature
    }
}

impl App for LineToggle {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let presses = ctx.input_frame.events.iter().filter(|ev| ev.key_pressed().is_some()).count();
        for _ in 0..presses {
            self.on_key();
        }

        let painter = self.stage.begin();
        painter.set_point_size(POINT_SIZE);
        painter.draw_set(&self.points);
        self.stage.present(ctx, CLEAR_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_presses_alternate_modes() {
        let mut app = LineToggle::new().expect("valid scene");
        assert_eq!(app.nature(), PointNature::Points);
        assert_eq!(app.on_key(), PointNature::LineStrip);
        assert_eq!(app.on_key(), PointNature::Points);
    }

    #[test]
    fn even_number_of_toggles_restores_mode() {
        let mut app = LineToggle::new().expect("valid scene");
        for _ in 0..6 {
            app.on_key();
        }
        assert_eq!(app.nature(), PointNature::Points);
    }
}
