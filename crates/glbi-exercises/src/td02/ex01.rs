//! Four colored points in the default `[-1, 1]` space.

use anyhow::Result;
use glbi_engine::core::{App, AppControl, FrameCtx};
use glbi_engine::scene::SetOfPoints;
use glbi_engine::window::RuntimeConfig;

use crate::common::{sample_points, Stage, CLEAR_COLOR};

pub const POINT_SIZE: f32 = 10.0;

pub fn config() -> RuntimeConfig {
    RuntimeConfig { title: "TD 02 Ex 01".to_string(), ..RuntimeConfig::default() }
}

pub struct FourPoints {
    points: SetOfPoints,
    stage: Stage,
}

impl FourPoints {
    pub fn new() -> Result<Self> {
        Ok(Self { points: sample_points()?, stage: Stage::new() })
    }
}

impl App for FourPoints {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let painter = self.stage.begin();
        painter.set_point_size(POINT_SIZE);
        painter.draw_set(&self.points);
        self.stage.present(ctx, CLEAR_COLOR)
    }
}
