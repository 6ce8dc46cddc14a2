//! "Pile mécanique": a three-arm mechanism animated from wall-clock time.
//!
//! Each arm is drawn in its parent's frame: rotate about the pivot, draw,
//! move to the far pivot, recurse. Angles are in degrees.

use glbi_engine::coords::{OrthoBounds, Vec2};
use glbi_engine::core::{App, AppControl, FrameCtx};
use glbi_engine::input::Key;
use glbi_engine::paint::Color;
use glbi_engine::scene::{ConvexShape, Painter, ShapeNature};
use glbi_engine::window::RuntimeConfig;

use crate::common::Stage;

/// Visible extent along the shorter window side: `[-100, 100]`.
pub const VIEW_SIZE: f32 = 200.0;
pub const BACKGROUND: Color = Color::rgb(0.2, 0.2, 0.2);

pub const SPEED_UP: f32 = 1.2;
pub const SLOW_DOWN: f32 = 0.8;

const CIRCLE_SEGMENTS: usize = 32;

pub const INSTRUCTIONS: &str = "\
===== Pile mécanique - TD03 Ex01 =====
Up/Down arrows change the animation speed
Escape quits";

pub fn config() -> RuntimeConfig {
    RuntimeConfig { title: "Pile Mécanique - TD03 Ex01".to_string(), ..RuntimeConfig::default() }
}

/// Joint angles in degrees and the speed factor driving them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Animation {
    pub angle1: f32,
    pub angle2: f32,
    pub angle3: f32,
    pub speed: f32,
}

impl Animation {
    pub fn new() -> Self {
        Self { angle1: 0.0, angle2: 0.0, angle3: 0.0, speed: 1.0 }
    }

    /// Advances one frame. The first joint turns at a constant rate per
    /// frame; the other two swing with `elapsed` seconds of wall-clock time.
    pub fn step(&mut self, elapsed: f64) {
        self.angle1 += 0.5 * self.speed;
        if self.angle1 > 360.0 {
            self.angle1 -= 360.0;
        }

        let t = elapsed as f32;
        self.angle2 = 30.0 * (t * 1.5 * self.speed).sin();
        self.angle3 = 45.0 * (t * 2.0 * self.speed).sin();
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}

/// What a key press asks for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyOutcome {
    None,
    Quit,
}

/// The mechanism's shapes, drawn for a given animation state.
#[derive(Debug, Clone)]
pub struct Mechanism {
    circle: ConvexShape,
}

impl Mechanism {
    pub fn new() -> Self {
        Self {
            circle: ConvexShape::regular_polygon(1.0, CIRCLE_SEGMENTS).with_nature(ShapeNature::Filled),
        }
    }

    pub fn draw(&self, painter: &mut Painter, anim: &Animation) {
        painter.push();
        painter.translate(0.0, -30.0);

        painter.fill_rect(Vec2::new(-30.0, -10.0), Vec2::new(30.0, 0.0), Color::gray(0.4));
        self.draw_first_arm(painter, anim);

        painter.pop();
    }

    fn draw_first_arm(&self, painter: &mut Painter, anim: &Animation) {
        painter.push();
        painter.rotate(anim.angle1.to_radians());

        self.disc(painter, 20.0, Color::gray(0.8));
        painter.fill_rect(Vec2::new(-10.0, -5.0), Vec2::new(50.0, 5.0), Color::gray(0.7));

        painter.translate(50.0, 0.0);
        self.disc(painter, 10.0, Color::gray(0.85));
        self.draw_second_arm(painter, anim);

        painter.pop();
    }

    fn draw_second_arm(&self, painter: &mut Painter, anim: &Animation) {
        painter.push();
        painter.rotate(anim.angle2.to_radians());

        painter.fill_rect(Vec2::new(0.0, -3.0), Vec2::new(40.0, 3.0), Color::gray(0.6));
        self.disc(painter, 5.0, Color::gray(0.7));

        painter.translate(40.0, 0.0);
        self.disc(painter, 5.0, Color::gray(0.75));
        self.draw_third_arm(painter, anim);

        painter.pop();
    }

    fn draw_third_arm(&self, painter: &mut Painter, anim: &Animation) {
        painter.push();
        painter.rotate(anim.angle3.to_radians());

        painter.fill_rect(Vec2::new(0.0, -2.0), Vec2::new(35.0, 2.0), Color::gray(0.5));
        self.disc(painter, 4.0, Color::gray(0.65));

        painter.translate(35.0, 0.0);
        self.disc(painter, 8.0, Color::rgb(0.9, 0.3, 0.3));

        painter.pop();
    }

    /// Unit circle scaled to `radius` around the current origin.
    fn disc(&self, painter: &mut Painter, radius: f32, color: Color) {
        painter.push();
        painter.scale(radius, radius);
        painter.set_flat_color(color);
        painter.draw_shape(&self.circle);
        painter.pop();
    }
}

impl Default for Mechanism {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct Pile {
    anim: Animation,
    mechanism: Mechanism,
    aspect: f32,
    stage: Stage,
}

impl Pile {
    pub fn new() -> Self {
        Self { aspect: 1.0, ..Self::default() }
    }

    pub fn animation(&self) -> &Animation {
        &self.anim
    }

    pub fn on_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Escape => return KeyOutcome::Quit,
            Key::ArrowUp => self.anim.speed *= SPEED_UP,
            Key::ArrowDown => self.anim.speed *= SLOW_DOWN,
            _ => return KeyOutcome::None,
        }
        log::info!("animation speed {:.3}", self.anim.speed);
        KeyOutcome::None
    }
}

impl App for Pile {
    fn on_resize(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for ev in &ctx.input_frame.events {
            if let Some((key, _)) = ev.key_pressed() {
                if self.on_key(key) == KeyOutcome::Quit {
                    return AppControl::Exit;
                }
            }
        }

        self.anim.step(ctx.time.elapsed);

        let painter = self.stage.begin();
        painter.set_projection(OrthoBounds::for_aspect(VIEW_SIZE, self.aspect));
        self.mechanism.draw(painter, &self.anim);
        self.stage.present(ctx, BACKGROUND)
    }
}

#[cfg(test)]
mod tests {
    use glbi_engine::scene::DrawCmd;

    use super::*;

    fn record(anim: &Animation) -> Painter {
        let mut painter = Painter::new();
        Mechanism::new().draw(&mut painter, anim);
        painter
    }

    fn polygon(painter: &Painter, index: usize) -> Vec<Vec2> {
        match &painter.draw_list().items()[index] {
            DrawCmd::Polygon(p) => p.vertices.clone(),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    fn centroid(vertices: &[Vec2]) -> Vec2 {
        vertices.iter().fold(Vec2::zero(), |acc, &v| acc + v) / vertices.len() as f32
    }

    // ── animation ─────────────────────────────────────────────────────────

    #[test]
    fn first_joint_wraps_past_full_turn() {
        let mut anim = Animation { angle1: 359.8, ..Animation::new() };
        anim.step(0.0);
        assert!((anim.angle1 - 0.3).abs() < 1e-3);
    }

    #[test]
    fn swinging_joints_follow_wall_clock() {
        let mut anim = Animation::new();
        anim.step(0.0);
        assert_eq!(anim.angle2, 0.0);
        assert_eq!(anim.angle3, 0.0);

        // sin(1.5 * t) peaks at t = pi / 3.
        anim.step(std::f64::consts::FRAC_PI_3);
        assert!((anim.angle2 - 30.0).abs() < 1e-3);
    }

    #[test]
    fn arrow_keys_scale_speed() {
        let mut pile = Pile::new();
        pile.on_key(Key::ArrowUp);
        assert!((pile.animation().speed - 1.2).abs() < 1e-6);
        pile.on_key(Key::ArrowDown);
        assert!((pile.animation().speed - 0.96).abs() < 1e-6);
        assert_eq!(pile.on_key(Key::Escape), KeyOutcome::Quit);
        assert_eq!(pile.on_key(Key::Space), KeyOutcome::None);
    }

    // ── hierarchy ─────────────────────────────────────────────────────────

    #[test]
    fn records_every_part_and_restores_the_stack() {
        let painter = record(&Animation::new());
        // Base, 3 + 3 + 3 arm parts.
        assert_eq!(painter.draw_list().len(), 10);
        assert_eq!(painter.transform(), glbi_engine::transform::Transform2D::identity());
    }

    #[test]
    fn rest_pose_lays_arms_along_x() {
        let painter = record(&Animation::new());
        // Beater: 50 + 40 + 35 along X from the pivot at (0, -30).
        let beater = centroid(&polygon(&painter, 9));
        assert!((beater.x - 125.0).abs() < 1e-3);
        assert!((beater.y + 30.0).abs() < 1e-3);
    }

    #[test]
    fn first_joint_rotation_carries_children() {
        let anim = Animation { angle1: 90.0, ..Animation::new() };
        let painter = record(&anim);
        let beater = centroid(&polygon(&painter, 9));
        assert!(beater.x.abs() < 1e-3);
        assert!((beater.y - 95.0).abs() < 1e-3);
    }
}
