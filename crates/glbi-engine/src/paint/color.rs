/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// No color-space conversion is applied: exercises render to a non-sRGB
/// surface so the values reach the framebuffer unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// One of the three color channels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl Color {
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Gray level `v` on all three channels.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    /// Creates a color from bytes (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    #[inline]
    pub fn channel(self, channel: Channel) -> f32 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    #[inline]
    pub fn set_channel(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }

    /// Adds `delta` to one channel, keeping it inside `[0, 1]`.
    ///
    /// A channel already at the bound it is moving toward is left unchanged.
    pub fn step_channel(&mut self, channel: Channel, delta: f32) {
        let v = self.channel(channel);
        if (delta > 0.0 && v >= 1.0) || (delta < 0.0 && v <= 0.0) {
            return;
        }
        self.set_channel(channel, (v + delta).clamp(0.0, 1.0));
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_up_stops_at_one() {
        let mut c = Color::rgb(0.95, 0.0, 0.0);
        c.step_channel(Channel::Red, 0.1);
        assert_eq!(c.r, 1.0);
        c.step_channel(Channel::Red, 0.1);
        assert_eq!(c.r, 1.0);
    }

    #[test]
    fn step_down_stops_at_zero() {
        let mut c = Color::rgb(0.0, 0.05, 0.0);
        c.step_channel(Channel::Green, -0.1);
        assert_eq!(c.g, 0.0);
        c.step_channel(Channel::Green, -0.1);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn step_touches_only_its_channel() {
        let mut c = Color::rgb(0.2, 0.3, 0.4);
        c.step_channel(Channel::Blue, 0.1);
        assert_eq!((c.r, c.g), (0.2, 0.3));
        assert!((c.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn clamped_bounds_every_channel() {
        let c = Color::rgba(-1.0, 2.0, 0.5, 3.0).clamped();
        assert_eq!(c, Color::rgba(0.0, 1.0, 0.5, 1.0));
    }

    #[test]
    fn from_u8_scales_to_unit_range() {
        let c = Color::from_u8(255, 0, 51);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
    }
}
