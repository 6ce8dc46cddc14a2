use super::Transform2D;

/// Current model matrix plus a stack of saved matrices.
///
/// `translate`, `rotate` and `scale` post-multiply the current matrix, so the
/// most recent call applies first to the geometry drawn next.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Transform2D,
    saved: Vec<Transform2D>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Transform2D {
        self.current
    }

    /// Number of saved matrices.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Replaces the current matrix with the identity. Saved matrices are kept.
    pub fn set_identity(&mut self) {
        self.current = Transform2D::IDENTITY;
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.current = self.current * Transform2D::translation(x, y);
    }

    /// Rotates by `radians`, counter-clockwise.
    pub fn rotate(&mut self, radians: f32) {
        self.current = self.current * Transform2D::rotation(radians);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.current = self.current * Transform2D::scaling(sx, sy);
    }

    /// Saves the current matrix.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the most recently saved matrix.
    ///
    /// An unbalanced pop resets to identity and logs a warning instead of
    /// panicking; the drawing is wrong but the frame still completes.
    pub fn pop(&mut self) {
        match self.saved.pop() {
            Some(m) => self.current = m,
            None => {
                log::warn!("transform stack underflow; resetting to identity");
                self.current = Transform2D::IDENTITY;
            }
        }
    }

    /// Drops every saved matrix and resets the current one.
    pub fn reset(&mut self) {
        self.saved.clear();
        self.current = Transform2D::IDENTITY;
    }
}
