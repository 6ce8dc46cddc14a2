use super::Vec2;

/// Maps a pointer position (logical pixels, origin top-left) to virtual space.
///
/// For landscape and square windows the X term is stretched by the aspect
/// ratio; for portrait windows the Y term is divided by it. The screen top
/// maps to positive virtual Y.
///
/// `width`/`height` are the window's logical size. A degenerate window
/// (zero or negative size) yields `None`.
pub fn screen_to_virtual(x: f32, y: f32, width: f32, height: f32) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }

    let aspect = width / height;
    let nx = (x / width) * 2.0 - 1.0;
    let ny = -((y / height) * 2.0 - 1.0);

    if aspect >= 1.0 {
        Some(Vec2::new(nx * aspect, ny))
    } else {
        Some(Vec2::new(nx, ny / aspect))
    }
}
