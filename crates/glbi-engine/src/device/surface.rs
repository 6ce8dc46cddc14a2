use winit::dpi::PhysicalSize;

const SRGB_FORMATS: [wgpu::TextureFormat; 2] =
    [wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb];

const LINEAR_FORMATS: [wgpu::TextureFormat; 2] =
    [wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Rgba8Unorm];

/// Picks a surface format from those offered, first preferred match wins.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let preferred = if prefer_srgb { &SRGB_FORMATS } else { &LINEAR_FORMATS };

    preferred
        .iter()
        .find(|f| formats.contains(f))
        .or_else(|| formats.first())
        .copied()
}

pub(crate) fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

pub(crate) fn choose_present_mode(
    modes: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if modes.contains(&requested) {
        requested
    } else {
        wgpu::PresentMode::Fifo
    }
}

/// Applies a new drawable size to `config`.
///
/// Returns false for a zero-sized window (minimized): wgpu refuses to configure
/// a 0x0 surface, so configuration waits for the next non-zero resize.
pub(crate) fn apply_size(config: &mut wgpu::SurfaceConfiguration, size: PhysicalSize<u32>) -> bool {
    if size.width == 0 || size.height == 0 {
        return false;
    }
    config.width = size.width;
    config.height = size.height;
    true
}
