/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Debug label prefix for the device and per-frame encoders.
    pub label: &'static str,

    /// Prefer an sRGB surface format when available.
    ///
    /// With `false`, a linear (`*Unorm`) format is picked when offered, so a
    /// color of 0.2 lands in the framebuffer as 0.2.
    pub prefer_srgb: bool,

    /// Present mode. Falls back to FIFO when the surface does not offer it.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference; ignored if unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub power_preference: wgpu::PowerPreference,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl GpuInit {
    /// Linear framebuffer, as used by the exercises.
    pub fn linear() -> Self {
        Self { prefer_srgb: false, ..Self::default() }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            label: "glbi",
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::default(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
