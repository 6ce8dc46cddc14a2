//! GPU rendering subsystem.
//!
//! `PrimitiveRenderer` consumes a `scene::DrawList` and issues wgpu commands.
//!
//! Convention:
//! - CPU geometry is in virtual space (origin centered, +Y up), already
//!   transformed by the painter.
//! - The vertex shader maps virtual space to NDC with the frame's
//!   orthographic bounds.
//! - Point sizes are framebuffer pixels, converted to virtual units while
//!   tessellating.

mod common;
mod ctx;
mod primitives;
mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use primitives::PrimitiveRenderer;
