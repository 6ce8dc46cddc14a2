//! GPU device + surface management.
//!
//! Owns the wgpu Instance/Adapter/Device/Queue for one window, keeps the
//! surface configured across resizes, and hands out one `GpuFrame` per
//! redraw. Nothing above this module touches the surface directly.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
