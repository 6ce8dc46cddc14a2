/// What the runtime should do after failing to acquire a surface texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface needs reconfiguring; rendering resumes next frame.
    Reconfigure,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Out of memory; close the window.
    Fatal,
}

impl SurfaceErrorAction {
    pub fn for_error(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Self::Reconfigure,
            wgpu::SurfaceError::OutOfMemory => Self::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => Self::SkipFrame,
        }
    }
}

/// Uncaptured device errors are reported and otherwise ignored; the frame
/// loop keeps running.
pub(crate) fn log_uncaptured(err: wgpu::Error) {
    log::error!("gpu: uncaptured device error: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncaptured_validation_error_is_logged_not_fatal() {
        log_uncaptured(wgpu::Error::Validation {
            source: Box::new(std::fmt::Error),
            description: "buffer write out of bounds".to_string(),
        });
        // Reaching this point means the handler did not abort.
        log_uncaptured(wgpu::Error::OutOfMemory { source: Box::new(std::fmt::Error) });
    }

    #[test]
    fn only_out_of_memory_is_fatal() {
        use wgpu::SurfaceError as E;
        assert_eq!(SurfaceErrorAction::for_error(&E::Lost), SurfaceErrorAction::Reconfigure);
        assert_eq!(SurfaceErrorAction::for_error(&E::Outdated), SurfaceErrorAction::Reconfigure);
        assert_eq!(SurfaceErrorAction::for_error(&E::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(SurfaceErrorAction::for_error(&E::Other), SurfaceErrorAction::SkipFrame);
        assert_eq!(SurfaceErrorAction::for_error(&E::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
