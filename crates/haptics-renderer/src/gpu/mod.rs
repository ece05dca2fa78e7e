mod context;
mod types;
mod uniforms;

pub use context::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn surface_error_converts() {
        let err: RendererError = wgpu::SurfaceError::OutOfMemory.into();
        assert!(matches!(err, RendererError::SurfaceError(_)));
    }

    #[test]
    fn physical_size_aspect() {
        let size = PhysicalSize {
            width: 1600,
            height: 800,
        };
        assert_eq!(size.aspect(), 2.0);

        let minimized = PhysicalSize {
            width: 0,
            height: 0,
        };
        assert_eq!(minimized.aspect(), 1.0);
    }

    #[test]
    fn present_mode_follows_vsync() {
        assert_eq!(present_mode(true), wgpu::PresentMode::Fifo);
        assert_eq!(present_mode(false), wgpu::PresentMode::AutoNoVsync);
    }
}
