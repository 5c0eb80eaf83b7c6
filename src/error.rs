//! Error types for glyphfloat.
//!
//! The motion core itself never fails. These cover the layers around it:
//! loading configuration, opening a window and bringing up the GPU.

use thiserror::Error;

/// Errors raised while loading or validating a [`SceneConfig`](crate::SceneConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file was read but is not valid JSON for a scene.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed fine but is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found; a Vulkan/Metal/DX12/GL capable device is required")]
    NoAdapter,
    /// Failed to create GPU device.
    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
    /// The surface reports no texture formats for this adapter.
    #[error("surface has no supported texture formats")]
    UnsupportedSurface,
}

/// Errors that can occur when running the windowed backdrop.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to create event loop.
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias for results carrying a [`ConfigError`].
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_names_the_field() {
        let e = ConfigError::Invalid("speed must be finite and > 0".to_string());
        let msg = e.to_string();
        assert!(msg.contains("invalid config"));
        assert!(msg.contains("speed"));
    }

    #[test]
    fn config_error_lifts_into_app_error() {
        let e: AppError = ConfigError::Invalid("labels must not be empty".into()).into();
        assert!(matches!(e, AppError::Config(ConfigError::Invalid(_))));
        assert!(e.to_string().contains("labels"));
    }
}
