//! Crate-level error types.

use std::fmt;

use crate::gpu::GpuInitError;

/// Errors produced by the gyre crate.
#[derive(Debug)]
pub enum GyreError {
    /// GPU context initialization failure.
    Gpu(GpuInitError),
    /// The asset source failed to produce the model.
    AssetLoad(String),
    /// A named sub-mesh the viewer animates is not present in the model.
    MissingMesh(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A frame could not be drawn or presented.
    Render(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for GyreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::AssetLoad(msg) => write!(f, "asset load error: {msg}"),
            Self::MissingMesh(name) => {
                write!(f, "model has no mesh named '{name}'")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Render(msg) => write!(f, "render error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GyreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GpuInitError> for GyreError {
    fn from(e: GpuInitError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for GyreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn missing_mesh_names_the_mesh() {
        let err = GyreError::MissingMesh("Propeller".into());
        assert_eq!(err.to_string(), "model has no mesh named 'Propeller'");
        assert!(err.source().is_none());
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err: GyreError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());
    }
}
