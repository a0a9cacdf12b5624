//! Error types for the undulate core.

use thiserror::Error;

/// Errors produced by sketch construction, stepping and snapshot output.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Canvas size or pixel density produced an empty or overflowing raster.
    #[error("invalid dimensions: canvas size and density must produce a non-empty raster")]
    InvalidDimensions,

    /// A parameter had the right type but a value outside its valid range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// `step` was called before `initialize`.
    #[error("simulation stepped before initialize()")]
    NotInitialized,

    /// No sketch is registered under the requested name.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// Writing a snapshot failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = EngineError::InvalidDimensions.to_string();
        assert!(
            msg.contains("canvas size") && msg.contains("density"),
            "expected message mentioning size and density, got: {msg}"
        );
    }

    #[test]
    fn invalid_param_includes_name_and_reason() {
        let err = EngineError::InvalidParam {
            name: "border".into(),
            reason: "must be in [0, 0.5)".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("border"));
        assert!(msg.contains("[0, 0.5)"));
    }

    #[test]
    fn unknown_engine_includes_name() {
        let msg = EngineError::UnknownEngine("lorenz".into()).to_string();
        assert!(msg.contains("lorenz"), "missing engine name in: {msg}");
    }

    #[test]
    fn io_includes_message() {
        let msg = EngineError::Io("disk full".into()).to_string();
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn engine_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }

    #[test]
    fn engine_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<EngineError>();
    }
}
