use thiserror::Error;

/// Errors surfaced by the core and the shared renderer.
///
/// Name lookups (`UnknownPreset`, `UnknownPattern`, `UnknownControl`) are
/// recoverable: the application layer treats them as no-ops. The GPU
/// variants are fatal to rendering since there is no fallback shader.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("unknown variant `{0}` (expected `flow` or `geometric`)")]
    UnknownVariant(String),
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
    #[error("unknown control `{0}`")]
    UnknownControl(String),
    #[error("no compatible graphics adapter")]
    NoAdapter,
    #[error("graphics device request failed: {0}")]
    Device(String),
    #[error("shader program failed validation: {0}")]
    Shader(String),
}
