use thiserror::Error;

/// Top-level error type for the polyring generator.
#[derive(Debug, Error)]
pub enum PolyringError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Errors raised while turning host input into parameter edits.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("cannot parse {input:?} as a value for {field}")]
    Parse { field: &'static str, input: String },

    #[error("unknown parameter: {0}")]
    UnknownField(String),
}

/// Convenience type alias for results using [`PolyringError`].
pub type Result<T> = std::result::Result<T, PolyringError>;
