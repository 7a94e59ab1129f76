use thiserror::Error;

/// Errors raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter falls outside of its valid domain.
    #[error("'{name}' {reason}, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What the parameter must satisfy.
        reason: &'static str,
        /// The rejected value, formatted.
        value: String,
    },
    /// Encoding or writing an image failed.
    #[error("could not write image: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            name,
            reason,
            value: value.to_string(),
        }
    }
}

/// Result type alias with [`Error`] as the error variant.
pub type Result<T, E = Error> = std::result::Result<T, E>;
