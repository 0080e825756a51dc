//! Error type for the convenience layer.

use sankhya_base::DateError;
use thiserror::Error;

/// Errors returned by `sankhya_rs`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SankhyaError {
    /// The input could not be read as a birth date.
    #[error("invalid birth date: {0}")]
    Date(#[from] DateError),
    /// Outlook horizon of zero years requested.
    #[error("outlook horizon must be at least one year")]
    EmptyHorizon,
}
