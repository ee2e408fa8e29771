//! Fatal errors for certificate codec operations
//!
//! Only unrecoverable failures live here, cases where no usable data can be
//! handed back. Recoverable wire anomalies (a declared length that disagrees
//! with the bytes actually present) are reported as
//! [`FormatCondition`](crate::FormatCondition) values alongside best-effort
//! data instead.

use thiserror::Error;

/// Certificate codec errors with numeric context
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CertificateError {
    /// The buffer (or declared length) is below the minimum viable size.
    #[error("certificate too short: need {need} bytes, got {got}")]
    TooShort { need: usize, got: usize },

    /// Serialization was asked to slice more payload than exists.
    #[error("certificate payload out of bounds: declared {declared} bytes, {available} available")]
    OutOfBounds { declared: usize, available: usize },

    /// The type byte does not map to a recognized [`CertificateKind`].
    ///
    /// Raised only by the typed-kind conversion; parsing never rejects
    /// unrecognized type values.
    ///
    /// [`CertificateKind`]: crate::CertificateKind
    #[error("unknown certificate kind: {0}")]
    UnknownKind(u8),
}
