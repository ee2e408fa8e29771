//! Certificate record types and codec operations
//!
//! The module splits along data/behavior lines the way the rest of the wire
//! layer does:
//! - [`certificate`] holds the immutable [`Certificate`] entity and its
//!   reconciliation accessors
//! - [`parser`] holds [`read_certificate`] and the zero-copy wire header
//! - [`builder`] holds fluent construction and canonical serialization
//!
//! Shared vocabulary ([`CertificateKind`], [`FormatCondition`]) lives here.

pub mod builder;
pub mod certificate;
pub mod parser;

pub use builder::{encode_certificate, CertificateBuilder};
pub use certificate::{Certificate, WireRecord};
pub use parser::{read_certificate, read_certificate_with, CertificateHeader};

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

/// Recognized certificate type values
///
/// Conversion from the raw wire byte is fallible; values above 5 are
/// structurally legal on the wire and simply have no symbolic name.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum CertificateKind {
    Null = 0,
    Hashcash = 1,
    Hidden = 2,
    Signed = 3,
    Multiple = 4,
    Key = 5,
}

impl CertificateKind {
    /// Wire-format name for diagnostics and tooling
    pub fn name(&self) -> &'static str {
        match self {
            CertificateKind::Null => "NULL",
            CertificateKind::Hashcash => "HASHCASH",
            CertificateKind::Hidden => "HIDDEN",
            CertificateKind::Signed => "SIGNED",
            CertificateKind::Multiple => "MULTIPLE",
            CertificateKind::Key => "KEY",
        }
    }
}

impl std::fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of reconciling a declared length against the payload bytes
/// actually present
///
/// Exactly one condition is produced per reconciliation; the checks run in a
/// fixed order and return at the first match, so the variants are mutually
/// exclusive by construction. Compared by value, never by message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatCondition {
    /// Declared length and payload agree exactly.
    Valid,
    /// Declared length is below the minimum viable size. Fatal: the payload
    /// must not be interpreted.
    TooShort,
    /// Declared length exceeds the bytes available. Recoverable: callers get
    /// everything that is present.
    Truncated,
    /// The buffer holds bytes beyond the declared boundary. Recoverable:
    /// the payload clips at the boundary and the rest is remainder.
    ExcessData,
}

impl FormatCondition {
    /// Recoverable anomaly; best-effort data is still produced.
    pub fn is_warning(&self) -> bool {
        matches!(self, FormatCondition::Truncated | FormatCondition::ExcessData)
    }

    /// Unrecoverable for payload interpretation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FormatCondition::TooShort)
    }
}
