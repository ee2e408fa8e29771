//! # Certificate TLV Codec
//!
//! ## Purpose
//!
//! This crate contains the "rules" layer for the certificate record, the
//! self-describing type-length-value (TLV) building block carried inside the
//! larger wire protocol:
//! - Decoding a raw byte buffer into a typed, length-bounded certificate plus
//!   any trailing bytes beyond its declared boundary
//! - Reconciling the declared length field against the bytes actually present
//! - Canonical serialization back to wire form
//!
//! The declared length is peer-supplied and untrusted: it can claim more bytes
//! than the buffer holds, fewer than the buffer holds, or too few to be
//! meaningful at all. Each of those is a first-class, value-compared outcome
//! ([`FormatCondition`]) rather than a panic or a silently "fixed" slice.
//!
//! ## Wire Format
//!
//! All integers are unsigned big-endian:
//!
//! ```text
//! +----+----+----+----+----+-//
//! |type| length  | payload
//! +----+----+----+----+----+-//
//!
//! type    :: 1 byte  (0=NULL 1=HASHCASH 2=HIDDEN 3=SIGNED 4=MULTIPLE 5=KEY)
//! length  :: 2 bytes (declared payload length, 0-65535)
//! payload :: `length` bytes, nominally
//! ```
//!
//! Type values above 5 are structurally legal and pass through unchanged; the
//! type byte is otherwise opaque to this layer. Payload content is never
//! interpreted here; once boundaries are established it is opaque bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use cert_codec::{read_certificate, CertificateKind, FormatCondition};
//!
//! // Exact-fit record followed by nothing
//! let wire = [0x05, 0x00, 0x04, 0xDE, 0xAD, 0xBE, 0xEF];
//! let (cert, remainder, condition) = read_certificate(&wire)?;
//!
//! assert_eq!(cert.kind()?, CertificateKind::Key);
//! assert_eq!(cert.effective_payload()?.0, &[0xDE, 0xAD, 0xBE, 0xEF]);
//! assert!(remainder.is_empty());
//! assert_eq!(condition, FormatCondition::Valid);
//! # Ok::<(), cert_codec::CertificateError>(())
//! ```
//!
//! A buffer longer than the declared length yields the bytes beyond the
//! boundary as a remainder slice for the caller's next record:
//!
//! ```rust
//! use cert_codec::{read_certificate, FormatCondition};
//!
//! let wire = [0x01, 0x00, 0x02, 0xAA, 0xBB, 0xCC, 0xDD];
//! let (cert, remainder, condition) = read_certificate(&wire)?;
//!
//! assert_eq!(condition, FormatCondition::ExcessData);
//! assert_eq!(cert.effective_payload()?.0, &[0xAA, 0xBB]);
//! assert_eq!(remainder, &[0xCC, 0xDD]);
//! # Ok::<(), cert_codec::CertificateError>(())
//! ```
//!
//! ## What This Crate Does NOT Contain
//!
//! - Payload interpretation (signed/keyed variants belong to the embedding
//!   structures)
//! - Transport, framing, or I/O of any kind
//! - Logging baked into parsing; warnings flow through an injectable
//!   [`DiagnosticsSink`] and never alter returned values
//!
//! ## Error Model
//!
//! Fatal failures (nothing usable produced) are [`CertificateError`].
//! Recoverable anomalies travel alongside best-effort data as a
//! [`FormatCondition`], so callers choose strict or lenient handling.

pub mod cert;
pub mod diagnostics;
pub mod error;

pub use cert::{
    read_certificate, read_certificate_with, Certificate, CertificateBuilder, CertificateHeader,
    CertificateKind, FormatCondition, WireRecord,
};
pub use diagnostics::{DiagnosticsSink, FormatWarning, NullSink, TracingSink};
pub use error::CertificateError;

/// Minimum size of a wire certificate: one type byte plus the two-byte
/// big-endian length field.
pub const CERT_MIN_SIZE: usize = 3;

/// Signature length implied by the default signing algorithm for certificates
/// embedded in keyed structures.
pub const CERT_SIGNATURE_SIZE: usize = 40;

/// Result type for certificate codec operations
pub type Result<T> = std::result::Result<T, CertificateError>;
