//! Certificate entity and length reconciliation
//!
//! [`Certificate`] stores exactly what the wire said (raw type byte,
//! declared length, untrimmed payload) and defers every judgement about
//! internal consistency to access time. The declared length is peer-supplied:
//! a record may claim more bytes than it carries, fewer, or too few to be
//! meaningful, and each outcome is reported as a value-compared
//! [`FormatCondition`] rather than being silently repaired at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CertificateKind, FormatCondition};
use crate::error::CertificateError;
use crate::CERT_SIGNATURE_SIZE;

/// A single TLV certificate record
///
/// Immutable after construction. No invariant forces the payload length to
/// match the declared length; the mismatch is a first-class, detectable
/// condition surfaced by [`effective_length`](Certificate::effective_length)
/// and [`effective_payload`](Certificate::effective_payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    cert_type: u8,
    declared_length: u16,
    payload: Vec<u8>,
}

impl Certificate {
    /// Construct from parts. Nothing is validated here; reconciliation
    /// happens at access time.
    pub fn new(cert_type: u8, declared_length: u16, payload: Vec<u8>) -> Self {
        Self {
            cert_type,
            declared_length,
            payload,
        }
    }

    /// The raw type byte, verbatim. Never fails: the type byte, once read,
    /// is always present.
    pub fn cert_type(&self) -> u8 {
        self.cert_type
    }

    /// The type byte as a recognized [`CertificateKind`].
    ///
    /// Fails with [`CertificateError::UnknownKind`] for values above 5.
    /// Unrecognized values are not invalid on the wire; this conversion is a
    /// convenience for callers that dispatch on symbolic kinds.
    pub fn kind(&self) -> crate::Result<CertificateKind> {
        CertificateKind::try_from(self.cert_type)
            .map_err(|_| CertificateError::UnknownKind(self.cert_type))
    }

    /// The payload length the record claims to have, as read from or written
    /// to the wire.
    pub fn declared_length(&self) -> u16 {
        self.declared_length
    }

    /// The untrimmed payload bytes, exactly as constructed. Use
    /// [`effective_payload`](Certificate::effective_payload) for the
    /// boundary-checked view.
    pub fn payload_bytes(&self) -> &[u8] {
        &self.payload
    }

    /// Reconcile the declared length against the bytes actually present.
    ///
    /// Returns the effective length together with exactly one condition:
    /// - declared < 1: `TooShort` (a zero declared length is unconditionally
    ///   flagged; the effective length is the declared value)
    /// - declared > available: `Truncated`, effective length = available
    /// - declared < available: `ExcessData`, effective length = declared
    /// - otherwise: `Valid`, effective length = declared
    ///
    /// The checks run in this order and return at the first match, so the
    /// conditions are mutually exclusive.
    pub fn effective_length(&self) -> (usize, FormatCondition) {
        let declared = self.declared_length as usize;
        let available = self.payload.len();

        if declared < 1 {
            (declared, FormatCondition::TooShort)
        } else if declared > available {
            (available, FormatCondition::Truncated)
        } else if declared < available {
            (declared, FormatCondition::ExcessData)
        } else {
            (declared, FormatCondition::Valid)
        }
    }

    /// The payload view implied by [`effective_length`](Certificate::effective_length).
    ///
    /// - `TooShort` is fatal: no payload is returned.
    /// - `Truncated` returns everything available (best effort).
    /// - `ExcessData` returns the payload clipped at the declared boundary.
    /// - `Valid` returns the payload unmodified.
    pub fn effective_payload(&self) -> crate::Result<(&[u8], FormatCondition)> {
        let (length, condition) = self.effective_length();
        match condition {
            FormatCondition::TooShort => Err(CertificateError::TooShort {
                need: 1,
                got: self.declared_length as usize,
            }),
            FormatCondition::Truncated => Ok((&self.payload, condition)),
            FormatCondition::ExcessData => Ok((&self.payload[..length], condition)),
            FormatCondition::Valid => Ok((&self.payload, condition)),
        }
    }

    /// Canonical wire bytes: `[type][declared length, BE u16][payload[..declared]]`.
    ///
    /// Trusts the declared length as the slice bound; fails with
    /// [`CertificateError::OutOfBounds`] if it exceeds the payload.
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        super::builder::encode_certificate(self)
    }

    /// Signature length implied by the default signing algorithm when this
    /// certificate is embedded in a keyed structure.
    pub fn signature_size(&self) -> usize {
        CERT_SIGNATURE_SIZE
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match CertificateKind::try_from(self.cert_type) {
            Ok(kind) => write!(f, "Certificate({}", kind.name())?,
            Err(_) => write!(f, "Certificate(type {}", self.cert_type)?,
        }
        write!(
            f,
            ", declared {} bytes, carrying {}: ",
            self.declared_length,
            self.payload.len()
        )?;
        if self.payload.len() > 16 {
            write!(f, "{}..)", hex::encode(&self.payload[..16]))
        } else {
            write!(f, "{})", hex::encode(&self.payload))
        }
    }
}

/// Capability set required of certificate records embedded in larger
/// protocol structures
pub trait WireRecord {
    /// Canonical wire serialization.
    fn to_bytes(&self) -> crate::Result<Vec<u8>>;
    /// Reconciled length plus its condition.
    fn effective_length(&self) -> (usize, FormatCondition);
    /// Reconciled payload view.
    fn effective_payload(&self) -> crate::Result<(&[u8], FormatCondition)>;
    /// Raw type byte.
    fn cert_type(&self) -> u8;
    /// Signature length for the embedding keyed structure.
    fn signature_size(&self) -> usize;
}

impl WireRecord for Certificate {
    fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        Certificate::to_bytes(self)
    }

    fn effective_length(&self) -> (usize, FormatCondition) {
        Certificate::effective_length(self)
    }

    fn effective_payload(&self) -> crate::Result<(&[u8], FormatCondition)> {
        Certificate::effective_payload(self)
    }

    fn cert_type(&self) -> u8 {
        Certificate::cert_type(self)
    }

    fn signature_size(&self) -> usize {
        Certificate::signature_size(self)
    }
}

// Conformance is checked at compile time; no runtime artifact.
const _: () = {
    const fn assert_wire_record<T: WireRecord>() {}
    assert_wire_record::<Certificate>()
};
