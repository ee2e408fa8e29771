//! Certificate construction and canonical serialization
//!
//! [`CertificateBuilder`] is the fluent path for assembling records,
//! including records whose declared length deliberately disagrees with the
//! payload they carry (the codec treats that mismatch as data, so tests and
//! tooling need a way to produce it). [`encode_certificate`] is the
//! serializer: a pure transform back to wire bytes that trusts the declared
//! length as the authoritative slice bound.

use byteorder::{BigEndian, ByteOrder};

use super::{Certificate, CertificateKind};
use crate::error::CertificateError;
use crate::CERT_MIN_SIZE;

/// Fluent constructor for certificates
///
/// The declared length defaults to the payload length (saturating at the
/// 16-bit wire maximum) unless overridden.
#[derive(Debug, Clone)]
pub struct CertificateBuilder {
    cert_type: u8,
    declared_length: Option<u16>,
    payload: Vec<u8>,
}

impl CertificateBuilder {
    /// Start a builder for a recognized kind.
    pub fn new(kind: CertificateKind) -> Self {
        Self::from_type(kind as u8)
    }

    /// Start a builder from a raw type byte, recognized or not.
    pub fn from_type(cert_type: u8) -> Self {
        Self {
            cert_type,
            declared_length: None,
            payload: Vec::new(),
        }
    }

    /// Set the payload bytes.
    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Override the declared length, decoupling it from the payload length.
    pub fn declared_length(mut self, declared_length: u16) -> Self {
        self.declared_length = Some(declared_length);
        self
    }

    /// Build the certificate.
    pub fn build(self) -> Certificate {
        let declared = self
            .declared_length
            .unwrap_or_else(|| u16::try_from(self.payload.len()).unwrap_or(u16::MAX));
        Certificate::new(self.cert_type, declared, self.payload)
    }
}

/// Serialize a certificate to its canonical wire form:
/// `[type][declared length, BE u16][payload[..declared]]`.
///
/// Pure and side-effect free. No reconciliation happens here: the declared
/// length is the authoritative slice bound, and asking for more payload than
/// exists fails with [`CertificateError::OutOfBounds`].
pub fn encode_certificate(certificate: &Certificate) -> crate::Result<Vec<u8>> {
    let declared = certificate.declared_length() as usize;
    let payload = certificate.payload_bytes();

    if declared > payload.len() {
        return Err(CertificateError::OutOfBounds {
            declared,
            available: payload.len(),
        });
    }

    let mut wire = Vec::with_capacity(CERT_MIN_SIZE + declared);
    wire.push(certificate.cert_type());
    let mut length_bytes = [0u8; 2];
    BigEndian::write_u16(&mut length_bytes, certificate.declared_length());
    wire.extend_from_slice(&length_bytes);
    wire.extend_from_slice(&payload[..declared]);
    Ok(wire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cert::{read_certificate, FormatCondition};

    #[test]
    fn test_encode_exact_fit() {
        let cert = CertificateBuilder::new(CertificateKind::Key)
            .payload(vec![0xDE, 0xAD, 0xBE, 0xEF])
            .build();
        let wire = cert.to_bytes().unwrap();
        assert_eq!(wire, vec![0x05, 0x00, 0x04, 0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_length_field_written_big_endian() {
        let cert = CertificateBuilder::new(CertificateKind::Hidden)
            .payload(vec![0x00; 0x0102])
            .build();
        let wire = cert.to_bytes().unwrap();
        assert_eq!(&wire[..3], &[0x02, 0x01, 0x02]);
        assert_eq!(wire.len(), 3 + 0x0102);
    }

    #[test]
    fn test_encode_clips_excess_payload_at_declared_boundary() {
        let cert = CertificateBuilder::new(CertificateKind::Hashcash)
            .payload(vec![0xAA, 0xBB, 0xCC, 0xDD])
            .declared_length(2)
            .build();
        let wire = cert.to_bytes().unwrap();
        assert_eq!(wire, vec![0x01, 0x00, 0x02, 0xAA, 0xBB]);
    }

    #[test]
    fn test_encode_fails_when_declared_exceeds_payload() {
        let cert = CertificateBuilder::new(CertificateKind::Signed)
            .payload(vec![1, 2, 3, 4])
            .declared_length(10)
            .build();
        assert_eq!(
            cert.to_bytes().unwrap_err(),
            CertificateError::OutOfBounds {
                declared: 10,
                available: 4
            }
        );
    }

    #[test]
    fn test_builder_defaults_declared_to_payload_length() {
        let cert = CertificateBuilder::from_type(200)
            .payload(vec![0x42; 7])
            .build();
        assert_eq!(cert.cert_type(), 200);
        assert_eq!(cert.declared_length(), 7);
    }

    #[test]
    fn test_round_trip_through_reader() {
        let original = CertificateBuilder::new(CertificateKind::Multiple)
            .payload((0u8..32).collect())
            .build();
        let wire = original.to_bytes().unwrap();

        let (parsed, remainder, condition) = read_certificate(&wire).unwrap();
        assert_eq!(parsed, original);
        assert!(remainder.is_empty());
        assert_eq!(condition, FormatCondition::Valid);
    }
}
