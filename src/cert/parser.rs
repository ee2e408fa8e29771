//! Certificate reader - zero-copy header extraction and tail classification
//!
//! ## Purpose
//!
//! Turns a raw byte buffer into a [`Certificate`] plus any trailing remainder
//! bytes beyond the record's declared boundary. The buffer comes from a peer
//! and nothing in it is trusted: the minimum-size guard runs before any field
//! is read, and the declared length is only ever used as a slice bound after
//! it has been checked against the bytes actually present.
//!
//! ## Parsing Flow
//!
//! ```text
//! Raw Buffer → [Header Split] → Tentative Certificate → [Reconciliation]
//!                  3 bytes        untrimmed payload       remainder +
//!                  zero-copy      from offset 3           FormatCondition
//! ```
//!
//! The reader never trims the payload itself (trimming is the accessor's
//! job); it only decides where the remainder starts and which condition to
//! surface.

use zerocopy::byteorder::{BigEndian, U16};
use zerocopy::{AsBytes, FromBytes, FromZeroes, Ref, Unaligned};

use super::{Certificate, FormatCondition};
use crate::diagnostics::{DiagnosticsSink, FormatWarning, NullSink};
use crate::error::CertificateError;
use crate::CERT_MIN_SIZE;

/// Wire overlay for the fixed 3-byte certificate header
///
/// Byte-for-byte image of the wire layout: one type byte followed by the
/// declared payload length as a big-endian u16. `Unaligned` because the
/// header can start at any offset inside an enclosing message.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, AsBytes, FromBytes, FromZeroes, Unaligned)]
pub struct CertificateHeader {
    /// Raw certificate type byte
    pub cert_type: u8,
    /// Declared payload length, big-endian on the wire
    pub length: U16<BigEndian>,
}

impl CertificateHeader {
    /// Header size in bytes; also the minimum valid buffer size.
    pub const SIZE: usize = CERT_MIN_SIZE;
}

/// Read a certificate from a byte buffer, returning any trailing bytes
/// beyond its declared boundary.
///
/// # Arguments
/// * `data` - Raw buffer starting at the certificate's type byte
///
/// # Returns
/// `(certificate, remainder, condition)` on success:
/// - `certificate` keeps the full untrimmed payload from offset 3; clipping
///   is performed by [`Certificate::effective_payload`], not here
/// - `remainder` is the slice beyond the declared boundary (empty unless the
///   condition is `ExcessData`)
/// - `condition` classifies the tail: `Valid`, `TooShort` (declared length
///   below minimum; the certificate is still returned so callers can
///   observe the header fields), `Truncated` (declared exceeds available,
///   best-effort payload), or `ExcessData`
///
/// # Errors
/// `CertificateError::TooShort` if the buffer cannot hold the 3-byte header.
/// This is the only input for which no certificate is produced.
pub fn read_certificate(data: &[u8]) -> crate::Result<(Certificate, &[u8], FormatCondition)> {
    read_certificate_with(data, &NullSink)
}

/// [`read_certificate`] with an injectable diagnostics sink.
///
/// The sink is notified once per anomalous condition with the declared and
/// actual sizes and a reason; it has no bearing on control flow or returned
/// values.
pub fn read_certificate_with<'a>(
    data: &'a [u8],
    sink: &dyn DiagnosticsSink,
) -> crate::Result<(Certificate, &'a [u8], FormatCondition)> {
    let (header, payload) = Ref::<_, CertificateHeader>::new_unaligned_from_prefix(data).ok_or(
        CertificateError::TooShort {
            need: CERT_MIN_SIZE,
            got: data.len(),
        },
    )?;
    let header = header.into_ref();

    let certificate = Certificate::new(header.cert_type, header.length.get(), payload.to_vec());
    let declared = certificate.declared_length() as usize;
    let available = certificate.payload_bytes().len();

    let (_, condition) = certificate.effective_length();
    match condition {
        FormatCondition::Valid => Ok((certificate, &[], FormatCondition::Valid)),
        FormatCondition::TooShort => {
            sink.format_warning(&FormatWarning {
                at: "read_certificate",
                declared,
                actual: available,
                reason: "certificate is too short",
            });
            Ok((certificate, &[], FormatCondition::TooShort))
        }
        FormatCondition::Truncated => {
            sink.format_warning(&FormatWarning {
                at: "read_certificate",
                declared,
                actual: available,
                reason: "certificate data is shorter than specified by length",
            });
            Ok((certificate, &[], FormatCondition::Truncated))
        }
        FormatCondition::ExcessData => {
            sink.format_warning(&FormatWarning {
                at: "read_certificate",
                declared,
                actual: available,
                reason: "certificate contains data beyond length",
            });
            let remainder = &data[CERT_MIN_SIZE + declared..];
            Ok((certificate, remainder, FormatCondition::ExcessData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink {
        warnings: RefCell<Vec<(usize, usize, String)>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                warnings: RefCell::new(Vec::new()),
            }
        }
    }

    impl DiagnosticsSink for RecordingSink {
        fn format_warning(&self, warning: &FormatWarning<'_>) {
            self.warnings.borrow_mut().push((
                warning.declared,
                warning.actual,
                warning.reason.to_string(),
            ));
        }
    }

    #[test]
    fn test_header_overlay_is_exactly_three_bytes() {
        assert_eq!(std::mem::size_of::<CertificateHeader>(), 3);
        assert_eq!(CertificateHeader::SIZE, 3);
    }

    #[test]
    fn test_buffer_below_header_size_fails_hard() {
        for buffer in [&[][..], &[0x05][..], &[0x05, 0x00][..]] {
            assert_eq!(
                read_certificate(buffer).unwrap_err(),
                CertificateError::TooShort {
                    need: 3,
                    got: buffer.len()
                }
            );
        }
    }

    #[test]
    fn test_minimum_buffer_yields_certificate_with_too_short_condition() {
        // Regression pin: a bare header with declared length 0 still produces
        // the certificate, but flagged TooShort rather than Valid
        let (cert, remainder, condition) = read_certificate(&[0x00, 0x00, 0x00]).unwrap();
        assert_eq!(cert.cert_type(), 0);
        assert_eq!(cert.declared_length(), 0);
        assert!(cert.payload_bytes().is_empty());
        assert!(remainder.is_empty());
        assert_eq!(condition, FormatCondition::TooShort);
    }

    #[test]
    fn test_exact_match() {
        let wire = [0x05, 0x00, 0x04, 0xDE, 0xAD, 0xBE, 0xEF];
        let (cert, remainder, condition) = read_certificate(&wire).unwrap();
        assert_eq!(cert.cert_type(), 5);
        assert_eq!(cert.declared_length(), 4);
        assert_eq!(cert.payload_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert!(remainder.is_empty());
        assert_eq!(condition, FormatCondition::Valid);
    }

    #[test]
    fn test_excess_data_yields_remainder_and_untrimmed_payload() {
        let wire = [0x01, 0x00, 0x02, 0xAA, 0xBB, 0xCC, 0xDD];
        let (cert, remainder, condition) = read_certificate(&wire).unwrap();
        assert_eq!(cert.cert_type(), 1);
        assert_eq!(cert.declared_length(), 2);
        // The reader leaves the payload untrimmed; clipping is the
        // accessor's job
        assert_eq!(cert.payload_bytes(), &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(cert.effective_payload().unwrap().0, &[0xAA, 0xBB]);
        assert_eq!(remainder, &[0xCC, 0xDD]);
        assert_eq!(condition, FormatCondition::ExcessData);
    }

    #[test]
    fn test_truncated_is_surfaced_as_warning_not_failure() {
        let wire = [0x03, 0x00, 0x0A, 0x01, 0x02, 0x03, 0x04];
        let (cert, remainder, condition) = read_certificate(&wire).unwrap();
        assert_eq!(cert.declared_length(), 10);
        assert_eq!(cert.effective_length(), (4, FormatCondition::Truncated));
        assert_eq!(cert.effective_payload().unwrap().0, &[1, 2, 3, 4]);
        assert!(remainder.is_empty());
        assert_eq!(condition, FormatCondition::Truncated);
    }

    #[test]
    fn test_length_field_is_big_endian() {
        let mut wire = vec![0x02, 0x01, 0x02];
        wire.extend(std::iter::repeat(0xEE).take(0x0102));
        let (cert, _, condition) = read_certificate(&wire).unwrap();
        assert_eq!(cert.declared_length(), 0x0102);
        assert_eq!(condition, FormatCondition::Valid);
    }

    #[test]
    fn test_sink_notified_once_per_anomaly() {
        let sink = RecordingSink::new();
        let wire = [0x01, 0x00, 0x02, 0xAA, 0xBB, 0xCC, 0xDD];
        let (_, _, condition) = read_certificate_with(&wire, &sink).unwrap();
        assert_eq!(condition, FormatCondition::ExcessData);

        let warnings = sink.warnings.borrow();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].0, 2);
        assert_eq!(warnings[0].1, 4);
        assert_eq!(warnings[0].2, "certificate contains data beyond length");
    }

    #[test]
    fn test_sink_not_notified_on_valid_record() {
        let sink = RecordingSink::new();
        let wire = [0x05, 0x00, 0x01, 0x42];
        read_certificate_with(&wire, &sink).unwrap();
        assert!(sink.warnings.borrow().is_empty());
    }
}
