//! Inspect Certificate - wire buffer analysis tool
//!
//! Parses a hex-encoded certificate buffer from the command line and prints
//! the header fields, the reconciliation outcome, any remainder bytes, and
//! the canonical re-serialization.
//!
//! Usage: `inspect_certificate 050004deadbeef`

use cert_codec::{read_certificate, CertificateKind, FormatCondition};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arg = std::env::args()
        .nth(1)
        .ok_or("usage: inspect_certificate <hex-bytes>")?;
    let data = hex::decode(arg.trim())?;

    println!("Buffer: {} bytes", data.len());

    let (cert, remainder, condition) = match read_certificate(&data) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("Unreadable: {}", e);
            return Ok(());
        }
    };

    match CertificateKind::try_from(cert.cert_type()) {
        Ok(kind) => println!("Type:      {} ({})", cert.cert_type(), kind),
        Err(_) => println!("Type:      {} (unrecognized)", cert.cert_type()),
    }
    println!("Declared:  {} bytes", cert.declared_length());
    println!("Carried:   {} bytes", cert.payload_bytes().len());

    let (effective, _) = cert.effective_length();
    println!("Condition: {:?}", condition);
    println!("Effective: {} bytes", effective);

    match cert.effective_payload() {
        Ok((payload, _)) => println!("Payload:   {}", hex::encode(payload)),
        Err(e) => println!("Payload:   unavailable ({})", e),
    }

    if condition == FormatCondition::ExcessData {
        println!("Remainder: {}", hex::encode(remainder));
    }

    match cert.to_bytes() {
        Ok(wire) => println!("Canonical: {}", hex::encode(wire)),
        Err(e) => println!("Canonical: not serializable ({})", e),
    }

    Ok(())
}
