/*!
    Signature decoding.

    The default encoding is the ASN.1 structure from RFC 3279 §2.2.3:

      Ecdsa-Sig-Value ::= SEQUENCE {
        r  INTEGER,
        s  INTEGER
      }

    Exactly two INTEGERs, nothing else inside the SEQUENCE and nothing after
    it. Values are not range-checked here; a zero, negative or oversized
    scalar decodes fine and simply fails verification.
*/

use der::asn1::IntRef;
use der::{Decode, Reader, SliceReader};
use num_bigint::{BigInt, Sign};

use crate::encoding::decode_base64;
use crate::error::{DecodeError, DecodeResult};
use crate::types::{NamedCurve, SignatureFormat};

/**
    The (r, s) pair of an ECDSA signature as arbitrary-precision integers.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureComponents {
    pub r: BigInt,
    pub s: BigInt,
}

impl SignatureComponents {
    pub fn new(r: BigInt, s: BigInt) -> Self {
        Self { r, s }
    }

    /**
        Parse a base64-encoded DER `Ecdsa-Sig-Value`.
    */
    pub fn from_base64(encoded: &str) -> DecodeResult<Self> {
        let bytes = decode_base64("signature", encoded)?;
        Self::from_der(&bytes)
    }

    /**
        Parse a DER `Ecdsa-Sig-Value`, rejecting any bytes after the record
        with [`DecodeError::TrailingData`].
    */
    pub fn from_der(input: &[u8]) -> DecodeResult<Self> {
        let mut reader = SliceReader::new(input)?;
        let (r, s) = reader.sequence(|seq| {
            let r = IntRef::decode(seq)?;
            let s = IntRef::decode(seq)?;
            Ok((
                BigInt::from_signed_bytes_be(r.as_bytes()),
                BigInt::from_signed_bytes_be(s.as_bytes()),
            ))
        })?;

        let trailing = u32::from(reader.remaining_len()) as usize;
        if trailing > 0 {
            return Err(DecodeError::TrailingData(trailing));
        }

        Ok(Self { r, s })
    }

    /**
        Parse the fixed-width `r || s` form for `curve`.

        The input must be exactly twice the curve's field size.
    */
    pub fn from_fixed(input: &[u8], curve: NamedCurve) -> DecodeResult<Self> {
        let width = curve.field_size();
        if input.len() != 2 * width {
            return Err(DecodeError::structural(format!(
                "fixed {curve} signature is {} bytes, expected {}",
                input.len(),
                2 * width
            )));
        }
        let (r, s) = input.split_at(width);
        Ok(Self {
            r: BigInt::from_bytes_be(Sign::Plus, r),
            s: BigInt::from_bytes_be(Sign::Plus, s),
        })
    }

    /**
        Encode as fixed-width `r || s` for `curve`.

        Returns `None` when either scalar is not positive or does not fit in
        the curve's field size. Such a signature can never verify.
    */
    pub fn to_fixed(&self, curve: NamedCurve) -> Option<Vec<u8>> {
        let width = curve.field_size();
        let mut out = Vec::with_capacity(2 * width);
        for scalar in [&self.r, &self.s] {
            let (sign, magnitude) = scalar.to_bytes_be();
            if sign != Sign::Plus || magnitude.len() > width {
                return None;
            }
            out.resize(out.len() + width - magnitude.len(), 0);
            out.extend_from_slice(&magnitude);
        }
        Some(out)
    }
}

/**
    Decode a base64 DER signature into its (r, s) components.
*/
pub fn decode_signature(encoded: &str) -> DecodeResult<SignatureComponents> {
    SignatureComponents::from_base64(encoded).inspect_err(|e| {
        tracing::debug!(stage = "signature", error = %e, "signature rejected");
    })
}

/**
    Decode a base64 signature in the given `format`.

    The fixed form has no self-describing length, so the curve of the key it
    will be checked against is needed to split it.
*/
pub fn decode_signature_as(
    encoded: &str,
    format: SignatureFormat,
    curve: NamedCurve,
) -> DecodeResult<SignatureComponents> {
    match format {
        SignatureFormat::Der => decode_signature(encoded),
        SignatureFormat::Fixed => decode_base64("signature", encoded)
            .and_then(|bytes| SignatureComponents::from_fixed(&bytes, curve))
            .inspect_err(|e| {
                tracing::debug!(stage = "signature", %format, error = %e, "signature rejected");
            }),
    }
}
