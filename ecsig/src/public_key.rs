/*!
    Public key decoding.

    Accepts a base64-encoded X.509 SubjectPublicKeyInfo (RFC 5280 §4.1.2.7)
    carrying an elliptic-curve key (RFC 5480):

      SubjectPublicKeyInfo ::= SEQUENCE {
        algorithm         AlgorithmIdentifier,   -- id-ecPublicKey
                                                 -- parameters: namedCurve OID
        subjectPublicKey  BIT STRING             -- 0x04 || X || Y
      }

    The whole input must be consumed by the record; the point must be in
    uncompressed form and lie on the named curve.
*/

use core::fmt;

use der::Decode;
use spki::SubjectPublicKeyInfoRef;

use crate::constants::{ID_EC_PUBLIC_KEY, KNOWN_CURVES, KNOWN_KEY_ALGORITHMS, describe_oid};
use crate::encoding::decode_base64;
use crate::error::{DecodeError, DecodeResult};
use crate::types::NamedCurve;

/// SEC1 tag byte for an uncompressed point.
const SEC1_UNCOMPRESSED: u8 = 0x04;

/**
    An elliptic-curve public key: a named curve plus a validated point on it.
*/
#[derive(Debug, Clone)]
pub struct PublicKey {
    curve: NamedCurve,
    sec1: Vec<u8>,
    key: CurveKey,
}

// The SEC1 bytes determine the verifying key
impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.sec1 == other.sec1
    }
}

impl Eq for PublicKey {}

#[derive(Clone)]
pub(crate) enum CurveKey {
    P224(p224::ecdsa::VerifyingKey),
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
    P521(p521::ecdsa::VerifyingKey),
}

impl CurveKey {
    pub(crate) fn curve(&self) -> NamedCurve {
        match self {
            Self::P224(_) => NamedCurve::P224,
            Self::P256(_) => NamedCurve::P256,
            Self::P384(_) => NamedCurve::P384,
            Self::P521(_) => NamedCurve::P521,
        }
    }
}

impl fmt::Debug for CurveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurveKey({})", self.curve())
    }
}

impl PublicKey {
    /**
        Parse a base64-encoded SubjectPublicKeyInfo.
    */
    pub fn from_base64(encoded: &str) -> DecodeResult<Self> {
        let bytes = decode_base64("public key", encoded)?;
        Self::from_der(&bytes)
    }

    /**
        Parse a DER-encoded SubjectPublicKeyInfo.
    */
    pub fn from_der(input: &[u8]) -> DecodeResult<Self> {
        let spki = SubjectPublicKeyInfoRef::from_der(input)
            .map_err(|e| DecodeError::structural(format!("SubjectPublicKeyInfo: {e}")))?;

        let algorithm = &spki.algorithm;
        if algorithm.oid != ID_EC_PUBLIC_KEY {
            return Err(DecodeError::UnsupportedKeyType(describe_oid(
                &algorithm.oid,
                KNOWN_KEY_ALGORITHMS,
            )));
        }

        // Explicit (non-named) curve parameters are rejected here too
        let curve_oid = algorithm
            .parameters_oid()
            .map_err(|e| DecodeError::structural(format!("EC parameters: {e}")))?;
        let curve = NamedCurve::from_oid(&curve_oid)
            .ok_or_else(|| DecodeError::UnsupportedCurve(describe_oid(&curve_oid, KNOWN_CURVES)))?;

        let point = spki
            .subject_public_key
            .as_bytes()
            .ok_or_else(|| DecodeError::structural("public key BIT STRING has unused bits"))?;

        Self::from_sec1_point(curve, point)
    }

    /**
        Build a key from an uncompressed SEC1 point on `curve`.
    */
    pub fn from_sec1_point(curve: NamedCurve, point: &[u8]) -> DecodeResult<Self> {
        let expected = 1 + 2 * curve.field_size();
        if point.first() != Some(&SEC1_UNCOMPRESSED) {
            return Err(DecodeError::structural(format!(
                "{curve} point is not in uncompressed form"
            )));
        }
        if point.len() != expected {
            return Err(DecodeError::structural(format!(
                "{curve} point is {} bytes, expected {expected}",
                point.len()
            )));
        }

        let not_on_curve =
            |_: ecdsa::Error| DecodeError::structural(format!("{curve} point is not on the curve"));
        let key = match curve {
            NamedCurve::P224 => p224::ecdsa::VerifyingKey::from_sec1_bytes(point)
                .map(CurveKey::P224)
                .map_err(not_on_curve)?,
            NamedCurve::P256 => p256::ecdsa::VerifyingKey::from_sec1_bytes(point)
                .map(CurveKey::P256)
                .map_err(not_on_curve)?,
            NamedCurve::P384 => p384::ecdsa::VerifyingKey::from_sec1_bytes(point)
                .map(CurveKey::P384)
                .map_err(not_on_curve)?,
            NamedCurve::P521 => p521::ecdsa::VerifyingKey::from_sec1_bytes(point)
                .map(CurveKey::P521)
                .map_err(not_on_curve)?,
        };

        Ok(Self {
            curve,
            sec1: point.to_vec(),
            key,
        })
    }

    pub fn curve(&self) -> NamedCurve {
        self.curve
    }

    /// Affine X coordinate, big-endian, field-size bytes.
    pub fn x(&self) -> &[u8] {
        &self.sec1[1..1 + self.curve.field_size()]
    }

    /// Affine Y coordinate, big-endian, field-size bytes.
    pub fn y(&self) -> &[u8] {
        &self.sec1[1 + self.curve.field_size()..]
    }

    /// Uncompressed SEC1 encoding: `0x04 || X || Y`.
    pub fn to_sec1_bytes(&self) -> &[u8] {
        &self.sec1
    }

    pub(crate) fn curve_key(&self) -> &CurveKey {
        &self.key
    }
}

/**
    Decode a base64 SubjectPublicKeyInfo into an elliptic-curve public key.
*/
pub fn decode_public_key(encoded: &str) -> DecodeResult<PublicKey> {
    PublicKey::from_base64(encoded).inspect_err(|e| {
        tracing::debug!(stage = "public_key", error = %e, "public key rejected");
    })
}
