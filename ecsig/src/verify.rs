/*!
    SHA256withECDSA verification.

    Decoding and verification are separate on purpose: anything that fails
    to decode is a [`DecodeError`], anything that decodes is answered with a
    plain `bool`. A forged signature and a well-formed signature over some
    other payload are indistinguishable to the caller.
*/

use crate::crypto::ecc::ecdsa_sha256_verify;
use crate::error::DecodeResult;
use crate::public_key::{PublicKey, decode_public_key};
use crate::signature::{SignatureComponents, decode_signature_as};
use crate::types::SignatureFormat;

/**
    Check `sig` over SHA-256(`payload`) against `key`.

    Returns `true` only if the ECDSA equation holds exactly. Components that
    are zero, negative, or not below the curve order give `false`.
*/
pub fn verify(key: &PublicKey, payload: &[u8], sig: &SignatureComponents) -> bool {
    let curve = key.curve();
    let valid = match sig.to_fixed(curve) {
        Some(fixed) => ecdsa_sha256_verify(key.curve_key(), payload, &fixed),
        None => false,
    };
    tracing::trace!(%curve, valid, "signature checked");
    valid
}

/**
    Verify a base64 DER signature over `payload` with a base64
    SubjectPublicKeyInfo public key.

    Returns `Ok(true)` / `Ok(false)` for well-formed inputs and `Err` if
    either the key or the signature cannot be decoded. The key is decoded
    first, so when both are malformed the key's error is reported.
*/
pub fn is_valid_signature(public_key: &str, payload: &str, signature: &str) -> DecodeResult<bool> {
    is_valid_signature_with(public_key, payload.as_bytes(), signature, SignatureFormat::Der)
}

/**
    Like [`is_valid_signature`], with a byte payload and a chosen signature
    format.
*/
pub fn is_valid_signature_with(
    public_key: &str,
    payload: &[u8],
    signature: &str,
    format: SignatureFormat,
) -> DecodeResult<bool> {
    let key = decode_public_key(public_key)?;
    let sig = decode_signature_as(signature, format, key.curve())?;
    Ok(verify(&key, payload, &sig))
}

/**
    Stateless verification handle carrying the expected signature format.

    Holds no key material and caches nothing; it only saves callers from
    threading the format through every call.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verifier {
    format: SignatureFormat,
}

impl Verifier {
    pub const fn new(format: SignatureFormat) -> Self {
        Self { format }
    }

    pub const fn format(&self) -> SignatureFormat {
        self.format
    }

    pub fn verify(&self, public_key: &str, payload: &[u8], signature: &str) -> DecodeResult<bool> {
        is_valid_signature_with(public_key, payload, signature, self.format)
    }
}
