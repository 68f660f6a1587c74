use sha2::{Digest, Sha256};
use signature::hazmat::PrehashVerifier;

use crate::public_key::CurveKey;

/**
    ECDSA-SHA256 verification against a fixed-width `r || s` signature.

    - Digest: SHA-256(message), computed exactly once here.
    - The digest is passed to the curve as a prehash, left-padded with zeros
      to the field width when it is shorter (P-384, P-521). Padding keeps the
      integer value, and bits2field refuses a prehash under half the field
      width, which a bare 32-byte digest is on P-521. On P-224 the digest is
      longer than the field and bits2field keeps its leftmost 224 bits.
    - `Signature::from_slice` rejects r or s equal to zero or not below the
      curve order.

    Every failure collapses into `false`. Callers only reach this with a
    structurally valid key and signature, so a `false` here always means
    "does not verify", never "could not parse".
*/
pub(crate) fn ecdsa_sha256_verify(key: &CurveKey, message: &[u8], fixed_sig: &[u8]) -> bool {
    let digest = Sha256::digest(message);
    let prehash = pad_to_field(&digest, key.curve().field_size());
    verify_prehash(key, &prehash, fixed_sig).is_ok()
}

fn pad_to_field(digest: &[u8], field_size: usize) -> Vec<u8> {
    let mut prehash = vec![0u8; field_size.saturating_sub(digest.len())];
    prehash.extend_from_slice(digest);
    prehash
}

fn verify_prehash(key: &CurveKey, prehash: &[u8], fixed_sig: &[u8]) -> Result<(), ecdsa::Error> {
    match key {
        CurveKey::P224(vk) => {
            let sig = p224::ecdsa::Signature::from_slice(fixed_sig)?;
            vk.verify_prehash(prehash, &sig)
        }
        CurveKey::P256(vk) => {
            let sig = p256::ecdsa::Signature::from_slice(fixed_sig)?;
            vk.verify_prehash(prehash, &sig)
        }
        CurveKey::P384(vk) => {
            let sig = p384::ecdsa::Signature::from_slice(fixed_sig)?;
            vk.verify_prehash(prehash, &sig)
        }
        CurveKey::P521(vk) => {
            let sig = p521::ecdsa::Signature::from_slice(fixed_sig)?;
            vk.verify_prehash(prehash, &sig)
        }
    }
}
