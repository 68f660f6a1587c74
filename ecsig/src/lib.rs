#![allow(clippy::doc_overindented_list_items)]

mod constants;
mod crypto;
mod encoding;
mod error;
mod public_key;
mod signature;
mod types;
mod verify;

pub use self::constants::{ID_EC_PUBLIC_KEY, SECP224R1, SECP256R1, SECP384R1, SECP521R1};
pub use self::error::{DecodeError, DecodeResult, ParseError};
pub use self::public_key::{PublicKey, decode_public_key};
pub use self::signature::{SignatureComponents, decode_signature, decode_signature_as};
pub use self::types::{NamedCurve, SignatureFormat};
pub use self::verify::{Verifier, is_valid_signature, is_valid_signature_with, verify};

// Callers building `SignatureComponents` by hand need the same integer type
pub use num_bigint::BigInt;
