use core::fmt;
use core::str::FromStr;

use spki::ObjectIdentifier;

use crate::constants::{SECP224R1, SECP256R1, SECP384R1, SECP521R1};
use crate::error::ParseError;

/**
    Named elliptic curves a public key may be bound to.

    The NIST prime curves from FIPS 186-4. Keys on any other curve fail to decode with
    [`DecodeError::UnsupportedCurve`](crate::DecodeError::UnsupportedCurve).
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NamedCurve {
    P224,
    P256,
    P384,
    P521,
}

impl NamedCurve {
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        [
            (SECP224R1, Self::P224),
            (SECP256R1, Self::P256),
            (SECP384R1, Self::P384),
            (SECP521R1, Self::P521),
        ]
        .into_iter()
        .find(|(known, _)| known == oid)
        .map(|(_, curve)| curve)
    }

    pub const fn to_oid(self) -> ObjectIdentifier {
        match self {
            Self::P224 => SECP224R1,
            Self::P256 => SECP256R1,
            Self::P384 => SECP384R1,
            Self::P521 => SECP521R1,
        }
    }

    /**
        Width in bytes of a field element (and of each signature scalar in
        the fixed `r || s` format).
    */
    pub const fn field_size(self) -> usize {
        match self {
            Self::P224 => 28,
            Self::P256 => 32,
            Self::P384 => 48,
            Self::P521 => 66,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        [
            ("p224", Self::P224),
            ("p-224", Self::P224),
            ("secp224r1", Self::P224),
            ("p256", Self::P256),
            ("p-256", Self::P256),
            ("secp256r1", Self::P256),
            ("prime256v1", Self::P256),
            ("p384", Self::P384),
            ("p-384", Self::P384),
            ("secp384r1", Self::P384),
            ("p521", Self::P521),
            ("p-521", Self::P521),
            ("secp521r1", Self::P521),
        ]
        .into_iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|(_, curve)| curve)
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::P224 => "P-224",
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        }
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for NamedCurve {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "curve",
            value: s.to_owned(),
        })
    }
}

/**
    Wire format of an encoded signature.

    - `Der`: ASN.1 `SEQUENCE { r INTEGER, s INTEGER }`, as produced by
      OpenSSL, Java's `SHA256withECDSA` and Node's `crypto.sign`.
    - `Fixed`: IEEE P1363 `r || s`, each scalar left-padded to the curve's
      field size, as produced by WebCrypto's `crypto.subtle.sign`.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SignatureFormat {
    #[default]
    Der,
    Fixed,
}

impl SignatureFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "der" | "asn1" => Some(Self::Der),
            "fixed" | "p1363" | "raw" => Some(Self::Fixed),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Der => "der",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for SignatureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for SignatureFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "signature format",
            value: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_names_parse_case_insensitively() {
        assert_eq!("P-256".parse::<NamedCurve>().unwrap(), NamedCurve::P256);
        assert_eq!("prime256v1".parse::<NamedCurve>().unwrap(), NamedCurve::P256);
        assert_eq!(" SECP384R1 ".parse::<NamedCurve>().unwrap(), NamedCurve::P384);
        assert_eq!("p-224".parse::<NamedCurve>().unwrap(), NamedCurve::P224);
        assert_eq!("secp521r1".parse::<NamedCurve>().unwrap(), NamedCurve::P521);
    }

    #[test]
    fn unknown_curve_name_is_parse_error() {
        let err = "secp256k1".parse::<NamedCurve>().unwrap_err();
        assert_eq!(err.kind, "curve");
        assert_eq!(err.to_string(), "unknown curve 'secp256k1'");
    }

    #[test]
    fn curve_oid_round_trips() {
        for curve in [NamedCurve::P224, NamedCurve::P256, NamedCurve::P384, NamedCurve::P521] {
            assert_eq!(NamedCurve::from_oid(&curve.to_oid()), Some(curve));
        }
        assert_eq!(NamedCurve::from_oid(&crate::constants::ID_EC_PUBLIC_KEY), None);
    }

    #[test]
    fn field_sizes_cover_odd_widths() {
        assert_eq!(NamedCurve::P521.field_size(), 66);
        assert_eq!(NamedCurve::P521.to_string(), "P-521");
        assert_eq!(NamedCurve::P224.field_size(), 28);
    }

    #[test]
    fn signature_format_defaults_to_der() {
        assert_eq!(SignatureFormat::default(), SignatureFormat::Der);
        assert_eq!("P1363".parse::<SignatureFormat>().unwrap(), SignatureFormat::Fixed);
        assert!("pem".parse::<SignatureFormat>().is_err());
    }
}
