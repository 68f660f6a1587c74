use spki::ObjectIdentifier;

/**
    `id-ecPublicKey`: the SubjectPublicKeyInfo algorithm for every
    elliptic-curve public key, regardless of curve.

    Ref: RFC 5480 §2.1.1.
*/
pub const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/**
    `secp224r1` (NIST P-224).
*/
pub const SECP224R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.33");

/**
    `secp256r1` (a.k.a. `prime256v1`, NIST P-256).
*/
pub const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/**
    `secp384r1` (NIST P-384).
*/
pub const SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/**
    `secp521r1` (NIST P-521).
*/
pub const SECP521R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// Key algorithms we recognize only to name them in error messages.
pub(crate) const KNOWN_KEY_ALGORITHMS: &[(ObjectIdentifier, &str)] = &[
    (
        ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1"),
        "rsaEncryption",
    ),
    (ObjectIdentifier::new_unwrap("1.2.840.10040.4.1"), "DSA"),
    (ObjectIdentifier::new_unwrap("1.3.101.110"), "X25519"),
    (ObjectIdentifier::new_unwrap("1.3.101.112"), "Ed25519"),
    (ObjectIdentifier::new_unwrap("1.3.101.113"), "Ed448"),
];

/// Curves we recognize only to name them in error messages.
pub(crate) const KNOWN_CURVES: &[(ObjectIdentifier, &str)] = &[
    (ObjectIdentifier::new_unwrap("1.3.132.0.10"), "secp256k1"),
    (
        ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.3"),
        "brainpoolP192r1",
    ),
    (
        ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.7"),
        "brainpoolP256r1",
    ),
];

/**
    Render an OID for an error message, prefixed with its common name when
    it is one we know.
*/
pub(crate) fn describe_oid(oid: &ObjectIdentifier, known: &[(ObjectIdentifier, &str)]) -> String {
    match known.iter().find(|(k, _)| k == oid) {
        Some((_, name)) => format!("{name} ({oid})"),
        None => oid.to_string(),
    }
}
