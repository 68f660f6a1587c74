/*!
    Elliptic-curve primitives.

    Only verification lives here: SHA-256 digest of the payload, then the
    ECDSA check on P-256 or P-384 against a prehashed message.
*/

pub(crate) mod ecc;
