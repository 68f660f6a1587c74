use std::sync::OnceLock;

use data_encoding::Encoding;

use crate::error::{DecodeError, DecodeResult};

/**
    Standard padded base64 (RFC 4648 §4), read leniently:

    - Line breaks (`\r`, `\n`) are skipped, so wrapped PEM-body style input
      decodes the same as a single line.
    - Non-zero bits left over in the final symbol are ignored, so `ZR==`
      decodes like `ZQ==`.

    Any other character outside the alphabet, or missing padding, is an
    error.
*/
fn lenient_base64() -> &'static Encoding {
    static BASE64: OnceLock<Encoding> = OnceLock::new();
    BASE64.get_or_init(|| {
        let mut specification = data_encoding::BASE64.specification();
        specification.check_trailing_bits = false;
        specification.ignore.push_str("\r\n");
        specification
            .encoding()
            .expect("standard base64 alphabet with ignored line breaks should be valid")
    })
}

pub(crate) fn decode_base64(what: &str, input: &str) -> DecodeResult<Vec<u8>> {
    lenient_base64()
        .decode(input.as_bytes())
        .map_err(|e| DecodeError::Encoding(format!("{what}: {e}")))
}
