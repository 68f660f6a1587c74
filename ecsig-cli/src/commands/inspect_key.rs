use anyhow::{Context, Result};
use clap::Args;
use ecsig::PublicKey;

/**
    Decode a public key and print its curve and coordinates.
*/
#[derive(Args)]
pub struct InspectKeyCommand {
    /// Base64-encoded SubjectPublicKeyInfo.
    pub base64: String,
}

impl InspectKeyCommand {
    pub fn run(self) -> Result<()> {
        let key = ecsig::decode_public_key(&self.base64).context("failed to decode public key")?;

        for line in describe(&key) {
            println!("{line}");
        }

        Ok(())
    }
}

fn describe(key: &PublicKey) -> Vec<String> {
    vec![
        format!("Curve:  {}", key.curve()),
        format!("OID:    {}", key.curve().to_oid()),
        format!("X:      {}", hex::encode(key.x())),
        format!("Y:      {}", hex::encode(key.y())),
    ]
}
