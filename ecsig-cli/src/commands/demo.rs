use anyhow::{Context, Result};
use clap::Args;

/// P-256 SubjectPublicKeyInfo of the example key pair.
pub(crate) const DEMO_PUBLIC_KEY: &str = "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEwjFRAr6bixyM/pTibKQXp9KHYKewTh/dCH4OtPjMgk0vkKBAR4kGR8H/JLrtAvb3RMYj+OAJG4NoFNxRRLzlpA==";

pub(crate) const DEMO_PAYLOAD: &str = "message";

/// DER signature of `DEMO_PAYLOAD` by the example key.
pub(crate) const DEMO_SIGNATURE: &str = "MEQCIFKZdyccqHCQNuMMjbQvGh14pY2/LhEMyOX33d1aFvUuAiBhSzZUVClQ7sRBAlEd+qHlvBrGNHjXcJgutvg4xHCYfQ==";

/**
    Verify a built-in P-256 example, optionally against a different payload.
*/
#[derive(Args)]
pub struct DemoCommand {
    /// Payload to check the example signature against.
    #[arg(short, long, default_value = DEMO_PAYLOAD)]
    pub payload: String,
}

impl DemoCommand {
    pub fn run(self) -> Result<bool> {
        eprintln!("Public key: {DEMO_PUBLIC_KEY}");
        eprintln!("Signature:  {DEMO_SIGNATURE}");
        eprintln!("Payload:    {:?}", self.payload);

        let valid = ecsig::is_valid_signature(DEMO_PUBLIC_KEY, &self.payload, DEMO_SIGNATURE)
            .context("built-in example failed to decode")?;

        println!("{valid}");
        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_verifies() {
        let cmd = DemoCommand {
            payload: DEMO_PAYLOAD.to_owned(),
        };
        assert!(cmd.run().unwrap());
    }

    #[test]
    fn demo_with_other_payload_does_not_verify() {
        let cmd = DemoCommand {
            payload: "Message".to_owned(),
        };
        assert!(!cmd.run().unwrap());
    }
}
