use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{DemoCommand, InspectKeyCommand, VerifyCommand};

const EXIT_MISMATCH: u8 = 1;

/**
    SHA256withECDSA signature verification tool.
*/
#[derive(Parser)]
#[command(name = "ecsig")]
pub struct Cli {
    /// Log decode failures and verification details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify a signature over a payload.
    Verify(VerifyCommand),
    /// Decode a public key and print its curve and coordinates.
    InspectKey(InspectKeyCommand),
    /// Verify a built-in P-256 example.
    Demo(DemoCommand),
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        match self.command {
            Command::Verify(cmd) => cmd.run().map(exit_code),
            Command::InspectKey(cmd) => cmd.run().map(|()| ExitCode::SUCCESS),
            Command::Demo(cmd) => cmd.run().map(exit_code),
        }
    }
}

/// 0 when the signature verifies, 1 when it decodes but does not match.
fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_MISMATCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verify_with_inline_payload() {
        let cli = Cli::try_parse_from([
            "ecsig", "verify", "-k", "KEY", "-s", "SIG", "-p", "message", "--format", "fixed",
        ])
        .unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Command::Verify(cmd) => {
                assert_eq!(cmd.public_key, "KEY");
                assert_eq!(cmd.signature, "SIG");
                assert_eq!(cmd.payload.as_deref(), Some("message"));
                assert_eq!(cmd.format, ecsig::SignatureFormat::Fixed);
            }
            _ => panic!("expected verify"),
        }
    }

    #[test]
    fn verify_requires_exactly_one_payload_source() {
        let neither = Cli::try_parse_from(["ecsig", "verify", "-k", "K", "-s", "S"]);
        assert!(neither.is_err());

        let both = Cli::try_parse_from([
            "ecsig", "verify", "-k", "K", "-s", "S", "-p", "x", "--payload-file", "f",
        ]);
        assert!(both.is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let res = Cli::try_parse_from([
            "ecsig", "verify", "-k", "K", "-s", "S", "-p", "x", "--format", "pem",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["ecsig", "demo", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
