mod demo;
mod inspect_key;
mod verify;

pub use self::demo::DemoCommand;
pub use self::inspect_key::InspectKeyCommand;
pub use self::verify::VerifyCommand;
