pub mod errors;
pub mod generator;
pub mod secret;

pub use errors::TokenError;
pub use generator::TokenGenerator;
pub use secret::SessionSecret;
