//! Ambient error types for the docquery crates.
//!
//! The endpoint-level taxonomy lives in [`crate::outcome`] as tagged
//! variants — nothing there is a crash condition, every failure degrades to
//! a notification or an assistant-role error message. These types cover the
//! plumbing that can genuinely fail: configuration and local persistence.

use thiserror::Error;

/// The top-level error type for docquery plumbing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential storage error: {0}")]
    Credentials(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_message() {
        let err = Error::Config("base_url must not be empty".into());
        assert!(err.to_string().contains("base_url"));
    }
}
