//! Startup error type
//!
//! Request handling never fails outward (every outcome is an HTTP response),
//! so only process startup has a real error path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Listener, runtime, or log file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `server.host` / `server.port` do not form a socket address
    #[error("{0}")]
    Addr(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_and_source() {
        let err = ServerError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "port taken",
        ));
        assert_eq!(err.to_string(), "I/O error: port taken");
        assert!(err.source().is_some());

        let err = ServerError::Addr("Invalid address: x".to_string());
        assert_eq!(err.to_string(), "Invalid address: x");
        assert!(err.source().is_none());
    }
}
