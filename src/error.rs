//! Error type for the fallible edges: config files, the terminal, JSON.
//!
//! The calculator itself never fails; bad input is absorbed by the
//! state holder.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Config file exists but could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for the expected shape.
    #[error("Invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Terminal setup, drawing, or event reading failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_name_the_path() {
        let err = Error::ConfigRead {
            path: PathBuf::from("/etc/roi-calc/config.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/roi-calc/config.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn io_errors_convert_to_terminal() {
        let io = std::io::Error::other("no tty");
        let err: Error = io.into();
        assert!(matches!(err, Error::Terminal(_)));
        assert_eq!(err.to_string(), "Terminal error: no tty");
    }
}
