use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by this crate itself.
///
/// Errors returned by caller-supplied closures are never wrapped in this type;
/// they reach the caller unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("expected a JSON object to build a record, found {found}")]
    NotAMapping { found: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
