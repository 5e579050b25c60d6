use std::io;

use thiserror::Error;

/// Errors produced by the bridge and the operations behind it.
///
/// Filesystem operations wrap the underlying `std::io::Error` unchanged;
/// there is no finer classification of not-found vs. permission vs.
/// collision. The remaining variants cover the launcher and the bridge
/// contract itself.
#[derive(Debug, Error)]
pub enum Error {
    /// A filesystem or OS call failed.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Every terminal emulator candidate failed to spawn.
    #[error("no suitable terminal emulator found")]
    NoTerminal,

    /// A platform user directory (home, config) could not be determined.
    #[error("could not determine user directory")]
    UserDirUnavailable,

    /// The requested operation is not on the bridge allow-list.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Arguments for a known operation failed to deserialize.
    #[error("invalid arguments for {op}: {source}")]
    InvalidArguments {
        op: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn invalid_arguments(op: &str, source: serde_json::Error) -> Self {
        Self::InvalidArguments {
            op: op.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
