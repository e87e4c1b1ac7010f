// Errors raised while handling one FTP command
use crate::core_storage::StorageError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// The control connection is unusable; the session ends.
    #[error("Control connection failure: {0}")]
    Transport(#[from] io::Error),

    #[error("Missing or malformed argument: {0}")]
    Syntax(String),

    #[error("RNTO received without a preceding RNFR")]
    BadSequence,

    #[error("No data connection established")]
    NoDataConnection,

    #[error("Failed to open data connection: {0}")]
    DataConnection(io::Error),

    #[error("Data connection failed during transfer: {0}")]
    TransferAborted(io::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, SessionError::Transport(_))
    }

    pub fn to_ftp_response(&self) -> String {
        match self {
            SessionError::Transport(_) => {
                "421 Service not available, closing control connection.".to_string()
            }
            SessionError::Syntax(_) => "501 Syntax error in parameters or arguments.".to_string(),
            SessionError::BadSequence => "503 Bad sequence of commands.".to_string(),
            SessionError::NoDataConnection => "425 Use PORT or PASV first.".to_string(),
            SessionError::DataConnection(_) => "425 Can't open data connection.".to_string(),
            SessionError::TransferAborted(_) => {
                "426 Connection closed; transfer aborted.".to_string()
            }
            SessionError::Storage(e) => e.to_ftp_response(),
        }
    }
}
