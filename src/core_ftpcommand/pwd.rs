// src/core_ftpcommand/pwd.rs
use crate::core_error::SessionError;
use crate::session::{ControlWriter, Session};

/// The bucket root is the only directory.
pub async fn handle_pwd_command<W: ControlWriter>(
    session: &mut Session<W>,
) -> Result<(), SessionError> {
    session
        .send_response(b"257 \"/\" is the current directory.\r\n")
        .await
}
