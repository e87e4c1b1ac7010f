use crate::core_error::SessionError;
use crate::core_ftpcommand::utils::require_argument;
use crate::session::{ControlWriter, Session};
use log::warn;

/// Handles the CWD FTP command. Only the root directory exists.
pub async fn handle_cwd_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    let dir = require_argument("CWD", arg)?;

    if dir == "/" {
        session
            .send_response(b"200 Directory successfully changed.\r\n")
            .await
    } else {
        warn!("CWD to {:?} refused: only / exists", dir);
        session
            .send_response(b"550 Failed to change directory.\r\n")
            .await
    }
}
