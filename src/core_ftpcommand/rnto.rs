use crate::core_error::SessionError;
use crate::core_ftpcommand::utils::require_key;
use crate::session::{ControlWriter, Session};
use log::{info, warn};

/// Handles the RNTO (Rename To) FTP command.
///
/// Consumes the source remembered by RNFR and moves that object to the new key.
/// Without a preceding RNFR the command is rejected with 503 and the backend is
/// not called.
///
/// # Arguments
///
/// * `session` - The session the command was received on.
/// * `arg` - The new name of the file.
///
/// # Returns
///
/// Result<(), SessionError> indicating the success or failure of the operation.
pub async fn handle_rnto_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    let to = require_key("RNTO", arg)?;
    let from = session.take_rename_from()?;

    match session.backend.rename(&from, &to).await {
        Ok(()) => {
            info!("Renamed {:?} to {:?}", from, to);
            session.send_response(b"200 Rename successful.\r\n").await
        }
        Err(e) => {
            warn!("RNTO {:?} -> {:?} failed: {}", from, to, e);
            session
                .send_response(b"550 Failed to rename file.\r\n")
                .await
        }
    }
}
