use crate::core_error::SessionError;
use crate::core_ftpcommand::utils::require_key;
use crate::session::{ControlWriter, Session};
use log::{info, warn};

/// Handles the DELE (Delete File) FTP command.
///
/// The path argument is reduced to its base name, which is the object key in the
/// bucket. Any backend failure, including a missing object, is reported with 550
/// and the session continues.
///
/// # Arguments
///
/// * `session` - The session the command was received on.
/// * `arg` - The path of the file to delete.
///
/// # Returns
///
/// Result<(), SessionError> indicating the success or failure of the operation.
pub async fn handle_dele_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    let key = require_key("DELE", arg)?;

    match session.backend.delete(&key).await {
        Ok(()) => {
            info!("Deleted object {:?}", key);
            session.send_response(b"200 File deleted.\r\n").await
        }
        Err(e) => {
            warn!("DELE {:?} failed: {}", key, e);
            session.send_response(b"550 Failed to delete file.\r\n").await
        }
    }
}
