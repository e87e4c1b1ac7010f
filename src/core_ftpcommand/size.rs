// core_ftpcommand/size.rs

use crate::core_error::SessionError;
use crate::core_ftpcommand::utils::require_argument;
use crate::session::{ControlWriter, Session};
use log::{info, warn};

/// Handles the SIZE (File Size) FTP command.
///
/// Clients send the path as shown by PWD, so one leading '/' is stripped to get
/// the object key before asking the backend for it.
pub async fn handle_size_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    let arg = require_argument("SIZE", arg)?;
    let key = arg.strip_prefix('/').unwrap_or(&arg);

    match session.backend.stat(key).await {
        Ok(entry) => {
            info!("File size for {:?} is {}", key, entry.size);
            session
                .send_response(format!("213 {}\r\n", entry.size).as_bytes())
                .await
        }
        Err(e) => {
            if e.is_not_found() {
                info!("SIZE {:?}: no such object", key);
            } else {
                warn!("SIZE {:?} failed: {}", key, e);
            }
            session
                .send_response(b"550 Could not get file size.\r\n")
                .await
        }
    }
}
