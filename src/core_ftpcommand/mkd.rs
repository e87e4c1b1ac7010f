use crate::core_error::SessionError;
use crate::session::{ControlWriter, Session};
use log::info;

/// Handles the MKD (Make Directory) FTP command.
///
/// The bucket is flat, so directories can never be created.
pub async fn handle_mkd_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    info!(
        "Refusing MKD command with argument: {}",
        arg.as_deref().unwrap_or("")
    );
    session.send_response(b"550 Permission denied.\r\n").await
}
