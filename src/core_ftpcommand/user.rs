use crate::core_error::SessionError;
use crate::session::{ControlWriter, Session};
use log::info;

/// Handles the USER FTP command.
///
/// The gateway serves a single user and does not check credentials, so the
/// client is logged in as soon as it names itself.
///
/// # Arguments
///
/// * `session` - The session the command was received on.
/// * `username` - The username provided by the client, if any.
///
/// # Returns
///
/// Result<(), SessionError> indicating the success or failure of the operation.
pub async fn handle_user_command<W: ControlWriter>(
    session: &mut Session<W>,
    username: Option<String>,
) -> Result<(), SessionError> {
    info!(
        "Received USER command with username: {}",
        username.as_deref().unwrap_or("")
    );
    session
        .send_response(b"230 User logged in, proceed.\r\n")
        .await
}
