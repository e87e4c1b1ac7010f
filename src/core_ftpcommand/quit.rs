use crate::core_error::SessionError;
use crate::session::{ControlWriter, Session};
use log::{error, info};

/// Handles the QUIT FTP command.
///
/// This function sends a response indicating the service is closing the control connection.
/// The caller stops reading commands once it returns.
///
/// # Arguments
///
/// * `session` - The session the command was received on.
///
/// # Returns
///
/// Result<(), SessionError> indicating the success or failure of the operation.
pub async fn handle_quit_command<W: ControlWriter>(
    session: &mut Session<W>,
) -> Result<(), SessionError> {
    info!("Received QUIT command. Closing connection.");

    if let Err(e) = session.send_response(b"221 Goodbye.\r\n").await {
        error!("Failed to send QUIT response: {}", e);
        return Err(e);
    }

    Ok(())
}
