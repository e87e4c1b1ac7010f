use crate::core_error::SessionError;
use crate::session::{ControlWriter, Session};

/// Handles the PASS FTP command. Any password is accepted.
pub async fn handle_pass_command<W: ControlWriter>(
    session: &mut Session<W>,
) -> Result<(), SessionError> {
    session
        .send_response(b"230 User logged in, proceed.\r\n")
        .await
}
