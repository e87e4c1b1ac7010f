use crate::core_error::SessionError;
use crate::session::{ControlWriter, Session};
use log::debug;

/// Handles the TYPE FTP command.
///
/// Objects are always transferred as raw bytes, so every representation type is
/// acknowledged without changing anything.
pub async fn handle_type_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    debug!("TYPE {} acknowledged", arg.as_deref().unwrap_or(""));
    session.send_response(b"200 Type set.\r\n").await
}
