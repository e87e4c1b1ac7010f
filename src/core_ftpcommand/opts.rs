use crate::core_error::SessionError;
use crate::session::{ControlWriter, Session};
use log::debug;

// Clients send OPTS UTF8 ON right after login; nothing to configure.
pub async fn handle_opts_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    debug!("OPTS {} acknowledged", arg.as_deref().unwrap_or(""));
    session.send_response(b"200 Command okay.\r\n").await
}
