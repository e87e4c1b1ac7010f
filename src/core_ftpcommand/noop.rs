use crate::core_error::SessionError;
use crate::session::{ControlWriter, Session};

pub async fn handle_noop_command<W: ControlWriter>(
    session: &mut Session<W>,
) -> Result<(), SessionError> {
    session.send_response(b"200 OK, n00p n00p !\r\n").await
}
