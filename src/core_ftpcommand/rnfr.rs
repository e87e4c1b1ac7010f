use crate::core_error::SessionError;
use crate::core_ftpcommand::utils::require_key;
use crate::session::{ControlWriter, Session};
use log::debug;

/// Handles the RNFR (Rename From) FTP command.
///
/// Remembers the object to be renamed until the next RNTO. The object is not
/// looked up here; a missing source surfaces when RNTO performs the move.
pub async fn handle_rnfr_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    let key = require_key("RNFR", arg)?;
    debug!("Rename source set to {:?}", key);

    session.rename_from = Some(key);
    session.send_response(b"350 Ready for RNTO.\r\n").await
}
