use crate::core_error::SessionError;
use crate::core_ftpcommand::utils::format_list_line;
use crate::core_network::close_data_connection;
use crate::session::{ControlWriter, Session};
use log::info;
use tokio::io::AsyncWriteExt;

/// Handles the LIST FTP command.
///
/// Sends one line per object of the bucket over the data connection established
/// by the preceding PORT, PASV or EPSV, then closes it. Any argument is ignored
/// since the root is the only directory.
///
/// # Arguments
///
/// * `session` - The session the command was received on.
///
/// # Returns
///
/// Result<(), SessionError> indicating the success or failure of the operation.
pub async fn handle_list_command<W: ControlWriter>(
    session: &mut Session<W>,
) -> Result<(), SessionError> {
    let mut data_stream = session.take_data_stream()?;
    session
        .send_response(b"150 Here comes the directory listing.\r\n")
        .await?;

    let entries = session.backend.list(session.config.server.list_limit).await?;
    let listing: String = entries.iter().map(format_list_line).collect();

    data_stream
        .write_all(listing.as_bytes())
        .await
        .map_err(SessionError::TransferAborted)?;
    close_data_connection(data_stream).await;

    info!("Sent directory listing of {} entries", entries.len());
    session.send_response(b"226 Directory send OK.\r\n").await
}
