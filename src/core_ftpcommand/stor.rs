use crate::core_error::SessionError;
use crate::core_ftpcommand::utils::require_key;
use crate::core_network::close_data_connection;
use crate::session::{ControlWriter, Session};
use log::info;
use tokio::io::AsyncReadExt;

/// Handles the STOR (Store File) FTP command.
///
/// Reads the data connection until the client closes it, then uploads the bytes
/// under the base name of the argument. The object is written in one request, so
/// the whole upload is held in memory.
///
/// # Arguments
///
/// * `session` - The session the command was received on.
/// * `arg` - The path of the file to be stored.
///
/// # Returns
///
/// Result<(), SessionError> indicating the success or failure of the operation.
pub async fn handle_stor_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    let key = require_key("STOR", arg)?;
    let mut data_stream = session.take_data_stream()?;
    session
        .send_response(b"150 Ok to send data.\r\n")
        .await?;

    let mut buffer = Vec::new();
    data_stream
        .read_to_end(&mut buffer)
        .await
        .map_err(SessionError::TransferAborted)?;

    let length = buffer.len();
    session.backend.put(&key, buffer).await?;
    close_data_connection(data_stream).await;

    info!("File stored successfully: {:?} ({} bytes)", key, length);
    session
        .send_response(b"226 Transfer complete.\r\n")
        .await
}
