use crate::core_error::SessionError;
use crate::core_ftpcommand::utils::require_key;
use crate::core_network::close_data_connection;
use crate::core_storage::StorageError;
use crate::session::{ControlWriter, Session};
use log::{debug, info};
use tokio::io::AsyncWriteExt;
use url::Url;

/// Handles the RETR (Retrieve) FTP command.
///
/// Asks the backend for a signed download URL of the object, fetches it and
/// streams the body into the data connection chunk by chunk.
///
/// # Arguments
///
/// * `session` - The session the command was received on.
/// * `arg` - The path of the file to retrieve.
///
/// # Returns
///
/// Result<(), SessionError> indicating the success or failure of the operation.
pub async fn handle_retr_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    let key = require_key("RETR", arg)?;
    let mut data_stream = session.take_data_stream()?;
    session
        .send_response(b"150 Opening data connection.\r\n")
        .await?;

    let url = session.backend.fetch_url(&key)?;
    let mut response = fetch_object(&session.http, url, &key).await?;

    let mut sent = 0usize;
    while let Some(chunk) = response.chunk().await.map_err(StorageError::from)? {
        data_stream
            .write_all(&chunk)
            .await
            .map_err(SessionError::TransferAborted)?;
        sent += chunk.len();
    }
    close_data_connection(data_stream).await;

    info!("File sent successfully: {:?} ({} bytes)", key, sent);
    session
        .send_response(b"226 Transfer complete.\r\n")
        .await
}

async fn fetch_object(
    client: &reqwest::Client,
    url: Url,
    key: &str,
) -> Result<reqwest::Response, StorageError> {
    debug!("Fetching {:?} from {}", key, url.host_str().unwrap_or(""));
    let response = client.get(url).send().await?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(StorageError::NotFound(key.to_string()));
    }
    if !status.is_success() {
        return Err(StorageError::Service {
            status: status.as_u16(),
            message: format!("download of {} failed", key),
        });
    }
    Ok(response)
}
