pub mod network;
pub mod pasv;
pub mod port;

use log::debug;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Closes the data connection of a finished transfer.
///
/// The stream is consumed, so each data connection is closed exactly once.
pub async fn close_data_connection(mut stream: TcpStream) {
    if let Err(e) = stream.shutdown().await {
        debug!("Data connection shutdown failed: {}", e);
    }
}
