use crate::core_error::SessionError;
use crate::core_storage::StorageBackend;
use crate::Config;
use log::debug;
use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

/// Anything the session can send replies to.
pub trait ControlWriter: AsyncWrite + Unpin + Send {}

impl<T: AsyncWrite + Unpin + Send> ControlWriter for T {}

/// State of one control connection.
///
/// `rename_from` is set by RNFR and taken by the next RNTO. `data_stream` is set by
/// PORT, PASV or EPSV and taken by the next LIST, RETR or STOR, which closes it.
/// `http` is the client shared by every session, used by RETR downloads.
#[derive(Debug)]
pub struct Session<W> {
    writer: W,
    pub config: Arc<Config>,
    pub backend: Arc<dyn StorageBackend>,
    pub http: reqwest::Client,
    pub rename_from: Option<String>,
    pub data_stream: Option<TcpStream>,
}

impl<W: ControlWriter> Session<W> {
    pub fn new(
        writer: W,
        config: Arc<Config>,
        backend: Arc<dyn StorageBackend>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            writer,
            config,
            backend,
            http,
            rename_from: None,
            data_stream: None,
        }
    }

    /// Sends a reply on the control connection.
    pub async fn send_response(&mut self, message: &[u8]) -> Result<(), SessionError> {
        self.writer.write_all(message).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Installs a freshly established data connection, closing any unused one.
    pub fn set_data_stream(&mut self, stream: TcpStream) {
        if self.data_stream.replace(stream).is_some() {
            debug!("Replaced an unused data connection");
        }
    }

    pub fn close_data_stream(&mut self) {
        if self.data_stream.take().is_some() {
            debug!("Closed an unused data connection");
        }
    }

    pub fn take_data_stream(&mut self) -> Result<TcpStream, SessionError> {
        self.data_stream.take().ok_or(SessionError::NoDataConnection)
    }

    pub fn take_rename_from(&mut self) -> Result<String, SessionError> {
        self.rename_from.take().ok_or(SessionError::BadSequence)
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_storage::memory::MemoryBackend;
    use tokio::net::TcpListener;

    fn new_session() -> Session<Vec<u8>> {
        crate::test_support::new_session(Arc::new(MemoryBackend::new()))
    }

    #[tokio::test]
    async fn test_send_response_writes_bytes() {
        let mut session = new_session();
        session.send_response(b"200 Command okay.\r\n").await.unwrap();
        session.send_response(b"257 \"/\"\r\n").await.unwrap();
        assert_eq!(session.writer(), b"200 Command okay.\r\n257 \"/\"\r\n");
    }

    #[test]
    fn test_rename_marker_is_consumed_once() {
        let mut session = new_session();
        assert!(matches!(
            session.take_rename_from(),
            Err(SessionError::BadSequence)
        ));

        session.rename_from = Some("a.txt".to_string());
        assert_eq!(session.take_rename_from().unwrap(), "a.txt");
        assert!(session.rename_from.is_none());
        assert!(session.take_rename_from().is_err());
    }

    #[tokio::test]
    async fn test_data_stream_is_taken_once() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (client, _) = tokio::join!(TcpStream::connect(addr), listener.accept());

        let mut session = new_session();
        assert!(matches!(
            session.take_data_stream(),
            Err(SessionError::NoDataConnection)
        ));

        session.set_data_stream(client.unwrap());
        assert!(session.take_data_stream().is_ok());
        assert!(session.data_stream.is_none());
    }
}
