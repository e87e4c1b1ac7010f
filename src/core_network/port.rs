use crate::core_error::SessionError;
use crate::core_ftpcommand::utils::require_argument;
use crate::session::{ControlWriter, Session};
use log::{error, info};
use std::io;
use std::net::{Ipv4Addr, SocketAddrV4};
use tokio::net::TcpStream;

/// Parses the `h1,h2,h3,h4,p1,p2` argument of PORT.
pub fn parse_port_argument(arg: &str) -> Result<SocketAddrV4, SessionError> {
    let parts: Vec<&str> = arg.split(',').map(str::trim).collect();
    if parts.len() != 6 {
        return Err(SessionError::Syntax(format!("PORT {}: expected 6 fields", arg)));
    }

    let bytes = parts
        .iter()
        .map(|x| x.parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|e| SessionError::Syntax(format!("PORT {}: {}", arg, e)))?;

    let ip = Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]);
    let port = u16::from(bytes[4]) * 256 + u16::from(bytes[5]);
    Ok(SocketAddrV4::new(ip, port))
}

/// Sets up an active mode (PORT) connection.
pub async fn setup_port_connection(addr: SocketAddrV4) -> io::Result<TcpStream> {
    TcpStream::connect(addr).await
}

/// Handles the PORT (Active Mode) FTP command.
///
/// The server dials the client before acknowledging, so the data connection is
/// ready when the next transfer command arrives. A failed dial is answered with
/// 425 and the session goes on.
pub async fn handle_port_command<W: ControlWriter>(
    session: &mut Session<W>,
    arg: Option<String>,
) -> Result<(), SessionError> {
    let arg = require_argument("PORT", arg)?;
    let addr = parse_port_argument(&arg)?;
    info!(
        "Received PORT command with IP: {} and port: {}",
        addr.ip(),
        addr.port()
    );

    session.close_data_stream();
    let data_stream = setup_port_connection(addr).await.map_err(|e| {
        error!("Failed to connect to client {}: {}", addr, e);
        SessionError::DataConnection(e)
    })?;

    info!("Connection established with {}", addr);
    session.set_data_stream(data_stream);
    session
        .send_response(b"200 PORT command successful.\r\n")
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_storage::memory::MemoryBackend;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    fn new_session() -> Session<Vec<u8>> {
        crate::test_support::new_session(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn test_parse_port_argument() {
        let addr = parse_port_argument("127,0,0,1,4,1").unwrap();
        assert_eq!(*addr.ip(), Ipv4Addr::new(127, 0, 0, 1));
        assert_eq!(addr.port(), 4 * 256 + 1);

        let addr = parse_port_argument("10, 1, 2, 3, 255, 255").unwrap();
        assert_eq!(addr.port(), 65535);
    }

    #[test]
    fn test_parse_port_argument_rejects_malformed() {
        assert!(parse_port_argument("127,0,0,1,4").is_err());
        assert!(parse_port_argument("127,0,0,1,4,1,9").is_err());
        assert!(parse_port_argument("127,0,0,256,4,1").is_err());
        assert!(parse_port_argument("a,b,c,d,e,f").is_err());
        assert!(parse_port_argument("").is_err());
    }

    #[tokio::test]
    async fn test_port_dials_client_before_replying() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let arg = format!("127,0,0,1,{},{}", port / 256, port % 256);

        let mut session = new_session();
        handle_port_command(&mut session, Some(arg)).await.unwrap();

        assert_eq!(session.writer(), b"200 PORT command successful.\r\n");
        assert!(session.data_stream.is_some());
        let (_, peer) = listener.accept().await.unwrap();
        assert!(peer.ip().is_loopback());
    }

    #[tokio::test]
    async fn test_port_dial_failure_is_recoverable() {
        // Grab a free port, then release it so nothing listens there.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let arg = format!("127,0,0,1,{},{}", port / 256, port % 256);

        let mut session = new_session();
        let err = handle_port_command(&mut session, Some(arg))
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::DataConnection(_)));
        assert!(!err.is_fatal());
        assert!(session.writer().is_empty());
        assert!(session.data_stream.is_none());
    }
}
