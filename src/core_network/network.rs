use crate::constants::MAX_COMMAND_LINE;
use crate::core_error::SessionError;
use crate::core_ftpcommand::ftpcommand::Command;
use crate::core_ftpcommand::handlers::{handle_command, Flow};
use crate::core_storage::StorageBackend;
use crate::session::{ControlWriter, Session};
use crate::Config;
use anyhow::{Context, Result};
use log::{error, info, warn};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

pub async fn start_server(
    config: Arc<Config>,
    backend: Arc<dyn StorageBackend>,
    http: reqwest::Client,
) -> Result<()> {
    let listen_port = config.server.listen_port;
    let listener = TcpListener::bind(("0.0.0.0", listen_port))
        .await
        .with_context(|| format!("Failed to listen on port {}", listen_port))?;
    info!("Server listening on port {}", listen_port);

    serve(listener, config, backend, http).await
}

/// Accepts control connections forever, one task per connection.
pub async fn serve(
    listener: TcpListener,
    config: Arc<Config>,
    backend: Arc<dyn StorageBackend>,
    http: reqwest::Client,
) -> Result<()> {
    loop {
        let (socket, addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                continue;
            }
        };
        info!("New connection from {:?}", addr);

        let config = Arc::clone(&config);
        let backend = Arc::clone(&backend);
        let http = http.clone();

        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, config, backend, http).await {
                error!("Connection error: {}", e);
            }
            info!("Connection closed for {:?}", addr);
        });
    }
}

pub async fn handle_connection(
    socket: TcpStream,
    config: Arc<Config>,
    backend: Arc<dyn StorageBackend>,
    http: reqwest::Client,
) -> Result<(), SessionError> {
    let (reader, writer) = socket.into_split();
    let mut session = Session::new(writer, config, backend, http);
    run_session(BufReader::new(reader), &mut session).await
}

/// Greets the client, then handles one control line at a time until QUIT,
/// end of stream or a control connection failure.
pub async fn run_session<R, W>(mut reader: R, session: &mut Session<W>) -> Result<(), SessionError>
where
    R: AsyncBufRead + Unpin,
    W: ControlWriter,
{
    let greeting = format!("220 {}\r\n", session.config.server.banner);
    session.send_response(greeting.as_bytes()).await?;

    let mut buffer = Vec::new();
    loop {
        match read_control_line(&mut reader, &mut buffer).await? {
            ControlLine::Closed => {
                info!("Client disconnected");
                break;
            }
            ControlLine::TooLong => {
                warn!("Discarded a command line longer than {} bytes", MAX_COMMAND_LINE);
                session
                    .send_response(b"500 Command line too long.\r\n")
                    .await?;
                continue;
            }
            ControlLine::Line => {}
        }

        let line = String::from_utf8_lossy(&buffer);
        let command = Command::parse(line.trim_end_matches(['\r', '\n']));
        info!("Received command: {}", command);

        if handle_command(session, &command).await? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

enum ControlLine {
    Line,
    TooLong,
    Closed,
}

/// Reads one control line into `buffer`, holding at most `MAX_COMMAND_LINE` bytes.
///
/// The remainder of an oversized line is read and thrown away up to its newline.
async fn read_control_line<R>(reader: &mut R, buffer: &mut Vec<u8>) -> io::Result<ControlLine>
where
    R: AsyncBufRead + Unpin,
{
    let limit = MAX_COMMAND_LINE as u64;
    buffer.clear();
    let n = (&mut *reader).take(limit).read_until(b'\n', buffer).await?;
    if n == 0 {
        return Ok(ControlLine::Closed);
    }
    if n < MAX_COMMAND_LINE || buffer.ends_with(b"\n") {
        return Ok(ControlLine::Line);
    }

    loop {
        buffer.clear();
        let n = (&mut *reader).take(limit).read_until(b'\n', buffer).await?;
        if n == 0 || buffer.ends_with(b"\n") {
            buffer.clear();
            return Ok(ControlLine::TooLong);
        }
    }
}
