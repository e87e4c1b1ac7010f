use crate::core_error::SessionError;
use crate::session::{ControlWriter, Session};
use log::debug;
use std::io;
use std::net::Ipv4Addr;
use tokio::net::{TcpListener, TcpStream};

/// Reply flavour of a passive data connection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassiveMode {
    Pasv,
    Epsv,
}

/// Handles the PASV and EPSV FTP commands.
///
/// Opens a listener on an ephemeral port, tells the client where to connect and
/// waits for exactly one inbound connection before returning, so the next command
/// is only read once the data connection is up. The listener is closed as soon as
/// that connection is accepted.
pub async fn handle_pasv_command<W: ControlWriter>(
    session: &mut Session<W>,
    mode: PassiveMode,
) -> Result<(), SessionError> {
    session.close_data_stream();

    let listener = setup_pasv_listener()
        .await
        .map_err(SessionError::DataConnection)?;
    let port = listener
        .local_addr()
        .map_err(SessionError::DataConnection)?
        .port();

    let response = match mode {
        PassiveMode::Pasv => pasv_response(session.config.server.pasv_address, port),
        PassiveMode::Epsv => epsv_response(port),
    };
    session.send_response(response.as_bytes()).await?;
    debug!("Passive response sent to client: {}", response.trim_end());

    let data_stream = accept_pasv_connection(listener)
        .await
        .map_err(SessionError::DataConnection)?;
    session.set_data_stream(data_stream);
    Ok(())
}

/// Binds the passive listener on an ephemeral port of every interface.
pub async fn setup_pasv_listener() -> io::Result<TcpListener> {
    TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).await
}

pub fn pasv_response(ip: Ipv4Addr, port: u16) -> String {
    let [a, b, c, d] = ip.octets();
    format!(
        "227 Entering Passive Mode ({},{},{},{},{},{})\r\n",
        a,
        b,
        c,
        d,
        port / 256,
        port % 256
    )
}

pub fn epsv_response(port: u16) -> String {
    format!("229 Extended Passive mode OK (|||{}|)\r\n", port)
}

/// Accepts the single inbound connection and drops the listener.
pub async fn accept_pasv_connection(listener: TcpListener) -> io::Result<TcpStream> {
    let (data_stream, addr) = listener.accept().await?;
    debug!("Accepted data connection from: {}", addr);
    Ok(data_stream)
}
