use crate::core_error::SessionError;
use crate::core_ftpcommand::ftpcommand::{Command, FtpCommand};
use crate::core_ftpcommand::{
    cwd, dele, list, mkd, noop, opts, pass, pwd, quit, retr, rnfr, rnto, size, stor, type_, user,
};
use crate::session::{ControlWriter, Session};
use log::warn;

// Specific crates for PORT and PASV commands
use crate::core_network::pasv::{self, PassiveMode};
use crate::core_network::port;

/// What the read loop does after a command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one command against the session and writes its replies.
///
/// Recoverable failures are answered with their reply code here, so the only
/// errors returned are the fatal ones that end the session.
pub async fn handle_command<W: ControlWriter>(
    session: &mut Session<W>,
    command: &Command,
) -> Result<Flow, SessionError> {
    let kind = match command.kind {
        Some(kind) => kind,
        None => {
            warn!("Unknown command: {}", command);
            session.send_response(b"500 undefined\r\n").await?;
            return Ok(Flow::Continue);
        }
    };
    let arg = command.argument();

    let result = match kind {
        FtpCommand::QUIT => {
            quit::handle_quit_command(session).await?;
            return Ok(Flow::Quit);
        }
        FtpCommand::USER => user::handle_user_command(session, arg).await,
        FtpCommand::PASS => pass::handle_pass_command(session).await,
        FtpCommand::TYPE => type_::handle_type_command(session, arg).await,
        FtpCommand::OPTS => opts::handle_opts_command(session, arg).await,
        FtpCommand::NOOP => noop::handle_noop_command(session).await,
        FtpCommand::PWD => pwd::handle_pwd_command(session).await,
        FtpCommand::CWD => cwd::handle_cwd_command(session, arg).await,
        FtpCommand::DELE => dele::handle_dele_command(session, arg).await,
        FtpCommand::RNFR => rnfr::handle_rnfr_command(session, arg).await,
        FtpCommand::RNTO => rnto::handle_rnto_command(session, arg).await,
        FtpCommand::SIZE => size::handle_size_command(session, arg).await,
        FtpCommand::MKD => mkd::handle_mkd_command(session, arg).await,
        FtpCommand::PORT => port::handle_port_command(session, arg).await,
        FtpCommand::PASV => pasv::handle_pasv_command(session, PassiveMode::Pasv).await,
        FtpCommand::EPSV => pasv::handle_pasv_command(session, PassiveMode::Epsv).await,
        FtpCommand::LIST => list::handle_list_command(session).await,
        FtpCommand::RETR => retr::handle_retr_command(session, arg).await,
        FtpCommand::STOR => stor::handle_stor_command(session, arg).await,
    };

    match result {
        Ok(()) => Ok(Flow::Continue),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            warn!("Error handling command {}: {}", command, e);
            let reply = format!("{}\r\n", e.to_ftp_response());
            session.send_response(reply.as_bytes()).await?;
            Ok(Flow::Continue)
        }
    }
}
