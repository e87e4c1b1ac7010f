use std::fmt;

#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum FtpCommand {
    USER,
    PASS,
    QUIT,
    TYPE,
    OPTS,
    NOOP,
    PWD,
    CWD,
    DELE,
    RNFR,
    RNTO,
    SIZE,
    MKD,
    PORT,
    PASV,
    EPSV,
    LIST,
    RETR,
    STOR,
}

impl FtpCommand {
    pub fn from_verb(cmd: &str) -> Option<FtpCommand> {
        match cmd.to_ascii_uppercase().as_str() {
            "USER" => Some(FtpCommand::USER),
            "PASS" => Some(FtpCommand::PASS),
            "QUIT" => Some(FtpCommand::QUIT),
            "TYPE" => Some(FtpCommand::TYPE),
            "OPTS" => Some(FtpCommand::OPTS),
            "NOOP" => Some(FtpCommand::NOOP),
            "PWD" => Some(FtpCommand::PWD),
            "CWD" => Some(FtpCommand::CWD),
            "DELE" => Some(FtpCommand::DELE),
            "RNFR" => Some(FtpCommand::RNFR),
            "RNTO" => Some(FtpCommand::RNTO),
            "SIZE" => Some(FtpCommand::SIZE),
            "MKD" => Some(FtpCommand::MKD),
            "PORT" => Some(FtpCommand::PORT),
            "PASV" => Some(FtpCommand::PASV),
            "EPSV" => Some(FtpCommand::EPSV),
            "LIST" => Some(FtpCommand::LIST),
            "RETR" => Some(FtpCommand::RETR),
            "STOR" => Some(FtpCommand::STOR),
            _ => None,
        }
    }
}

/// One control line, split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: String,
    pub kind: Option<FtpCommand>,
    pub args: Vec<String>,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_ascii_uppercase();
        let args = parts.map(str::to_string).collect();
        let kind = FtpCommand::from_verb(&verb);
        Self { verb, kind, args }
    }

    /// The argument tokens joined back with single spaces, if any were given.
    pub fn argument(&self) -> Option<String> {
        if self.args.is_empty() {
            None
        } else {
            Some(self.args.join(" "))
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(FtpCommand::PASS) => write!(f, "PASS ****"),
            _ if self.args.is_empty() => write!(f, "{}", self.verb),
            _ => write!(f, "{} {}", self.verb, self.args.join(" ")),
        }
    }
}
