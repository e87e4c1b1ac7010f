// Here's the list of the FTP commands implemented
pub mod cwd;
pub mod dele;
pub mod handlers;
pub mod list;
pub mod mkd;
pub mod noop;
pub mod opts;
pub mod pass;
pub mod pwd;
pub mod quit;
pub mod retr;
pub mod rnfr;
pub mod rnto;
pub mod size;
pub mod stor;
pub mod type_;
pub mod user;

// Command parsing
pub mod ftpcommand;

// The utils and common functions are here
pub mod utils;
