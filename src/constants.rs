// src/constants.rs

pub const DEFAULT_CONFIG_PATH: &str = "/etc/kodoftpd.conf";
pub const DEFAULT_LISTEN_PORT: u16 = 2121;
pub const DEFAULT_BANNER: &str = "kodoftpd ready.";
pub const DEFAULT_LIST_LIMIT: usize = 100;
pub const MAX_COMMAND_LINE: usize = 4096;

pub const DEFAULT_RS_HOST: &str = "https://rs.qbox.me";
pub const DEFAULT_RSF_HOST: &str = "https://rsf.qbox.me";
pub const DEFAULT_UP_HOST: &str = "https://up.qiniup.com";
pub const DEFAULT_URL_EXPIRY_SECS: u64 = 3600;

// month-day-year hour:minute, as sent in LIST lines
pub const LIST_DATE_FORMAT: &str = "%m-%d-%y %H:%M";
