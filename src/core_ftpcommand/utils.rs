use crate::constants::LIST_DATE_FORMAT;
use crate::core_error::SessionError;
use crate::core_storage::DirectoryEntry;

/// Reduces a path argument to the object key it names: its last component.
///
/// The bucket has no directories, so "/photos/a.txt" and "a.txt" address the same object.
pub fn object_key(arg: &str) -> Option<String> {
    let trimmed = arg.trim_end_matches('/');
    let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

/// Returns the argument or a syntax error naming the verb.
pub fn require_argument(verb: &str, arg: Option<String>) -> Result<String, SessionError> {
    arg.ok_or_else(|| SessionError::Syntax(format!("{} requires an argument", verb)))
}

/// Returns the object key of a path argument, or a syntax error.
pub fn require_key(verb: &str, arg: Option<String>) -> Result<String, SessionError> {
    let arg = require_argument(verb, arg)?;
    object_key(&arg).ok_or_else(|| SessionError::Syntax(format!("{} {}: no file name", verb, arg)))
}

/// Formats one LIST line: `<date> <size> <name>\r\n`.
pub fn format_list_line(entry: &DirectoryEntry) -> String {
    format!(
        "{} {} {}\r\n",
        entry.modified.format(LIST_DATE_FORMAT),
        entry.size,
        entry.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_object_key_takes_base_name() {
        assert_eq!(object_key("a.txt").as_deref(), Some("a.txt"));
        assert_eq!(object_key("/a.txt").as_deref(), Some("a.txt"));
        assert_eq!(object_key("/photos/2024/a.txt").as_deref(), Some("a.txt"));
        assert_eq!(object_key("dir/").as_deref(), Some("dir"));
        assert_eq!(object_key("my file.txt").as_deref(), Some("my file.txt"));
    }

    #[test]
    fn test_object_key_rejects_empty_names() {
        assert_eq!(object_key("/"), None);
        assert_eq!(object_key(""), None);
        assert_eq!(object_key("."), None);
        assert_eq!(object_key("a/.."), None);
    }

    #[test]
    fn test_require_key() {
        assert_eq!(require_key("DELE", Some("/x/b.bin".into())).unwrap(), "b.bin");
        assert!(matches!(
            require_key("DELE", None),
            Err(SessionError::Syntax(_))
        ));
        assert!(matches!(
            require_key("DELE", Some("/".into())),
            Err(SessionError::Syntax(_))
        ));
    }

    #[test]
    fn test_format_list_line() {
        let entry = DirectoryEntry {
            name: "a.txt".to_string(),
            size: 10,
            modified: Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap(),
        };
        assert_eq!(format_list_line(&entry), "03-07-24 09:05 10 a.txt\r\n");
    }
}
