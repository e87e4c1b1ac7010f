// Errors raised while talking to the object storage service
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Storage service replied {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Invalid storage URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Malformed storage response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }

    pub fn to_ftp_response(&self) -> String {
        match self {
            StorageError::NotFound(_) => {
                "550 Requested action not taken. File unavailable.".to_string()
            }
            _ => "451 Requested action aborted. Local error in processing.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_550() {
        let err = StorageError::NotFound("a.txt".to_string());
        assert!(err.is_not_found());
        assert!(err.to_ftp_response().starts_with("550 "));
    }

    #[test]
    fn test_service_error_maps_to_451() {
        let err = StorageError::Service {
            status: 599,
            message: "timeout".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(err.to_ftp_response().starts_with("451 "));
        assert_eq!(err.to_string(), "Storage service replied 599: timeout");
    }
}
