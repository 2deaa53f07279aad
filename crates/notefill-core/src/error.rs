//! Error types for notefill.

use thiserror::Error;

/// Result type alias using notefill's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notefill operations.
///
/// None of these are retried anywhere: batch-level failures abort the run,
/// and `RecordWrite` is logged per record by the pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration value is missing or invalid (pre-flight, fatal)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record store query returned a non-success status
    #[error("Remote query error: {0}")]
    RemoteQuery(String),

    /// Text generation call failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// Generation response was empty or not syntactically valid JSON
    #[error("Response parse error: {0}")]
    ResponseParse(String),

    /// Generation response parsed but did not match the expected shape
    #[error("Response shape error: {0}")]
    ResponseShape(String),

    /// Update of a single record failed
    #[error("Record write error: {0}")]
    RecordWrite(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("NOTION_API_KEY not set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: NOTION_API_KEY not set"
        );
    }

    #[test]
    fn test_error_display_remote_query() {
        let err = Error::RemoteQuery("status 401".to_string());
        assert_eq!(err.to_string(), "Remote query error: status 401");
    }

    #[test]
    fn test_error_display_generation() {
        let err = Error::Generation("model timeout".to_string());
        assert_eq!(err.to_string(), "Generation error: model timeout");
    }

    #[test]
    fn test_error_display_response_parse() {
        let err = Error::ResponseParse("empty response".to_string());
        assert_eq!(err.to_string(), "Response parse error: empty response");
    }

    #[test]
    fn test_error_display_response_shape() {
        let err = Error::ResponseShape("missing key 'recipes'".to_string());
        assert_eq!(err.to_string(), "Response shape error: missing key 'recipes'");
    }

    #[test]
    fn test_error_display_record_write() {
        let err = Error::RecordWrite("page abc: status 409".to_string());
        assert_eq!(err.to_string(), "Record write error: page abc: status 409");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("I/O error:"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
