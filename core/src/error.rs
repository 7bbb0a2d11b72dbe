use serde::Serialize;
use thiserror::Error;

/// Unified error type for the lifeos front ends.
///
/// Serializes to JSON so clients can branch on `type`.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl AppError {
    /// Create a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a Not Found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an Invalid Input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

impl From<crate::store::StoreError> for AppError {
    fn from(err: crate::store::StoreError) -> Self {
        use crate::store::StoreError;
        match err {
            StoreError::Io(e) => AppError::storage(format!("IO: {e}")),
            StoreError::Json(e) => AppError::storage(format!("JSON: {e}")),
            StoreError::NotFound(id) => AppError::not_found(format!("item {id}")),
        }
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        use crate::config::ConfigError;
        match err {
            ConfigError::Io(e) => AppError::io(e.to_string()),
            e @ (ConfigError::Invalid { .. } | ConfigError::Home) => AppError::config(e.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::io(format!("JSON output: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::store::StoreError;

    #[test]
    fn test_error_serialization() {
        let err = AppError::not_found("item 1234");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"NotFound\""));
        assert!(json.contains("\"resource\":\"item 1234\""));
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err: AppError = StoreError::NotFound("abc".to_owned()).into();
        match err {
            AppError::NotFound { resource } => assert_eq!(resource, "item abc"),
            other => panic!("Wrong variant: {other}"),
        }
    }

    #[test]
    fn test_config_errors_split_io_from_config() {
        let home: AppError = ConfigError::Home.into();
        assert!(matches!(home, AppError::Config { .. }));

        let io: AppError = ConfigError::Io(std::io::Error::other("denied")).into();
        assert!(matches!(io, AppError::Io { message } if message == "denied"));
    }
}
