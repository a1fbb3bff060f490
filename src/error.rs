use rocket::serde::json::Value;
use thiserror::Error;

/// Main error type for asset resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Requested (or default) location name is not registered
    #[error("Unknown location instance {name:?}")]
    UnknownLocation { name: String },

    /// URL pattern references placeholders with no bound value
    #[error("Unknown symbols on your url_pattern: {}", .tokens.join(", "))]
    UnknownToken { tokens: Vec<String> },

    /// Filename has no extension to derive a minified name from
    #[error("Filename {filename:?} has no extension")]
    FilenameFormat { filename: String },

    /// Asset manager options that cannot work together
    #[error("Invalid asset configuration: {message}")]
    InvalidConfig { message: String },
}

impl AssetError {
    /// Create an unknown location error
    pub fn unknown_location<S: Into<String>>(name: S) -> Self {
        Self::UnknownLocation { name: name.into() }
    }

    /// Create an unknown token error from any iterator of token names
    pub fn unknown_token<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownToken {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a filename format error
    pub fn filename_format<S: Into<String>>(filename: S) -> Self {
        Self::FilenameFormat {
            filename: filename.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> u16 {
        match self {
            Self::UnknownLocation { .. } => 404,
            Self::FilenameFormat { .. } => 400,
            Self::UnknownToken { .. } | Self::InvalidConfig { .. } => 500,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> i32 {
        match self {
            Self::UnknownLocation { .. } => 1001,
            Self::UnknownToken { .. } => 1002,
            Self::FilenameFormat { .. } => 1003,
            Self::InvalidConfig { .. } => 1004,
        }
    }
}

/// Alias for Result with AssetError
pub type AssetResult<T> = Result<T, AssetError>;

/// 404 Not Found handler
#[rocket::catch(404)]
pub fn not_found() -> Value {
    rocket::serde::json::json!({
        "success": false,
        "error_code": 404,
        "message": "Endpoint not found"
    })
}

/// 500 Internal Server Error handler
#[rocket::catch(500)]
pub fn internal_error() -> Value {
    rocket::serde::json::json!({
        "success": false,
        "error_code": 500,
        "message": "Internal server error"
    })
}

/// 400 Bad Request handler
#[rocket::catch(400)]
pub fn bad_request() -> Value {
    rocket::serde::json::json!({
        "success": false,
        "error_code": 400,
        "message": "Bad request"
    })
}
