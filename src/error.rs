// Error types shared by the client, service and factory
#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    /// Non-success status (`status` set), or a timeout / transport failure.
    RemoteServiceError {
        status: Option<u16>,
        message: String,
    },
    DecodeError(String),
    EncodeError(String),
}

impl AppError {
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::RemoteServiceError { status, .. } => *status,
            _ => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::RemoteServiceError {
                status: Some(status),
                message,
            } => write!(f, "Remote service error (status {}): {}", status, message),
            AppError::RemoteServiceError {
                status: None,
                message,
            } => write!(f, "Remote service error: {}", message),
            AppError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            AppError::EncodeError(msg) => write!(f, "Encode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::RemoteServiceError {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}
