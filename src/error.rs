#[derive(Debug, thiserror::Error)]
pub enum SkinsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! status: {}", .0.as_u16())]
    Status(reqwest::StatusCode),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SkinsError {
    /// Network failure or non-2xx answer from the upstream catalog.
    pub fn is_transport(&self) -> bool {
        matches!(self, SkinsError::Http(_) | SkinsError::Status(_))
    }

    /// Upstream body was not valid catalog JSON.
    pub fn is_parse(&self) -> bool {
        matches!(self, SkinsError::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, SkinsError>;
