use thiserror::Error;

#[derive(Error, Debug)]
pub enum TasteMapError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    #[error("TasteMapError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for TasteMapError {
    fn from(error: std::io::Error) -> Self {
        TasteMapError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for TasteMapError {
    fn from(error: reqwest::Error) -> Self {
        TasteMapError::Reqwest(Box::new(error))
    }
}

/// Failure of a single backend call.
///
/// Every data operation returns `Result<T, ApiError>`, so the view layer can
/// decide in one place whether to alert, offer a retry or keep stale data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP error {code} from {url}")]
    Status { code: u16, url: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Request rejected ({result_code}){}", rejected_suffix(.message))]
    Rejected { result_code: String, message: Option<String> },
}

fn rejected_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Locally rejected form input. Nothing is sent when a draft fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Rating must be between 1 and 5, got {0}")]
    Rating(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    Transport,
    Status,
    Decode,
    Rejected,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Transport(_) => ApiErrorKind::Transport,
            ApiError::Status { .. } => ApiErrorKind::Status,
            ApiError::Decode(_) => ApiErrorKind::Decode,
            ApiError::Rejected { .. } => ApiErrorKind::Rejected,
        }
    }

    /// Transport failures and 5xx responses may succeed if sent again.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { code, .. } => *code >= 500,
            ApiError::Decode(_) | ApiError::Rejected { .. } => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return ApiError::Decode(error.to_string());
        }

        match error.status() {
            Some(status) => ApiError::Status {
                code: status.as_u16(),
                url: error.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => ApiError::Transport(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode(error.to_string())
    }
}
