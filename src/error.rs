#[derive(Debug, thiserror::Error)]
pub enum CardlistError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid update mode {0:?} (expected cards, prices or both)")]
    InvalidMode(String),

    #[error("malformed card payload for {name}: {detail}")]
    MalformedCard { name: String, detail: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

impl CardlistError {
    /// Process exit code for this error class.
    ///
    /// Fatal errors each map to a distinct non-zero code so callers can tell
    /// a bad invocation apart from a flaky API or a broken payload:
    /// invalid mode 2, fetch failure (HTTP or JSON) 3, malformed card 4,
    /// IO failure 5, unknown set 6.
    pub fn exit_code(&self) -> i32 {
        match self {
            CardlistError::InvalidMode(_) => 2,
            CardlistError::Http(_) | CardlistError::Json(_) => 3,
            CardlistError::MalformedCard { .. } => 4,
            CardlistError::Io(_) => 5,
            CardlistError::NotFound(_) => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, CardlistError>;
