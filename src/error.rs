use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("speech recognition is not available on this host")]
    RecognitionUnsupported,
    #[error("speech recognition failed: {code}")]
    Recognition { code: String },
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
    #[error("session is missing a required collaborator: {collaborator}")]
    MissingCollaborator { collaborator: &'static str },
}

impl SyncError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub(crate) fn recognition(code: impl Into<String>) -> Self {
        Self::Recognition { code: code.into() }
    }
}
