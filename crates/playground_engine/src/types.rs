use std::fmt;

use playground_core::{AnalysisResult, RequestId, Session, Skill};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        skill: Skill,
        result: Result<AnalysisResult, RequestError>,
    },
    AuthCompleted {
        request_id: RequestId,
        result: Result<Session, RequestError>,
    },
}

/// A failed backend call. `message` is what the user gets to see: the
/// backend's own error string when it sent one, otherwise a generic fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    pub kind: RequestErrorKind,
    pub message: String,
}

impl RequestError {
    pub fn new(kind: RequestErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestErrorKind {
    InvalidEndpoint,
    InvalidRequest,
    Network,
    Timeout,
    HttpStatus(u16),
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedResponse,
    MissingResult,
    /// The engine could not run the request to completion.
    Internal,
}

impl fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestErrorKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            RequestErrorKind::InvalidRequest => write!(f, "invalid request"),
            RequestErrorKind::Network => write!(f, "network error"),
            RequestErrorKind::Timeout => write!(f, "timeout"),
            RequestErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            RequestErrorKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            RequestErrorKind::MalformedResponse => write!(f, "malformed response"),
            RequestErrorKind::MissingResult => write!(f, "response without result"),
            RequestErrorKind::Internal => write!(f, "engine failure"),
        }
    }
}
