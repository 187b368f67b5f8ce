use std::fmt;

use crate::{PendingInput, RequestId, Session, Skill};

/// Side effects requested by `update`, executed by the platform layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubmitAnalysis(SubmitRequest),
    Authenticate {
        request_id: RequestId,
        request: AuthRequest,
    },
    PersistSession(Session),
    ClearSession,
    Notify(Notification),
}

/// Everything needed to call a skill endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub request_id: RequestId,
    pub skill: Skill,
    pub input: PendingInput,
    pub access_token: String,
}

impl fmt::Debug for SubmitRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitRequest")
            .field("request_id", &self.request_id)
            .field("skill", &self.skill)
            .field("input", &self.input)
            .field("access_token", &playground_logging::redacted(&self.access_token))
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        email: String,
        password: String,
    },
}

impl AuthRequest {
    pub fn username(&self) -> &str {
        match self {
            AuthRequest::Login { username, .. } | AuthRequest::Register { username, .. } => {
                username
            }
        }
    }

    pub fn failure_fallback(&self) -> &'static str {
        match self {
            AuthRequest::Login { .. } => "Login failed",
            AuthRequest::Register { .. } => "Registration failed",
        }
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthRequest::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .finish_non_exhaustive(),
            AuthRequest::Register {
                username, email, ..
            } => f
                .debug_struct("Register")
                .field("username", username)
                .field("email", email)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient corner notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }
}
