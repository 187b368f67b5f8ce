use std::fmt;

/// Signed-in user context: the bearer credential plus the display name.
///
/// Owned by `AppState` and handed to whoever needs the credential, instead
/// of being looked up from ambient storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
    username: String,
}

impl Session {
    /// Returns `None` unless both the token and the username are non-empty.
    pub fn new(access_token: impl Into<String>, username: impl Into<String>) -> Option<Self> {
        let access_token = access_token.into();
        let username = username.into();
        if access_token.trim().is_empty() || username.trim().is_empty() {
            return None;
        }
        Some(Self {
            access_token,
            username,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("access_token", &playground_logging::redacted(&self.access_token))
            .finish()
    }
}
