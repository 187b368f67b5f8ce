use playground_core::{AuthRequest, Session};
use playground_logging::{pg_info, pg_warn};
use serde::{Deserialize, Serialize};

use crate::http::{self, ClientSettings};
use crate::{RequestError, RequestErrorKind};

/// Exchanges credentials for a session.
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Session, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAuthenticator {
    settings: ClientSettings,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(untagged)]
enum AuthBody<'a> {
    Login {
        username: &'a str,
        password: &'a str,
    },
    Register {
        username: &'a str,
        email: &'a str,
        password: &'a str,
    },
}

#[derive(Deserialize)]
struct AuthEnvelope {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ReqwestAuthenticator {
    pub fn new(settings: ClientSettings) -> Result<Self, RequestError> {
        let client = http::build_client(&settings)?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl Authenticator for ReqwestAuthenticator {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Session, RequestError> {
        let fallback = request.failure_fallback();
        let (segment, body) = match request {
            AuthRequest::Login { username, password } => {
                ("login", AuthBody::Login { username, password })
            }
            AuthRequest::Register {
                username,
                email,
                password,
            } => (
                "register",
                AuthBody::Register {
                    username,
                    email,
                    password,
                },
            ),
        };
        let url = http::endpoint(&self.settings.auth_base, segment)?;
        let response = http::send(
            self.client.post(url).json(&body),
            self.settings.max_response_bytes,
            fallback,
        )
        .await?;

        if !response.success {
            let backend_error = response
                .json::<AuthEnvelope>(fallback)
                .ok()
                .and_then(|envelope| envelope.error);
            return Err(response.status_error(backend_error, fallback));
        }

        let envelope: AuthEnvelope = response.json(fallback)?;
        // The serverless login handler answers with the token only.
        let username = envelope
            .username
            .unwrap_or_else(|| request.username().to_string());
        let session = envelope
            .access_token
            .and_then(|token| Session::new(token, username))
            .ok_or_else(|| {
                pg_warn!("Auth response for {} carried no token", request.username());
                RequestError::new(RequestErrorKind::MissingResult, fallback)
            })?;
        pg_info!("Signed in as {}", session.username());
        Ok(session)
    }
}
