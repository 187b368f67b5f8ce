use playground_core::{AnalysisResult, PendingInput, Skill};
use playground_logging::{pg_info, pg_warn};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::http::{self, ClientSettings};
use crate::{RequestError, RequestErrorKind};

/// Submits pending input to a skill endpoint and returns the analysis.
#[async_trait::async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(
        &self,
        skill: Skill,
        input: &PendingInput,
        access_token: &str,
    ) -> Result<AnalysisResult, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalyzer {
    settings: ClientSettings,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct UrlBody<'a> {
    url: &'a str,
}

/// `{ result }` on success, `{ error }` otherwise.
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

impl ReqwestAnalyzer {
    pub fn new(settings: ClientSettings) -> Result<Self, RequestError> {
        let client = http::build_client(&settings)?;
        Ok(Self { settings, client })
    }

    fn build_request(
        &self,
        skill: Skill,
        input: &PendingInput,
        access_token: &str,
    ) -> Result<reqwest::RequestBuilder, RequestError> {
        let url = http::endpoint(&self.settings.api_base, skill.endpoint())?;
        let request = self.client.post(url).bearer_auth(access_token);
        Ok(match input {
            PendingInput::File(file) => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.name.clone())
                    .mime_str(&file.mime)
                    .map_err(|err| {
                        pg_warn!("Cannot attach {} as {}: {}", file.name, file.mime, err);
                        RequestError::new(RequestErrorKind::InvalidRequest, skill.failure_fallback())
                    })?;
                request.multipart(Form::new().part(skill.field_name(), part))
            }
            PendingInput::Url(url) => request.json(&UrlBody { url }),
        })
    }
}

#[async_trait::async_trait]
impl Analyzer for ReqwestAnalyzer {
    async fn analyze(
        &self,
        skill: Skill,
        input: &PendingInput,
        access_token: &str,
    ) -> Result<AnalysisResult, RequestError> {
        let fallback = skill.failure_fallback();
        let request = self.build_request(skill, input, access_token)?;
        let response = http::send(request, self.settings.max_response_bytes, fallback).await?;

        if !response.success {
            let backend_error = response
                .json::<Envelope>(fallback)
                .ok()
                .and_then(|envelope| envelope.error);
            return Err(response.status_error(backend_error, fallback));
        }

        let envelope: Envelope = response.json(fallback)?;
        let Some(payload) = envelope.result else {
            let message = envelope
                .error
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            pg_warn!("{:?}: success status without result: {}", skill, message);
            return Err(RequestError::new(RequestErrorKind::MissingResult, message));
        };

        let result = AnalysisResult::from_payload(skill, payload).map_err(|err| {
            pg_warn!("{:?}: result does not match the expected shape: {}", skill, err);
            RequestError::new(RequestErrorKind::MalformedResponse, fallback)
        })?;
        pg_info!("{:?}: analysis received ({} bytes)", skill, response.body.len());
        Ok(result)
    }
}
