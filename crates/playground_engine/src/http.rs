use std::time::Duration;

use futures_util::StreamExt;
use playground_logging::pg_warn;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{RequestError, RequestErrorKind};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base for skill endpoints; `<api_base>/<skill>` is posted to.
    pub api_base: String,
    /// Base for `/login` and `/register`.
    pub auth_base: String,
    pub connect_timeout: Duration,
    /// `None` leaves the request unbounded; the backend decides when to give up.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000/api/skills".to_string(),
            auth_base: "http://localhost:5000/api".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_response_bytes: 16 * 1024 * 1024,
        }
    }
}

pub(crate) fn build_client(settings: &ClientSettings) -> Result<reqwest::Client, RequestError> {
    let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| RequestError::new(RequestErrorKind::Network, err.to_string()))
}

/// Appends `segment` to `base` as a path segment.
pub(crate) fn endpoint(base: &str, segment: &str) -> Result<Url, RequestError> {
    let invalid = |detail: String| {
        RequestError::new(
            RequestErrorKind::InvalidEndpoint,
            format!("invalid endpoint {base}: {detail}"),
        )
    };
    let mut url = Url::parse(base).map_err(|err| invalid(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("base cannot carry a path".to_string()))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

/// A response that arrived, with its status and (size-capped) body.
pub(crate) struct RawResponse {
    pub status: u16,
    pub success: bool,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Decodes the body, or reports it as malformed using `fallback` for the user message.
    pub fn json<T: DeserializeOwned>(&self, fallback: &str) -> Result<T, RequestError> {
        serde_json::from_slice(&self.body).map_err(|err| {
            pg_warn!("Malformed response body (status {}): {}", self.status, err);
            RequestError::new(RequestErrorKind::MalformedResponse, fallback)
        })
    }

    /// Error for a non-success status, preferring the backend's `error` member.
    pub fn status_error(&self, backend_error: Option<String>, fallback: &str) -> RequestError {
        let message = backend_error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        pg_warn!("Request failed with status {}: {}", self.status, message);
        RequestError::new(RequestErrorKind::HttpStatus(self.status), message)
    }
}

pub(crate) async fn send(
    request: reqwest::RequestBuilder,
    max_bytes: u64,
    fallback: &str,
) -> Result<RawResponse, RequestError> {
    let response = request
        .send()
        .await
        .map_err(|err| map_reqwest_error(err, fallback))?;

    let status = response.status();
    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(max_bytes, Some(content_len), fallback));
        }
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|err| map_reqwest_error(err, fallback))?;
        let next_len = body.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(max_bytes, Some(next_len), fallback));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(RawResponse {
        status: status.as_u16(),
        success: status.is_success(),
        body,
    })
}

fn too_large(max_bytes: u64, actual: Option<u64>, fallback: &str) -> RequestError {
    pg_warn!("Response exceeds {} bytes ({:?})", max_bytes, actual);
    RequestError::new(RequestErrorKind::TooLarge { max_bytes, actual }, fallback)
}

fn map_reqwest_error(err: reqwest::Error, fallback: &str) -> RequestError {
    pg_warn!("Request error: {}", err);
    if err.is_timeout() {
        return RequestError::new(RequestErrorKind::Timeout, fallback);
    }
    RequestError::new(RequestErrorKind::Network, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segment_once() {
        let url = endpoint("http://localhost:5000/api/skills", "image").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/skills/image");
        let url = endpoint("http://localhost:5000/api/", "summarize").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/summarize");
    }

    #[test]
    fn endpoint_rejects_garbage() {
        let err = endpoint("not a url", "image").unwrap_err();
        assert_eq!(err.kind, RequestErrorKind::InvalidEndpoint);
    }
}
