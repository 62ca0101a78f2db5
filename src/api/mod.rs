pub mod researchers;
pub mod types;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use types::ErrorBody;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("failed to decode server response: {0}")]
    Decode(String),
}

/// Fallback message for an undecodable error body.
const GENERIC_SERVER_ERROR: &str = "failed to process server response";

/// Extract the user-facing message from a non-success response body.
///
/// A well-formed `{"error": "..."}` body wins; a decodable body without the
/// field embeds the status code; anything else falls back to the generic
/// message.
pub(crate) fn extract_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(msg) }) => msg,
        Ok(ErrorBody { error: None }) => format!("server returned status {status}"),
        Err(_) => GENERIC_SERVER_ERROR.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Path encoding
// ---------------------------------------------------------------------------

/// Characters percent-encoded when a researcher ID is placed in a URL path
/// segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

pub(crate) fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

// ---------------------------------------------------------------------------
// API client
// ---------------------------------------------------------------------------

pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Issue a GET request and decode the response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "issuing request");
        let resp = self.http_client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Check the status and decode the body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: Response,
    ) -> Result<T, ApiClientError> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiClientError::Server {
                status: status.as_u16(),
                message: extract_error_message(status.as_u16(), &body),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ApiClientError::Decode(e.to_string()))
    }

    /// Build a full API URL from a path (e.g. "/researcher/123").
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_from_body() {
        let msg = extract_error_message(404, r#"{"error":"Researcher not found."}"#);
        assert_eq!(msg, "Researcher not found.");
    }

    #[test]
    fn error_message_without_field_embeds_status() {
        assert_eq!(extract_error_message(500, "{}"), "server returned status 500");
    }

    #[test]
    fn error_message_from_malformed_body_is_generic() {
        assert_eq!(
            extract_error_message(502, "<html>Bad Gateway</html>"),
            GENERIC_SERVER_ERROR
        );
    }

    #[test]
    fn path_segment_encoding() {
        assert_eq!(encode_path_segment("1743905"), "1743905");
        assert_eq!(encode_path_segment("a b/c"), "a%20b%2Fc");
    }
}
