/// Completion Client: the single point of entry for calls to the hosted
/// completion service.
///
/// No other module talks to the completion endpoint directly. There is no retry:
/// a failed or empty call goes straight back to the caller.
use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

pub mod models;

pub use models::{CompletionRequest, Model, SamplingOptions, UnsupportedModel};

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Thin wrapper over the completion endpoint. Cheap to clone; holds a pooled
/// `reqwest::Client`.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl CompletionClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
            api_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues one completion call and returns the raw response body.
    ///
    /// `Ok(None)` means the service answered successfully but with no content.
    pub async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, CompletionError> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            temperature = request.options.temperature,
            max_tokens = request.options.max_tokens,
            "Sending completion request"
        );

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Completion API returned {status}");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: error_message(status, body),
            });
        }

        if body.trim().is_empty() {
            warn!("Completion API returned an empty body");
            return Ok(None);
        }

        debug!(bytes = body.len(), "Completion call succeeded");
        Ok(Some(body))
    }
}

/// Pulls `message` out of a JSON error body, falling back to the raw text.
fn error_message(status: StatusCode, body: String) -> String {
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }
    serde_json::from_str::<ApiErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard, token: Option<&str>) -> CompletionClient {
        CompletionClient::new(
            format!("{}/complete", server.url()),
            token.map(String::from),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new(
            Model::JambaInstruct,
            None,
            "Summarize",
            SamplingOptions::new(0.5, 2000),
        )
    }

    #[tokio::test]
    async fn test_complete_posts_structured_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/complete")
            .match_header("authorization", "Bearer secret")
            .match_body(Matcher::Json(json!({
                "model": "jamba-instruct",
                "messages": [{"role": "user", "content": "Summarize"}],
                "options": {"temperature": 0.5, "max_tokens": 2000}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"messages":"Done"}]}"#)
            .create_async()
            .await;

        let raw = client_for(&server, Some("secret"))
            .complete(&request())
            .await
            .unwrap();

        assert_eq!(raw.as_deref(), Some(r#"{"choices":[{"messages":"Done"}]}"#));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_body_is_no_result() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/complete")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let raw = client_for(&server, None).complete(&request()).await.unwrap();
        assert!(raw.is_none());
    }

    #[tokio::test]
    async fn test_api_error_is_not_retried() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/complete")
            .with_status(503)
            .with_body(r#"{"message":"model overloaded"}"#)
            .expect(1)
            .create_async()
            .await;

        let err = client_for(&server, None)
            .complete(&request())
            .await
            .unwrap_err();

        match err {
            CompletionError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "model overloaded");
            }
            other => panic!("unexpected error: {other}"),
        }
        mock.assert_async().await;
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, "plain failure".to_string()),
            "plain failure"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, String::new()),
            "Bad Gateway"
        );
    }
}
