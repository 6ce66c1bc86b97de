//! HTTP client for posting the waitlist form
//!
//! Sends the collected values as a JSON object to a form-processing
//! endpoint. Only the response status is inspected.

use super::{SubmissionError, Submitter, WaitlistPayload};
use crate::config::WaitlistConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Url;
use std::time::Duration;

/// Posts waitlist payloads to a fixed endpoint
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSubmitter {
    /// Create a submitter with an optional per-request timeout
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Self::with_client(client, endpoint)
    }

    /// Create a submitter from user configuration
    pub fn from_config(config: &WaitlistConfig) -> Result<Self> {
        Self::new(&config.endpoint(), config.request_timeout())
    }

    /// Create a submitter around an existing client
    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid waitlist endpoint: {endpoint}"))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &WaitlistPayload) -> Result<(), SubmissionError> {
        tracing::info!(
            endpoint = %self.endpoint,
            fields = payload.len(),
            "Submitting waitlist form"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Waitlist request failed: {e}");
                SubmissionError::from(e)
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Waitlist submission accepted");
            Ok(())
        } else {
            tracing::warn!(status = status.as_u16(), "Waitlist submission rejected");
            Err(SubmissionError::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn test_client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    fn sample_payload() -> WaitlistPayload {
        let mut values = BTreeMap::new();
        values.insert("email".to_string(), "user@test.com".to_string());
        values.insert("name".to_string(), "Jo".to_string());
        WaitlistPayload::new(values)
    }

    /// Read one HTTP request (headers plus Content-Length body)
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + body_len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Accept a single connection, answer with `status_line`, return the raw request
    async fn serve_once(status_line: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response =
                format!("{status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (format!("http://{addr}/f/waitlist"), handle)
    }

    #[test]
    fn test_from_config_without_endpoint_uses_default() {
        let submitter = HttpSubmitter::from_config(&WaitlistConfig::default()).unwrap();
        assert_eq!(
            submitter.endpoint().as_str(),
            crate::config::DEFAULT_ENDPOINT
        );
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        assert!(HttpSubmitter::new("not a url", None).is_err());
    }

    #[test]
    fn test_from_config_uses_configured_endpoint() {
        let config = WaitlistConfig {
            endpoint: Some("https://forms.example.com/f/abc".to_string()),
            request_timeout_secs: Some(3),
        };
        let submitter = HttpSubmitter::from_config(&config).unwrap();
        assert_eq!(
            submitter.endpoint().as_str(),
            "https://forms.example.com/f/abc"
        );
    }

    #[tokio::test]
    async fn test_success_status_is_accepted() {
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK").await;
        let submitter = HttpSubmitter::with_client(test_client(), &endpoint).unwrap();

        let result = submitter.submit(&sample_payload()).await;
        tokio_test::assert_ok!(result);

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_posts_json_body_with_all_fields() {
        let (endpoint, server) = serve_once("HTTP/1.1 201 Created").await;
        let submitter = HttpSubmitter::with_client(test_client(), &endpoint).unwrap();

        submitter.submit(&sample_payload()).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /f/waitlist HTTP/1.1"));
        assert!(request
            .to_lowercase()
            .contains("content-type: application/json"));

        let body = request.split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "user@test.com", "name": "Jo" })
        );
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let (endpoint, server) = serve_once("HTTP/1.1 500 Internal Server Error").await;
        let submitter = HttpSubmitter::with_client(test_client(), &endpoint).unwrap();

        let result = submitter.submit(&sample_payload()).await;
        assert_eq!(result, Err(SubmissionError::Status(500)));

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_client_error_maps_to_status() {
        let (endpoint, server) = serve_once("HTTP/1.1 422 Unprocessable Entity").await;
        let submitter = HttpSubmitter::with_client(test_client(), &endpoint).unwrap();

        let result = submitter.submit(&sample_payload()).await;
        assert_eq!(result, Err(SubmissionError::Status(422)));

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = format!("http://{addr}/f/waitlist");
        let submitter = HttpSubmitter::with_client(test_client(), &endpoint).unwrap();

        let result = submitter.submit(&sample_payload()).await;
        assert!(matches!(result, Err(SubmissionError::Transport(_))));
    }
}
