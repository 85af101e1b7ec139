//! API Client
//!
//! Thin HTTP client for the greeting endpoint. Issues `GET {base_url}/api`
//! and deserializes a JSON body of the shape `{ "message": string }`.
//!
//! The HTTP status is deliberately not checked: any response whose body
//! parses as JSON counts as a reply, matching the behavior the UI was
//! built against. A `message` field may be absent; callers observe that
//! as `None` rather than an error.

use crate::config::ApiConfig;
use crate::constants::API_PATH;
use crate::error::Result;
use serde::Deserialize;

/// Response body of the greeting endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GreetingResponse {
    /// Greeting text; absent when the server omits the field
    pub message: Option<String>,
}

/// HTTP client for the API server
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the configured API server
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the greeting from the API server
    ///
    /// Fails on connection errors and on non-JSON bodies. Never retries.
    pub async fn fetch_greeting(&self) -> Result<GreetingResponse> {
        let url = format!("{}{}", self.base_url, API_PATH);
        tracing::debug!(url = %url, "Fetching greeting");

        let response = self.http.get(&url).send().await?;
        let body = response.text().await?;
        let greeting: GreetingResponse = serde_json::from_str(&body)?;

        Ok(greeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a loopback port
    async fn spawn_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await;
                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
            }
        });

        format!("http://{addr}")
    }

    fn client_for(base_url: String) -> ApiClient {
        ApiClient::new(&ApiConfig { base_url })
    }

    #[tokio::test]
    async fn fetch_parses_message_field() {
        let base = spawn_server("HTTP/1.1 200 OK", r#"{"message":"hi"}"#).await;
        let greeting = client_for(base).fetch_greeting().await.expect("fetch");
        assert_eq!(greeting.message.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn missing_message_field_is_none() {
        let base = spawn_server("HTTP/1.1 200 OK", r#"{"version":2}"#).await;
        let greeting = client_for(base).fetch_greeting().await.expect("fetch");
        assert_eq!(greeting.message, None);
    }

    #[tokio::test]
    async fn non_json_body_is_an_error() {
        let base = spawn_server("HTTP/1.1 200 OK", "<html>oops</html>").await;
        let result = client_for(base).fetch_greeting().await;
        assert!(matches!(result, Err(Error::Json { .. })));
    }

    #[tokio::test]
    async fn http_status_is_not_checked() {
        // A 500 with a valid JSON body still counts as a reply.
        let base =
            spawn_server("HTTP/1.1 500 Internal Server Error", r#"{"message":"boom"}"#).await;
        let greeting = client_for(base).fetch_greeting().await.expect("fetch");
        assert_eq!(greeting.message.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn connection_refused_is_an_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let result = client_for(format!("http://{addr}")).fetch_greeting().await;
        assert!(matches!(result, Err(Error::Http { .. })));
    }

    #[test]
    fn trailing_slash_in_base_url_is_trimmed() {
        let client = client_for("http://localhost:3000/".to_string());
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
