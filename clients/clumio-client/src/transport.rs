// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Pluggable HTTP transport
//!
//! Controllers never talk to the network directly. They hand a fully
//! assembled [`TransportRequest`] to a [`Transport`] and interpret the
//! [`TransportResponse`] that comes back. Any status code is a response;
//! only failures to get one at all are [`TransportError`]s.

use async_trait::async_trait;
use bytes::Bytes;
use clumio_api::{ErrorResponse, from_wire_bytes};
use http::{HeaderMap, Method, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Longest body excerpt used as an error message
const MAX_MESSAGE_CHARS: usize = 512;

/// A request ready to be put on the wire
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    /// Base path plus rendered path template, without query string
    pub url: String,
    /// Query parameters in the order they were added
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    /// Serialized JSON body
    pub body: Option<Bytes>,
}

impl TransportRequest {
    /// Form-encoded query string, empty when there are no parameters
    pub fn query_string(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }

    /// URL including the query string
    pub fn full_url(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.url.clone()
        } else {
            format!("{}?{}", self.url, query)
        }
    }
}

/// What came back from the server, whatever the status
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Failures that prevented a response from being received
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("failed to build HTTP client: {0}")]
    Setup(String),

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError>;

    /// Human-readable message for an error response
    fn error_message(&self, response: &TransportResponse) -> String {
        default_error_message(response)
    }
}

/// Prefer the API's structured error messages, then the raw body, then the
/// status line.
pub fn default_error_message(response: &TransportResponse) -> String {
    if let Ok(body) = from_wire_bytes::<ErrorResponse>(&response.body)
        && let Some(message) = body.message()
    {
        return message;
    }

    let text = String::from_utf8_lossy(&response.body);
    let text = text.trim();
    if !text.is_empty() {
        return text.chars().take(MAX_MESSAGE_CHARS).collect();
    }

    match response.status.canonical_reason() {
        Some(reason) => format!("{} {}", response.status.as_u16(), reason),
        None => format!("HTTP status {}", response.status.as_u16()),
    }
}

/// [`Transport`] backed by [`reqwest`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        // reqwest is built without a bundled crypto provider; the first
        // install wins and later calls are no-ops.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let url = request.full_url();
        let mut builder = self
            .client
            .request(request.method, &url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        tracing::trace!(%url, %status, bytes = body.len(), "received response");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::Other(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: &str) -> TransportResponse {
        TransportResponse {
            status: StatusCode::from_u16(status).expect("valid status"),
            headers: HeaderMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_query_string_encoding() {
        let request = TransportRequest {
            method: Method::GET,
            url: "https://api.example.com/tasks".to_string(),
            query: vec![
                ("limit".to_string(), "10".to_string()),
                ("filter".to_string(), r#"{"status":{"$eq":"queued"}}"#.to_string()),
            ],
            headers: HeaderMap::new(),
            body: None,
        };
        let expected = concat!(
            "https://api.example.com/tasks?limit=10",
            "&filter=%7B%22status%22%3A%7B%22%24eq%22%3A%22queued%22%7D%7D"
        );
        assert_eq!(request.full_url(), expected);
    }

    #[test]
    fn test_no_query_leaves_url_untouched() {
        let request = TransportRequest {
            method: Method::GET,
            url: "https://api.example.com/tasks".to_string(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        };
        assert_eq!(request.query_string(), "");
        assert_eq!(request.full_url(), "https://api.example.com/tasks");
    }

    #[test]
    fn test_error_message_from_structured_body() {
        let body = r#"{"errors":[{"error_code":404,"error_message":"Backup not found"}]}"#;
        let message = default_error_message(&response(404, body));
        assert_eq!(message, "Backup not found");
    }

    #[test]
    fn test_error_message_falls_back_to_body_text() {
        assert_eq!(
            default_error_message(&response(502, "  upstream unavailable\n")),
            "upstream unavailable"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(default_error_message(&response(404, "")), "404 Not Found");
    }
}
