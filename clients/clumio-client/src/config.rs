// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration
//!
//! A [`Configuration`] is immutable once built. Everything that can be
//! rejected (base path, header names and values) is validated by
//! [`ConfigurationBuilder::build`], so assembling a request never fails.

use crate::error::ConfigError;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Regional endpoint used when no base path is configured
pub const DEFAULT_BASE_PATH: &str = "https://us-west-2.api.clumio.com";

/// Version reported in the SDK version header
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client name reported in the API client header
pub const API_CLIENT_NAME: &str = "clumio-rust-sdk";

pub const ORGANIZATIONAL_UNIT_CONTEXT_HEADER: &str = "x-clumio-organizationalunit-context";
pub const API_CLIENT_HEADER: &str = "x-clumio-api-client";
pub const SDK_VERSION_HEADER: &str = "x-clumio-sdk-version";

pub const ENV_BASE_PATH: &str = "CLUMIO_API_BASE_PATH";
pub const ENV_API_TOKEN: &str = "CLUMIO_API_TOKEN";
pub const ENV_ORGANIZATIONAL_UNIT_CONTEXT: &str = "CLUMIO_ORGANIZATIONAL_UNIT_CONTEXT";
pub const ENV_RAW_RESPONSE: &str = "CLUMIO_RAW_RESPONSE";
pub const ENV_TIMEOUT_SECS: &str = "CLUMIO_TIMEOUT_SECS";

/// Validated client settings
#[derive(Clone, Debug)]
pub struct Configuration {
    base_path: String,
    organizational_unit_context: Option<String>,
    raw_response: bool,
    timeout: Option<Duration>,
    custom_headers: HeaderMap,
    /// Headers every request starts from, minus the per-resource accept
    default_headers: HeaderMap,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Build a configuration purely from `CLUMIO_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        ConfigurationBuilder::from_env()?.build()
    }

    /// Base URL without a trailing slash
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn organizational_unit_context(&self) -> Option<&str> {
        self.organizational_unit_context.as_deref()
    }

    pub fn raw_response(&self) -> bool {
        self.raw_response
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn has_api_token(&self) -> bool {
        self.default_headers.contains_key(AUTHORIZATION)
    }

    pub fn custom_headers(&self) -> &HeaderMap {
        &self.custom_headers
    }

    /// Assemble the headers for a resource with the given accept media type.
    ///
    /// Custom headers are applied last and replace any default of the same
    /// name.
    pub fn request_headers(&self, accept: HeaderValue) -> HeaderMap {
        let mut headers = self.default_headers.clone();
        headers.insert(http::header::ACCEPT, accept);
        for name in self.custom_headers.keys() {
            headers.remove(name);
        }
        for (name, value) in self.custom_headers.iter() {
            headers.append(name.clone(), value.clone());
        }
        headers
    }
}

/// Builder for [`Configuration`]
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    base_path: Option<String>,
    api_token: Option<SecretString>,
    organizational_unit_context: Option<String>,
    raw_response: bool,
    timeout: Option<Duration>,
    custom_headers: Vec<(String, String)>,
}

impl ConfigurationBuilder {
    /// Seed a builder from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Seed a builder from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut builder = Self::default();
        if let Some(base_path) = get(ENV_BASE_PATH) {
            builder = builder.base_path(base_path);
        }
        if let Some(token) = get(ENV_API_TOKEN) {
            builder = builder.api_token(token);
        }
        if let Some(context) = get(ENV_ORGANIZATIONAL_UNIT_CONTEXT) {
            builder = builder.organizational_unit_context(context);
        }
        if let Some(raw) = get(ENV_RAW_RESPONSE) {
            builder = builder.raw_response(parse_bool(ENV_RAW_RESPONSE, &raw)?);
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: ENV_TIMEOUT_SECS,
                    value: secs.clone(),
                })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder)
    }

    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(SecretString::from(token.into()));
        self
    }

    pub fn organizational_unit_context(mut self, context: impl Into<String>) -> Self {
        self.organizational_unit_context = Some(context.into());
        self
    }

    pub fn raw_response(mut self, raw: bool) -> Self {
        self.raw_response = raw;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header sent on every request, overriding defaults of the same
    /// name. Repeating a name sends every value.
    pub fn custom_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<Configuration, ConfigError> {
        let base_path = self.base_path.as_deref().unwrap_or(DEFAULT_BASE_PATH);
        let base_path = normalize_base_path(base_path)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            HeaderName::from_static(API_CLIENT_HEADER),
            HeaderValue::from_static(API_CLIENT_NAME),
        );
        let sdk_version = format!("{API_CLIENT_NAME}:{SDK_VERSION}");
        default_headers.insert(
            HeaderName::from_static(SDK_VERSION_HEADER),
            header_value(SDK_VERSION_HEADER, &sdk_version)?,
        );
        if let Some(context) = &self.organizational_unit_context {
            default_headers.insert(
                HeaderName::from_static(ORGANIZATIONAL_UNIT_CONTEXT_HEADER),
                header_value(ORGANIZATIONAL_UNIT_CONTEXT_HEADER, context)?,
            );
        }
        if let Some(token) = &self.api_token {
            let mut value = header_value(
                AUTHORIZATION.as_str(),
                &format!("Bearer {}", token.expose_secret()),
            )?;
            value.set_sensitive(true);
            default_headers.insert(AUTHORIZATION, value);
        }

        let mut custom_headers = HeaderMap::new();
        for (name, value) in &self.custom_headers {
            let header_name = HeaderName::from_bytes(name.trim().as_bytes())
                .map_err(|_| ConfigError::InvalidHeaderName(name.clone()))?;
            let header_value = header_value(name, value)?;
            custom_headers.append(header_name, header_value);
        }

        Ok(Configuration {
            base_path,
            organizational_unit_context: self.organizational_unit_context,
            raw_response: self.raw_response,
            timeout: self.timeout,
            custom_headers,
            default_headers,
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidHeaderValue(name.to_string()))
}

fn normalize_base_path(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBasePath {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::InvalidBasePath {
            value: value.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use test_case::test_case;

    fn accept() -> HeaderValue {
        HeaderValue::from_static("application/api.clumio.tasks=v1+json")
    }

    #[test]
    fn test_defaults() {
        let config = Configuration::builder().build().expect("valid config");
        assert_eq!(config.base_path(), DEFAULT_BASE_PATH);
        assert!(!config.raw_response());
        assert!(!config.has_api_token());

        let headers = config.request_headers(accept());
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["accept"], "application/api.clumio.tasks=v1+json");
        assert_eq!(headers[API_CLIENT_HEADER], "clumio-rust-sdk");
        assert_eq!(
            headers[SDK_VERSION_HEADER],
            format!("clumio-rust-sdk:{SDK_VERSION}").as_str()
        );
        assert!(!headers.contains_key(ORGANIZATIONAL_UNIT_CONTEXT_HEADER));
        assert!(!headers.contains_key("authorization"));
    }

    #[test]
    fn test_token_and_context_headers() {
        let config = Configuration::builder()
            .api_token("secret-token")
            .organizational_unit_context("ou-7")
            .build()
            .expect("valid config");
        let headers = config.request_headers(accept());
        assert_eq!(headers["authorization"], "Bearer secret-token");
        assert!(headers["authorization"].is_sensitive());
        assert_eq!(headers[ORGANIZATIONAL_UNIT_CONTEXT_HEADER], "ou-7");
        assert!(!format!("{config:?}").contains("secret-token"));
    }

    #[test]
    fn test_custom_headers_override_defaults() {
        let config = Configuration::builder()
            .custom_header("Accept", "application/json")
            .custom_header("x-clumio-api-client", "my-tool")
            .custom_header("x-trace", "a")
            .custom_header("x-trace", "b")
            .build()
            .expect("valid config");
        let headers = config.request_headers(accept());
        assert_eq!(headers["accept"], "application/json");
        assert_eq!(headers[API_CLIENT_HEADER], "my-tool");
        let traces: Vec<_> = headers.get_all("x-trace").iter().collect();
        assert_eq!(traces, vec!["a", "b"]);
    }

    #[test_case("https://api.example.com/", "https://api.example.com" ; "trailing slash")]
    #[test_case("http://localhost:8080", "http://localhost:8080" ; "plain http")]
    fn test_base_path_normalized(input: &str, expected: &str) {
        let config = Configuration::builder()
            .base_path(input)
            .build()
            .expect("valid config");
        assert_eq!(config.base_path(), expected);
    }

    #[test_case("not a url" ; "unparseable")]
    #[test_case("ftp://api.clumio.com" ; "wrong scheme")]
    fn test_base_path_rejected(input: &str) {
        let err = Configuration::builder()
            .base_path(input)
            .build()
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::InvalidBasePath { .. }));
    }

    #[test]
    fn test_invalid_custom_header_rejected() {
        let err = Configuration::builder()
            .custom_header("bad header", "x")
            .build()
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::InvalidHeaderName(_)));

        let err = Configuration::builder()
            .custom_header("x-ok", "line\nbreak")
            .build()
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::InvalidHeaderValue(_)));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_BASE_PATH, "https://ca-central-1.api.clumio.com/"),
            (ENV_API_TOKEN, "tok"),
            (ENV_ORGANIZATIONAL_UNIT_CONTEXT, ""),
            (ENV_RAW_RESPONSE, "true"),
            (ENV_TIMEOUT_SECS, "30"),
        ]);
        let lookup = |name: &str| vars.get(name).map(|v| v.to_string());
        let config = ConfigurationBuilder::from_lookup(lookup)
            .expect("valid env")
            .build()
            .expect("valid config");
        assert_eq!(config.base_path(), "https://ca-central-1.api.clumio.com");
        assert!(config.has_api_token());
        assert_eq!(config.organizational_unit_context(), None);
        assert!(config.raw_response());
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test_case(ENV_RAW_RESPONSE, "maybe" ; "raw response")]
    #[test_case(ENV_TIMEOUT_SECS, "soon" ; "timeout")]
    fn test_from_lookup_rejects_bad_values(name: &'static str, value: &'static str) {
        let err = ConfigurationBuilder::from_lookup(|n| (n == name).then(|| value.to_string()))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::InvalidEnv { name: n, .. } if n == name));
    }
}
