// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request assembly

use crate::error::Error;
use crate::transport::TransportRequest;
use bytes::Bytes;
use clumio_api::{Filter, Model, WireError, to_wire};
use http::{HeaderMap, Method};

/// Versioned media type for a Clumio resource, e.g.
/// `media_type!("tasks", 1)` is `application/api.clumio.tasks=v1+json`.
#[macro_export]
macro_rules! media_type {
    ($resource:literal, $version:literal) => {
        concat!("application/api.clumio.", $resource, "=v", $version, "+json")
    };
}

/// Paging and filtering shared by list operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    /// Maximum number of items per page
    pub limit: Option<i64>,
    /// Page token; the API uses page numbers rendered as strings
    pub start: Option<String>,
    pub filter: Option<Filter>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// One operation's method, path and parameters, before headers and base
/// path are applied
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    template: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    body: Option<Bytes>,
}

impl ApiRequest {
    pub fn new(method: Method, template: &'static str) -> Self {
        Self {
            method,
            template,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(template: &'static str) -> Self {
        Self::new(Method::GET, template)
    }

    pub fn post(template: &'static str) -> Self {
        Self::new(Method::POST, template)
    }

    pub fn put(template: &'static str) -> Self {
        Self::new(Method::PUT, template)
    }

    pub fn patch(template: &'static str) -> Self {
        Self::new(Method::PATCH, template)
    }

    pub fn delete(template: &'static str) -> Self {
        Self::new(Method::DELETE, template)
    }

    /// Substitute `{name}` in the path template. Values are inserted
    /// verbatim.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Add a query parameter; `None` leaves it out entirely
    pub fn query<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query.push((name, value.to_string()));
        }
        self
    }

    pub fn list_params(self, params: &ListParams) -> Self {
        self.query("limit", params.limit)
            .query("start", params.start.as_deref())
            .query("filter", params.filter.as_ref().filter(|f| !f.is_empty()))
    }

    /// Attach a JSON body; `None` sends no body. Encoding failures are
    /// reported against `operation`.
    pub fn json_body<T: Model>(
        mut self,
        operation: &'static str,
        body: Option<&T>,
    ) -> Result<Self, Error> {
        if let Some(body) = body {
            let bytes = encode_body(body).map_err(|source| Error::Encode { operation, source })?;
            self.body = Some(bytes);
        }
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path with every known parameter substituted
    pub fn path(&self) -> String {
        let mut path = self.template.to_string();
        for (name, value) in &self.path_params {
            path = path.replace(&format!("{{{name}}}"), value);
        }
        path
    }

    pub(crate) fn into_transport(self, base_path: &str, headers: HeaderMap) -> TransportRequest {
        let url = format!("{base_path}{}", self.path());
        TransportRequest {
            method: self.method,
            url,
            query: self
                .query
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            headers,
            body: self.body,
        }
    }
}

fn encode_body<T: Model>(body: &T) -> Result<Bytes, WireError> {
    let record = to_wire(body)?;
    let bytes = serde_json::to_vec(&record).map_err(WireError::Serialize)?;
    Ok(Bytes::from(bytes))
}
