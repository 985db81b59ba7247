// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Typed responses

use crate::error::Error;
use crate::transport::TransportResponse;
use clumio_api::{Model, from_wire_bytes};
use http::{HeaderMap, StatusCode};
use serde::Serialize;
use std::ops::Deref;

/// A hydrated response body together with the status and headers it came
/// with. In raw-response mode the untouched transport response is kept as
/// well.
#[derive(Debug, Clone)]
pub struct ResponseValue<T> {
    inner: T,
    status: StatusCode,
    headers: HeaderMap,
    raw: Option<TransportResponse>,
}

impl<T> ResponseValue<T> {
    pub(crate) fn from_response(inner: T, response: TransportResponse, keep_raw: bool) -> Self {
        if keep_raw {
            Self {
                inner,
                status: response.status,
                headers: response.headers.clone(),
                raw: Some(response),
            }
        } else {
            Self {
                inner,
                status: response.status,
                headers: response.headers,
                raw: None,
            }
        }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The untouched response; only present in raw-response mode
    pub fn raw(&self) -> Option<&TransportResponse> {
        self.raw.as_ref()
    }

    /// Split into the raw response (raw-response mode only) and the
    /// hydrated model
    pub fn into_raw_pair(self) -> (Option<TransportResponse>, T) {
        (self.raw, self.inner)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ResponseValue<U> {
        ResponseValue {
            inner: f(self.inner),
            status: self.status,
            headers: self.headers,
            raw: self.raw,
        }
    }
}

impl<T> Deref for ResponseValue<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

/// Result of an endpoint that either finishes synchronously (200) or
/// schedules a task and answers 202
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskOutcome<A, B> {
    Completed(A),
    Accepted(B),
}

impl<A, B> TaskOutcome<A, B> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, TaskOutcome::Accepted(_))
    }

    pub fn completed(self) -> Option<A> {
        match self {
            TaskOutcome::Completed(a) => Some(a),
            TaskOutcome::Accepted(_) => None,
        }
    }

    pub fn accepted(self) -> Option<B> {
        match self {
            TaskOutcome::Accepted(b) => Some(b),
            TaskOutcome::Completed(_) => None,
        }
    }
}

pub(crate) fn hydrate<T: Model>(
    operation: &'static str,
    response: &TransportResponse,
) -> Result<T, Error> {
    from_wire_bytes(&response.body).map_err(|source| Error::Decode { operation, source })
}

/// Pick the model by status: 200 is `A`, 202 is `B`, anything else is an
/// error
pub(crate) fn hydrate_by_status<A: Model, B: Model>(
    operation: &'static str,
    response: &TransportResponse,
) -> Result<TaskOutcome<A, B>, Error> {
    match response.status {
        StatusCode::OK => hydrate(operation, response).map(TaskOutcome::Completed),
        StatusCode::ACCEPTED => hydrate(operation, response).map(TaskOutcome::Accepted),
        status => Err(Error::UnexpectedStatus { operation, status }),
    }
}
