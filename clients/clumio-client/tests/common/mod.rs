// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared test helpers: an in-memory transport that replays canned
//! responses and records every request it was handed.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use clumio_client::{
    ClumioClient, Configuration, Transport, TransportError, TransportRequest, TransportResponse,
};
use http::{HeaderMap, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const BASE_PATH: &str = "https://api.test.clumio.com";

#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response with the given status and body
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(TransportResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: Bytes::from(body.to_string()),
        }));
        self
    }

    pub fn fail(&self, error: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request sent; panics if there were none or several
    pub fn single_request(&self) -> TransportRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| {
            let message = "no canned response".to_string();
            Err(TransportError::Connection(message))
        })
    }
}

pub fn config() -> Configuration {
    Configuration::builder()
        .base_path(BASE_PATH)
        .api_token("test-token")
        .build()
        .unwrap()
}

pub fn client(transport: &Arc<MockTransport>) -> ClumioClient {
    client_with(config(), transport)
}

pub fn client_with(config: Configuration, transport: &Arc<MockTransport>) -> ClumioClient {
    let transport: Arc<dyn Transport> = transport.clone();
    ClumioClient::with_transport(config, transport)
}

pub fn body_json(request: &TransportRequest) -> serde_json::Value {
    let body = request.body.as_ref().expect("request has a body");
    serde_json::from_slice(body).unwrap()
}
