// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Clumio REST API Client Library
//!
//! This client provides typed access to a subset of the Clumio REST API:
//! VMware VM backups, organizational units, protection groups, tasks and
//! policy definitions.
//!
//! ## Usage
//!
//! ```ignore
//! use clumio_client::{ClumioClient, Configuration, ListParams};
//!
//! let config = Configuration::builder()
//!     .api_token("my-token")
//!     .build()?;
//! let client = ClumioClient::new(config)?;
//!
//! let tasks = client.tasks().list_tasks(&ListParams::new().limit(10)).await?;
//! for task in tasks.items() {
//!     println!("{:?} {:?}", task.id, task.status);
//! }
//! ```
//!
//! Every controller method returns a [`ResponseValue`]. Endpoints that may
//! complete synchronously or schedule a background task return a
//! [`TaskOutcome`] chosen by the response status.

pub mod config;
pub mod controllers;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

use std::sync::Arc;

use http::HeaderMap;
use tracing::{debug, warn};

pub use clumio_api as types;
pub use config::{Configuration, ConfigurationBuilder};
pub use controllers::{
    BackupVmwareVmsV1, OrganizationalUnitsV2, PolicyDefinitionsV1, ProtectionGroupsV1, TasksV1,
};
pub use error::{ConfigError, Error};
pub use request::{ApiRequest, ListParams};
pub use response::{ResponseValue, TaskOutcome};
pub use transport::{
    ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse,
};

/// Entry point: a configuration plus the transport requests go through
#[derive(Clone)]
pub struct ClumioClient {
    config: Arc<Configuration>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ClumioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClumioClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ClumioClient {
    /// Create a client using the reqwest transport
    pub fn new(config: Configuration) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(config: Configuration, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn backup_vmware_vms(&self) -> BackupVmwareVmsV1<'_> {
        BackupVmwareVmsV1::new(self)
    }

    pub fn organizational_units(&self) -> OrganizationalUnitsV2<'_> {
        OrganizationalUnitsV2::new(self)
    }

    pub fn protection_groups(&self) -> ProtectionGroupsV1<'_> {
        ProtectionGroupsV1::new(self)
    }

    pub fn tasks(&self) -> TasksV1<'_> {
        TasksV1::new(self)
    }

    pub fn policy_definitions(&self) -> PolicyDefinitionsV1<'_> {
        PolicyDefinitionsV1::new(self)
    }

    /// Send a request and hydrate a single response model
    pub(crate) async fn execute<T: clumio_api::Model>(
        &self,
        operation: &'static str,
        request: ApiRequest,
        headers: &HeaderMap,
    ) -> Result<ResponseValue<T>, Error> {
        let response = self.send(operation, request, headers).await?;
        let inner = response::hydrate(operation, &response)?;
        let keep_raw = self.config.raw_response();
        Ok(ResponseValue::from_response(inner, response, keep_raw))
    }

    /// Send a request whose model depends on the status: 200 or 202
    pub(crate) async fn execute_by_status<A, B>(
        &self,
        operation: &'static str,
        request: ApiRequest,
        headers: &HeaderMap,
    ) -> Result<ResponseValue<TaskOutcome<A, B>>, Error>
    where
        A: clumio_api::Model,
        B: clumio_api::Model,
    {
        let response = self.send(operation, request, headers).await?;
        let inner = response::hydrate_by_status(operation, &response).inspect_err(|e| {
            if let Error::UnexpectedStatus { status, .. } = e {
                warn!(operation, status = %status, "unexpected success status");
            }
        })?;
        let keep_raw = self.config.raw_response();
        Ok(ResponseValue::from_response(inner, response, keep_raw))
    }

    async fn send(
        &self,
        operation: &'static str,
        request: ApiRequest,
        headers: &HeaderMap,
    ) -> Result<TransportResponse, Error> {
        let request = request.into_transport(self.config.base_path(), headers.clone());
        debug!(
            operation,
            method = %request.method,
            url = %request.url,
            query = %request.query_string(),
            "sending request"
        );

        let response = self.transport.execute(request).await?;
        if response.status.is_client_error() || response.status.is_server_error() {
            let message = self.transport.error_message(&response);
            debug!(operation, status = %response.status, message = %message, "API error response");
            let body = clumio_api::from_wire_bytes::<clumio_api::ErrorResponse>(&response.body)
                .ok()
                .filter(|body| !body.errors.is_empty());
            return Err(Error::Api {
                operation,
                status: response.status,
                message,
                body,
            });
        }

        debug!(operation, status = %response.status, "request completed");
        Ok(response)
    }
}
