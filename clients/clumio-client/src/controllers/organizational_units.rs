// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use crate::{ApiRequest, ClumioClient, Error, ListParams, ResponseValue, TaskOutcome};
use clumio_api::{
    CreateOrganizationalUnitNoTaskResponse, CreateOrganizationalUnitResponse,
    CreateOrganizationalUnitV2Request, DeleteOrganizationalUnitResponse,
    ListOrganizationalUnitUsersResponse, ListOrganizationalUnitsResponse,
    PatchOrganizationalUnitNoTaskResponse, PatchOrganizationalUnitResponse,
    PatchOrganizationalUnitV2Request, ReadOrganizationalUnitResponse,
};
use http::{HeaderMap, HeaderValue};

const ACCEPT: &str = crate::media_type!("organizational-units", 2);

type CreateOutcome =
    TaskOutcome<CreateOrganizationalUnitNoTaskResponse, CreateOrganizationalUnitResponse>;
type PatchOutcome =
    TaskOutcome<PatchOrganizationalUnitNoTaskResponse, PatchOrganizationalUnitResponse>;

/// Organizational units
///
/// Creating and patching an OU answers 200 with the unit when no entity
/// moves are needed, and 202 with the unit plus a `task_id` otherwise.
#[derive(Debug)]
pub struct OrganizationalUnitsV2<'c> {
    client: &'c ClumioClient,
    headers: HeaderMap,
}

impl<'c> OrganizationalUnitsV2<'c> {
    pub fn new(client: &'c ClumioClient) -> Self {
        let headers = client
            .config()
            .request_headers(HeaderValue::from_static(ACCEPT));
        Self { client, headers }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub async fn list_organizational_units(
        &self,
        params: &ListParams,
    ) -> Result<ResponseValue<ListOrganizationalUnitsResponse>, Error> {
        let request = ApiRequest::get("/organizational-units").list_params(params);
        self.client
            .execute("list_organizational_units", request, &self.headers)
            .await
    }

    pub async fn create_organizational_unit(
        &self,
        embed: Option<&str>,
        body: Option<&CreateOrganizationalUnitV2Request>,
    ) -> Result<ResponseValue<CreateOutcome>, Error> {
        const OPERATION: &str = "create_organizational_unit";
        let request = ApiRequest::post("/organizational-units")
            .query("embed", embed)
            .json_body(OPERATION, body)?;
        self.client
            .execute_by_status(OPERATION, request, &self.headers)
            .await
    }

    pub async fn read_organizational_unit(
        &self,
        id: &str,
    ) -> Result<ResponseValue<ReadOrganizationalUnitResponse>, Error> {
        let request = ApiRequest::get("/organizational-units/{id}").path_param("id", id);
        self.client
            .execute("read_organizational_unit", request, &self.headers)
            .await
    }

    pub async fn patch_organizational_unit(
        &self,
        id: &str,
        embed: Option<&str>,
        body: Option<&PatchOrganizationalUnitV2Request>,
    ) -> Result<ResponseValue<PatchOutcome>, Error> {
        const OPERATION: &str = "patch_organizational_unit";
        let request = ApiRequest::patch("/organizational-units/{id}")
            .path_param("id", id)
            .query("embed", embed)
            .json_body(OPERATION, body)?;
        self.client
            .execute_by_status(OPERATION, request, &self.headers)
            .await
    }

    /// Deletion runs as a task; the answer is its handle
    pub async fn delete_organizational_unit(
        &self,
        id: &str,
    ) -> Result<ResponseValue<DeleteOrganizationalUnitResponse>, Error> {
        let request = ApiRequest::delete("/organizational-units/{id}").path_param("id", id);
        self.client
            .execute("delete_organizational_unit", request, &self.headers)
            .await
    }

    pub async fn list_organizational_unit_users(
        &self,
        id: &str,
        params: &ListParams,
    ) -> Result<ResponseValue<ListOrganizationalUnitUsersResponse>, Error> {
        let request = ApiRequest::get("/organizational-units/{id}/users")
            .path_param("id", id)
            .list_params(params);
        self.client
            .execute("list_organizational_unit_users", request, &self.headers)
            .await
    }
}
