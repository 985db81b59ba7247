// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use crate::{ApiRequest, ClumioClient, Error, ListParams, ResponseValue, TaskOutcome};
use clumio_api::{
    CreatePolicyDefinitionResponse, CreatePolicyDefinitionV1Request, DeletePolicyDefinitionResponse,
    ListPolicyDefinitionsResponse, ReadPolicyDefinitionResponse,
    UpdatePolicyDefinitionNoTaskResponse, UpdatePolicyDefinitionResponse,
    UpdatePolicyDefinitionV1Request,
};
use http::{HeaderMap, HeaderValue};

const ACCEPT: &str = crate::media_type!("policy-definitions", 1);

type UpdateOutcome =
    TaskOutcome<UpdatePolicyDefinitionNoTaskResponse, UpdatePolicyDefinitionResponse>;

#[derive(Debug)]
pub struct PolicyDefinitionsV1<'c> {
    client: &'c ClumioClient,
    headers: HeaderMap,
}

impl<'c> PolicyDefinitionsV1<'c> {
    pub fn new(client: &'c ClumioClient) -> Self {
        let headers = client
            .config()
            .request_headers(HeaderValue::from_static(ACCEPT));
        Self { client, headers }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub async fn list_policy_definitions(
        &self,
        params: &ListParams,
        embed: Option<&str>,
    ) -> Result<ResponseValue<ListPolicyDefinitionsResponse>, Error> {
        let request = ApiRequest::get("/policies/definitions")
            .list_params(params)
            .query("embed", embed);
        self.client
            .execute("list_policy_definitions", request, &self.headers)
            .await
    }

    pub async fn create_policy_definition(
        &self,
        body: Option<&CreatePolicyDefinitionV1Request>,
    ) -> Result<ResponseValue<CreatePolicyDefinitionResponse>, Error> {
        const OPERATION: &str = "create_policy_definition";
        let request = ApiRequest::post("/policies/definitions")
            .json_body(OPERATION, body)?;
        self.client.execute(OPERATION, request, &self.headers).await
    }

    pub async fn read_policy_definition(
        &self,
        policy_id: &str,
        embed: Option<&str>,
    ) -> Result<ResponseValue<ReadPolicyDefinitionResponse>, Error> {
        let request = ApiRequest::get("/policies/definitions/{policy_id}")
            .path_param("policy_id", policy_id)
            .query("embed", embed);
        self.client
            .execute("read_policy_definition", request, &self.headers)
            .await
    }

    /// 200 when the change applies immediately, 202 with a `task_id` when
    /// assets have to be re-protected first
    pub async fn update_policy_definition(
        &self,
        policy_id: &str,
        embed: Option<&str>,
        body: Option<&UpdatePolicyDefinitionV1Request>,
    ) -> Result<ResponseValue<UpdateOutcome>, Error> {
        const OPERATION: &str = "update_policy_definition";
        let request = ApiRequest::put("/policies/definitions/{policy_id}")
            .path_param("policy_id", policy_id)
            .query("embed", embed)
            .json_body(OPERATION, body)?;
        self.client
            .execute_by_status(OPERATION, request, &self.headers)
            .await
    }

    pub async fn delete_policy_definition(
        &self,
        policy_id: &str,
    ) -> Result<ResponseValue<DeletePolicyDefinitionResponse>, Error> {
        let request = ApiRequest::delete("/policies/definitions/{policy_id}")
            .path_param("policy_id", policy_id);
        self.client
            .execute("delete_policy_definition", request, &self.headers)
            .await
    }
}
