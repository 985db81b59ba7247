// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use crate::{ApiRequest, ClumioClient, Error, ListParams, ResponseValue};
use clumio_api::{
    AddBucketProtectionGroupResponse, AddBucketToProtectionGroupV1Request,
    CreateProtectionGroupResponse, CreateProtectionGroupV1Request, DeleteProtectionGroupResponse,
    ListProtectionGroupsResponse, ReadProtectionGroupResponse, UpdateProtectionGroupResponse,
    UpdateProtectionGroupV1Request,
};
use http::{HeaderMap, HeaderValue};

const ACCEPT: &str = crate::media_type!("protection-groups", 1);

/// S3 protection groups
///
/// `lookback_days` widens the window used for the compliance statistics
/// returned with each group.
#[derive(Debug)]
pub struct ProtectionGroupsV1<'c> {
    client: &'c ClumioClient,
    headers: HeaderMap,
}

impl<'c> ProtectionGroupsV1<'c> {
    pub fn new(client: &'c ClumioClient) -> Self {
        let headers = client
            .config()
            .request_headers(HeaderValue::from_static(ACCEPT));
        Self { client, headers }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub async fn list_protection_groups(
        &self,
        params: &ListParams,
        lookback_days: Option<i64>,
    ) -> Result<ResponseValue<ListProtectionGroupsResponse>, Error> {
        let request = ApiRequest::get("/datasources/protection-groups")
            .list_params(params)
            .query("lookback_days", lookback_days);
        self.client
            .execute("list_protection_groups", request, &self.headers)
            .await
    }

    pub async fn read_protection_group(
        &self,
        group_id: &str,
        lookback_days: Option<i64>,
    ) -> Result<ResponseValue<ReadProtectionGroupResponse>, Error> {
        let request = ApiRequest::get("/datasources/protection-groups/{group_id}")
            .path_param("group_id", group_id)
            .query("lookback_days", lookback_days);
        self.client
            .execute("read_protection_group", request, &self.headers)
            .await
    }

    pub async fn create_protection_group(
        &self,
        body: Option<&CreateProtectionGroupV1Request>,
    ) -> Result<ResponseValue<CreateProtectionGroupResponse>, Error> {
        const OPERATION: &str = "create_protection_group";
        let request = ApiRequest::post("/datasources/protection-groups")
            .json_body(OPERATION, body)?;
        self.client.execute(OPERATION, request, &self.headers).await
    }

    pub async fn update_protection_group(
        &self,
        group_id: &str,
        body: Option<&UpdateProtectionGroupV1Request>,
    ) -> Result<ResponseValue<UpdateProtectionGroupResponse>, Error> {
        const OPERATION: &str = "update_protection_group";
        let request = ApiRequest::put("/datasources/protection-groups/{group_id}")
            .path_param("group_id", group_id)
            .json_body(OPERATION, body)?;
        self.client.execute(OPERATION, request, &self.headers).await
    }

    pub async fn delete_protection_group(
        &self,
        group_id: &str,
    ) -> Result<ResponseValue<DeleteProtectionGroupResponse>, Error> {
        let request = ApiRequest::delete("/datasources/protection-groups/{group_id}")
            .path_param("group_id", group_id);
        self.client
            .execute("delete_protection_group", request, &self.headers)
            .await
    }

    pub async fn add_bucket_protection_group(
        &self,
        group_id: &str,
        body: Option<&AddBucketToProtectionGroupV1Request>,
    ) -> Result<ResponseValue<AddBucketProtectionGroupResponse>, Error> {
        const OPERATION: &str = "add_bucket_protection_group";
        let request = ApiRequest::post("/datasources/protection-groups/{group_id}/buckets")
            .path_param("group_id", group_id)
            .json_body(OPERATION, body)?;
        self.client.execute(OPERATION, request, &self.headers).await
    }
}
