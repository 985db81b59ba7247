// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use crate::{ApiRequest, ClumioClient, Error, ListParams, ResponseValue};
use clumio_api::{ListTasksResponse, ReadTaskResponse, UpdateTaskResponse, UpdateTaskV1Request};
use http::{HeaderMap, HeaderValue};

const ACCEPT: &str = crate::media_type!("tasks", 1);

/// Background tasks
#[derive(Debug)]
pub struct TasksV1<'c> {
    client: &'c ClumioClient,
    headers: HeaderMap,
}

impl<'c> TasksV1<'c> {
    pub fn new(client: &'c ClumioClient) -> Self {
        let headers = client
            .config()
            .request_headers(HeaderValue::from_static(ACCEPT));
        Self { client, headers }
    }

    /// Headers sent with every request from this controller
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a list of tasks
    pub async fn list_tasks(
        &self,
        params: &ListParams,
    ) -> Result<ResponseValue<ListTasksResponse>, Error> {
        let request = ApiRequest::get("/tasks").list_params(params);
        self.client
            .execute("list_tasks", request, &self.headers)
            .await
    }

    /// Returns a representation of the specified task
    pub async fn read_task(&self, task_id: &str) -> Result<ResponseValue<ReadTaskResponse>, Error> {
        let request = ApiRequest::get("/tasks/{task_id}").path_param("task_id", task_id);
        self.client
            .execute("read_task", request, &self.headers)
            .await
    }

    /// Manages the specified task. Only aborting a queued or in-progress
    /// task is supported by the service.
    pub async fn update_task(
        &self,
        task_id: &str,
        body: Option<&UpdateTaskV1Request>,
    ) -> Result<ResponseValue<UpdateTaskResponse>, Error> {
        const OPERATION: &str = "update_task";
        let request = ApiRequest::patch("/tasks/{task_id}")
            .path_param("task_id", task_id)
            .json_body(OPERATION, body)?;
        self.client.execute(OPERATION, request, &self.headers).await
    }
}
