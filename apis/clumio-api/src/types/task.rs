// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Task types

use super::common::{HateoasLink, HateoasSelfLink, ListLinks, ListResponse, Timestamp};
use serde::{Deserialize, Serialize};

/// The entity a task operates on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Entity type (e.g. `vmware_vm`, `aws_ebs_volume`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Human-readable value (e.g. a VM name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Links attached to a task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskLinks {
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<HateoasSelfLink>,
    #[serde(
        rename = "update-task",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_task: Option<HateoasLink>,
}

/// An asynchronous task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<TaskLinks>,
    /// Task category (e.g. `backup`, `restore`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<Timestamp>,
    /// The Clumio-assigned ID of the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,
    /// Entity that contains the primary entity (e.g. the vCenter of a VM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_entity: Option<TaskEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_entity: Option<TaskEntity>,
    /// Completion percentage, 0 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<Timestamp>,
    /// Task status (`queued`, `in_progress`, `completed`, `failed`, `aborted`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Request body for updating a task
///
/// Only `status = "aborted"` is accepted by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTaskV1Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateTaskV1Request {
    /// Request aborting the task
    pub fn abort() -> Self {
        Self {
            status: Some("aborted".to_string()),
        }
    }
}

pub type ListTasksResponse = ListResponse<Task, ListLinks>;
pub type ReadTaskResponse = Task;
pub type UpdateTaskResponse = Task;
