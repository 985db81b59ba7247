// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shapes shared across resources: HATEOAS links, list envelopes, task
//! handles and error bodies

use super::task::Task;
use crate::wire::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// RFC3339 timestamp
pub type Timestamp = String;

/// A HATEOAS link to a related resource or action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HateoasLink {
    /// The URI for the referenced operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Whether `href` is a URI template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
    /// HTTP method of the referenced operation
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Link back to the resource itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HateoasSelfLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Navigation links of a list envelope
///
/// Resource-specific action links (for example `create-backup-vmware-vm`)
/// are kept in `actions` under their wire names. A link sent as `null` is
/// kept as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListLinks {
    #[serde(rename = "_first", default, skip_serializing_if = "Option::is_none")]
    pub first: Option<HateoasLink>,
    #[serde(rename = "_last", default, skip_serializing_if = "Option::is_none")]
    pub last: Option<HateoasLink>,
    #[serde(rename = "_next", default, skip_serializing_if = "Option::is_none")]
    pub next: Option<HateoasLink>,
    #[serde(rename = "_prev", default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<HateoasLink>,
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<HateoasSelfLink>,
    /// Resource-specific action links
    #[serde(flatten)]
    pub actions: BTreeMap<String, Option<HateoasLink>>,
}

impl ListLinks {
    /// The action link named `name`, if present and not `null`
    pub fn action(&self, name: &str) -> Option<&HateoasLink> {
        self.actions.get(name).and_then(Option::as_ref)
    }
}

/// The `_embedded` part of a list envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEmbedded<T> {
    #[serde(
        default = "Vec::new",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<T>,
}

impl<T> Default for ListEmbedded<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Offset pagination envelope returned by every list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize, L: Serialize",
    deserialize = "T: Deserialize<'de>, L: Deserialize<'de>"
))]
pub struct ListResponse<T, L = ListLinks> {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<ListEmbedded<T>>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<L>,
    /// Number of items on this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_count: Option<i64>,
    /// Filter the server applied, echoed back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_applied: Option<String>,
    /// Maximum number of items per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page number of this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Total number of items across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Total number of pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages_count: Option<i64>,
}

impl<T, L> Default for ListResponse<T, L> {
    fn default() -> Self {
        Self {
            embedded: None,
            links: None,
            current_count: None,
            filter_applied: None,
            limit: None,
            start: None,
            total_count: None,
            total_pages_count: None,
        }
    }
}

impl<T, L> ListResponse<T, L> {
    /// Items on this page, empty when the envelope carried none
    pub fn items(&self) -> &[T] {
        self.embedded
            .as_ref()
            .map(|embedded| embedded.items.as_slice())
            .unwrap_or_default()
    }

    /// Consume the envelope, keeping only its items
    pub fn into_items(self) -> Vec<T> {
        self.embedded
            .map(|embedded| embedded.items)
            .unwrap_or_default()
    }
}

/// Links returned with an asynchronous task reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskHandleLinks {
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<HateoasSelfLink>,
    #[serde(rename = "read-task", default, skip_serializing_if = "Option::is_none")]
    pub read_task: Option<HateoasLink>,
}

/// Embedded task details, present when the caller asked for `read-task`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskHandleEmbedded {
    #[serde(rename = "read-task", default, skip_serializing_if = "Option::is_none")]
    pub read_task: Option<Box<Task>>,
}

/// Response of an operation that spawned an asynchronous task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskHandle {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<TaskHandleEmbedded>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<TaskHandleLinks>,
    /// The Clumio-assigned ID of the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

/// A resource together with the task that will finish applying it
///
/// This is the `202 Accepted` shape of endpoints that may or may not need
/// an asynchronous task to complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WithTask<T> {
    #[serde(flatten)]
    pub resource: T,
    /// The Clumio-assigned ID of the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

/// Body of endpoints that return an empty JSON object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyResponse {}

/// A single entry of an error response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

/// Body returned with 4xx and 5xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub errors: Vec<ErrorDetail>,
}

impl ErrorResponse {
    /// All non-empty error messages joined with `"; "`
    pub fn message(&self) -> Option<String> {
        let messages: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.error_message.as_deref())
            .filter(|m| !m.is_empty())
            .collect();
        if messages.is_empty() {
            None
        } else {
            Some(messages.join("; "))
        }
    }
}

/// Retention or RPO parameter of an SLA (`{"unit": "days", "value": 30}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlaParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    /// Day offsets, only meaningful for weekly and monthly RPOs
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub offsets: Vec<i64>,
}

/// Where a resource's protection policy comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtectionInfo {
    /// ID of the entity the policy is inherited from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheriting_entity_id: Option<String>,
    /// Type of the entity the policy is inherited from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheriting_entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
}
