// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Policy definition types

use super::common::{
    HateoasLink, HateoasSelfLink, ListLinks, ListResponse, SlaParam, TaskHandle, Timestamp,
    WithTask,
};
use crate::wire::null_as_default;
use serde::{Deserialize, Serialize};

/// A daily time window (`HH:MM`, in the policy's timezone)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

/// How often to back up and how long to keep the result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupSla {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_duration: Option<SlaParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpo_frequency: Option<SlaParam>,
}

/// A single protection operation of a policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyOperation {
    /// `immediate` or `window`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_setting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_aws_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_window_tz: Option<BackupWindow>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub slas: Vec<BackupSla>,
    /// Operation type (e.g. `vmware_vm_backup`, `protection_group_backup`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Links attached to a policy definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyDefinitionLinks {
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<HateoasSelfLink>,
    #[serde(
        rename = "delete-policy-definition",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delete_policy_definition: Option<HateoasLink>,
    #[serde(
        rename = "update-policy-definition",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_policy_definition: Option<HateoasLink>,
}

/// A backup policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyDefinition {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PolicyDefinitionLinks>,
    /// `activated` or `deactivated`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<Timestamp>,
    /// The Clumio-assigned ID of the policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `unlocked` or `updating`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub operations: Vec<PolicyOperation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,
    /// IANA timezone used by backup windows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<Timestamp>,
}

/// Request body for creating or replacing a policy definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePolicyDefinitionV1Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub operations: Vec<PolicyOperation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

pub type UpdatePolicyDefinitionV1Request = CreatePolicyDefinitionV1Request;

pub type ListPolicyDefinitionsResponse = ListResponse<PolicyDefinition, ListLinks>;
pub type ReadPolicyDefinitionResponse = PolicyDefinition;
pub type CreatePolicyDefinitionResponse = PolicyDefinition;
/// `200 OK`: the policy was replaced immediately
pub type UpdatePolicyDefinitionNoTaskResponse = PolicyDefinition;
/// `202 Accepted`: the change is being propagated by a task
pub type UpdatePolicyDefinitionResponse = WithTask<PolicyDefinition>;
pub type DeletePolicyDefinitionResponse = TaskHandle;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{from_wire, to_wire};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn test_policy_nested_slas() {
        let record = json!({
            "activation_status": "activated",
            "id": "p-1",
            "name": "gold",
            "operations": [{
                "action_setting": "window",
                "backup_window_tz": {"start_time": "22:00", "end_time": "04:00"},
                "slas": [
                    {
                        "retention_duration": {"unit": "days", "value": 30},
                        "rpo_frequency": {"unit": "days", "value": 1}
                    },
                    {
                        "retention_duration": {"unit": "months", "value": 12},
                        "rpo_frequency": {"unit": "months", "value": 1, "offsets": [1]}
                    }
                ],
                "type": "vmware_vm_backup"
            }],
            "timezone": "UTC"
        });
        let policy: PolicyDefinition = from_wire(Some(&record)).expect("hydrate policy");
        let slas = &policy.operations[0].slas;
        assert_eq!(slas.len(), 2);
        assert_eq!(
            slas[1].rpo_frequency.as_ref().map(|p| p.offsets.clone()),
            Some(vec![1])
        );
        assert_eq!(Value::Object(to_wire(&policy).expect("to wire")), record);
    }

    #[test]
    fn test_update_task_variant() {
        let accepted: UpdatePolicyDefinitionResponse =
            from_wire(Some(&json!({"id": "p-1", "task_id": "t-9"}))).expect("hydrate");
        assert_eq!(accepted.resource.id.as_deref(), Some("p-1"));
        assert_eq!(accepted.task_id.as_deref(), Some("t-9"));
    }
}
