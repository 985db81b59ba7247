// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Organizational unit types

use super::common::{
    HateoasLink, HateoasSelfLink, ListLinks, ListResponse, ProtectionInfo, TaskHandle, WithTask,
};
use crate::wire::null_as_default;
use serde::{Deserialize, Serialize};

/// A user and the role they hold within an organizational unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserWithRole {
    /// Role ID assigned to the user in this unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Links attached to an organizational unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationalUnitLinks {
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<HateoasSelfLink>,
    #[serde(
        rename = "delete-organizational-unit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delete_organizational_unit: Option<HateoasLink>,
    #[serde(
        rename = "patch-organizational-unit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub patch_organizational_unit: Option<HateoasLink>,
}

/// Resources embedded on request through the `embed` query parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationalUnitEmbedded {
    #[serde(
        rename = "read-policy-definition",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub read_policy_definition: Option<Box<super::policy::PolicyDefinition>>,
}

/// An organizational unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationalUnit {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<OrganizationalUnitEmbedded>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<OrganizationalUnitLinks>,
    /// Number of immediate children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_count: Option<i64>,
    /// Data source types with at least one configured connection
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub configured_datasource_types: Vec<String>,
    /// IDs of every unit below this one
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub descendant_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The Clumio-assigned ID of the unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_info: Option<ProtectionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<i64>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub users: Vec<UserWithRole>,
}

/// Request body for creating an organizational unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOrganizationalUnitV2Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parent unit; the global unit when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub users: Vec<UserWithRole>,
}

/// Users to add to or remove from a unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityGroupAssignmentUpdates {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub add: Vec<UserWithRole>,
    /// User IDs to remove
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub remove: Vec<String>,
}

/// Request body for patching an organizational unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchOrganizationalUnitV2Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<EntityGroupAssignmentUpdates>,
}

/// A user as listed under an organizational unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationalUnitUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

pub type ListOrganizationalUnitsResponse = ListResponse<OrganizationalUnit, ListLinks>;
pub type ReadOrganizationalUnitResponse = OrganizationalUnit;
/// `200 OK`: the unit was created without an asynchronous task
pub type CreateOrganizationalUnitNoTaskResponse = OrganizationalUnit;
/// `202 Accepted`: the unit is being created by a task
pub type CreateOrganizationalUnitResponse = WithTask<OrganizationalUnit>;
/// `200 OK`: the patch was applied immediately
pub type PatchOrganizationalUnitNoTaskResponse = OrganizationalUnit;
/// `202 Accepted`: the patch is being applied by a task
pub type PatchOrganizationalUnitResponse = WithTask<OrganizationalUnit>;
pub type DeleteOrganizationalUnitResponse = TaskHandle;
pub type ListOrganizationalUnitUsersResponse = ListResponse<OrganizationalUnitUser, ListLinks>;
