// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Protection group types (S3 object selections)

use super::common::{
    EmptyResponse, HateoasLink, HateoasSelfLink, ListLinks, ListResponse, ProtectionInfo,
    Timestamp,
};
use crate::wire::null_as_default;
use serde::{Deserialize, Serialize};

/// An object key prefix to include, with optional sub-prefixes to skip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefixFilter {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub excluded_sub_prefixes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Which objects of the group's buckets are protected
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest_last_modified_timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_last_modified_timestamp: Option<Timestamp>,
    /// Only back up the latest version of each object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version_only: Option<bool>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub prefix_filters: Vec<PrefixFilter>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub storage_classes: Vec<String>,
}

/// Backup compliance counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceStats {
    #[serde(rename = "COMPLIANT", default, skip_serializing_if = "Option::is_none")]
    pub compliant: Option<i64>,
    #[serde(
        rename = "DEACTIVATED",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deactivated: Option<i64>,
    #[serde(
        rename = "NON_COMPLIANT",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub non_compliant: Option<i64>,
    #[serde(rename = "SEEDING", default, skip_serializing_if = "Option::is_none")]
    pub seeding: Option<i64>,
    #[serde(
        rename = "WAIT_FOR_SEEDING",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wait_for_seeding: Option<i64>,
}

/// Links attached to a protection group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtectionGroupLinks {
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<HateoasSelfLink>,
    #[serde(
        rename = "delete-protection-group",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delete_protection_group: Option<HateoasLink>,
    #[serde(
        rename = "update-protection-group",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_protection_group: Option<HateoasLink>,
    #[serde(
        rename = "read-policy-definition",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub read_policy_definition: Option<HateoasLink>,
}

/// A protection group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtectionGroup {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProtectionGroupLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_target_aws_region: Option<String>,
    /// Number of buckets in the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_count: Option<i64>,
    /// Filter expression selecting buckets to add automatically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_stats: Option<ComplianceStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The Clumio-assigned ID of the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_backup_timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_filter: Option<ObjectFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_info: Option<ProtectionInfo>,
    /// `protected`, `unprotected` or `unsupported`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_backed_up_object_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_backed_up_size_bytes: Option<i64>,
    /// Incremented on every update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// Request body for creating a protection group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProtectionGroupV1Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_filter: Option<ObjectFilter>,
}

/// Request body for replacing a protection group's settings
pub type UpdateProtectionGroupV1Request = CreateProtectionGroupV1Request;

/// Request body for adding a bucket to a protection group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddBucketToProtectionGroupV1Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
}

/// A bucket's membership in a protection group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtectionGroupBucket {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProtectionGroupLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by_bucket_rule: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by_user: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_status: Option<String>,
}

pub type ListProtectionGroupsResponse = ListResponse<ProtectionGroup, ListLinks>;
pub type ReadProtectionGroupResponse = ProtectionGroup;
pub type CreateProtectionGroupResponse = ProtectionGroup;
pub type UpdateProtectionGroupResponse = ProtectionGroup;
pub type DeleteProtectionGroupResponse = EmptyResponse;
pub type AddBucketProtectionGroupResponse = ProtectionGroupBucket;
