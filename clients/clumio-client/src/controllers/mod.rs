// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Per-resource controllers
//!
//! A controller borrows the [`ClumioClient`](crate::ClumioClient), fixes the
//! versioned accept media type for its resource and builds the full header
//! set once. Each method maps to exactly one endpoint.

mod backup_vmware_vms;
mod organizational_units;
mod policy_definitions;
mod protection_groups;
mod tasks;

pub use backup_vmware_vms::BackupVmwareVmsV1;
pub use organizational_units::OrganizationalUnitsV2;
pub use policy_definitions::PolicyDefinitionsV1;
pub use protection_groups::ProtectionGroupsV1;
pub use tasks::TasksV1;
