// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VMware VM backup types

use super::common::{
    HateoasLink, HateoasSelfLink, ListLinks, ListResponse, SlaParam, TaskHandle, Timestamp,
};
use crate::wire::null_as_default;
use serde::{Deserialize, Serialize};

/// A virtual disk captured by a VM backup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmwareVmBackupDisk {
    /// Device key of the disk controller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_key: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Disk size in kilobytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_in_kb: Option<i64>,
}

/// Network adapter captured by a VM backup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmwareVmBackupNetwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Links attached to a VM backup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmwareVmBackupLinks {
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<HateoasSelfLink>,
    #[serde(
        rename = "read-vmware-vcenter",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub read_vmware_vcenter: Option<HateoasLink>,
    #[serde(
        rename = "read-vmware-vcenter-vm",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub read_vmware_vcenter_vm: Option<HateoasLink>,
    #[serde(
        rename = "restore-vmware-vm",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub restore_vmware_vm: Option<HateoasLink>,
}

/// A backup of a VMware virtual machine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmwareVmBackup {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<VmwareVmBackupLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacenter_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub disks: Vec<VmwareVmBackupDisk>,
    /// When the backup expires and is purged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    /// The Clumio-assigned ID of the backup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub network_options: Vec<VmwareVmBackupNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_pool_id: Option<String>,
    /// When the backup was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<Timestamp>,
    /// Backup type (`clumio_backup`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcenter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_name: Option<String>,
}

/// Which VM to back up
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmwareVmBackupDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcenter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_id: Option<String>,
}

/// Settings of an on-demand backup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnDemandSetting {
    /// How long to keep the backup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_duration: Option<SlaParam>,
}

/// Request body for an on-demand VM backup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBackupVmwareVmV1Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<VmwareVmBackupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<OnDemandSetting>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

pub type ListBackupVmwareVmsResponse = ListResponse<VmwareVmBackup, ListLinks>;
pub type ReadBackupVmwareVmResponse = VmwareVmBackup;
pub type OnDemandBackupVmwareVmResponse = TaskHandle;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{from_wire, to_wire};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn backup_record() -> Value {
        json!({
            "_links": {
                "_self": {"href": "/backups/vmware/vms/b-42", "templated": false, "type": "get"},
                "restore-vmware-vm": {
                    "href": "/restores/vmware/vms",
                    "templated": false,
                    "type": "post"
                }
            },
            "datacenter_id": "datacenter-2",
            "disks": [
                {"controller_key": 1000, "name": "Hard disk 1", "size_in_kb": 16777216},
                {"controller_key": 1000, "name": "Hard disk 2", "size_in_kb": 8388608}
            ],
            "expiration_timestamp": "2026-11-18T00:00:00Z",
            "id": "b-42",
            "start_timestamp": "2026-10-18T00:00:00Z",
            "type": "clumio_backup",
            "vcenter_id": "vc-1",
            "vm_id": "vm-7",
            "vm_name": "db-primary"
        })
    }

    #[test]
    fn test_backup_round_trip() {
        let record = backup_record();
        let backup: VmwareVmBackup = from_wire(Some(&record)).expect("hydrate backup");
        assert_eq!(backup.kind.as_deref(), Some("clumio_backup"));
        assert_eq!(
            backup
                .links
                .as_ref()
                .and_then(|l| l.restore_vmware_vm.as_ref())
                .and_then(|l| l.kind.as_deref()),
            Some("post")
        );
        assert_eq!(Value::Object(to_wire(&backup).expect("to wire")), record);
    }

    #[test]
    fn test_disks_keep_order_and_count() {
        let record = backup_record();
        let backup: VmwareVmBackup = from_wire(Some(&record)).expect("hydrate backup");
        let wire_disks = record["disks"].as_array().expect("disks array");
        assert_eq!(backup.disks.len(), wire_disks.len());
        for (disk, wire) in backup.disks.iter().zip(wire_disks) {
            let single: VmwareVmBackupDisk = from_wire(Some(wire)).expect("hydrate disk");
            assert_eq!(disk, &single);
        }
        assert_eq!(backup.disks[1].name.as_deref(), Some("Hard disk 2"));
    }

    #[test]
    fn test_create_request_wire_form() {
        let request = CreateBackupVmwareVmV1Request {
            details: Some(VmwareVmBackupDetails {
                vcenter_id: Some("vc-1".into()),
                vm_id: Some("vm-7".into()),
            }),
            settings: Some(OnDemandSetting {
                retention_duration: Some(SlaParam {
                    unit: Some("days".into()),
                    value: Some(7),
                    offsets: Vec::new(),
                }),
            }),
            kind: None,
        };
        assert_eq!(
            Value::Object(to_wire(&request).expect("to wire")),
            json!({
                "details": {"vcenter_id": "vc-1", "vm_id": "vm-7"},
                "settings": {"retention_duration": {"unit": "days", "value": 7}}
            })
        );
    }
}
