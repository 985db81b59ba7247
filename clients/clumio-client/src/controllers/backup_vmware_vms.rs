// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use crate::{ApiRequest, ClumioClient, Error, ListParams, ResponseValue};
use clumio_api::{
    CreateBackupVmwareVmV1Request, ListBackupVmwareVmsResponse, OnDemandBackupVmwareVmResponse,
    ReadBackupVmwareVmResponse,
};
use http::{HeaderMap, HeaderValue};

const ACCEPT: &str = crate::media_type!("backup-vmware-vms", 1);

/// VMware VM backups
#[derive(Debug)]
pub struct BackupVmwareVmsV1<'c> {
    client: &'c ClumioClient,
    headers: HeaderMap,
}

impl<'c> BackupVmwareVmsV1<'c> {
    pub fn new(client: &'c ClumioClient) -> Self {
        let headers = client
            .config()
            .request_headers(HeaderValue::from_static(ACCEPT));
        Self { client, headers }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub async fn list_backup_vmware_vms(
        &self,
        params: &ListParams,
    ) -> Result<ResponseValue<ListBackupVmwareVmsResponse>, Error> {
        let request = ApiRequest::get("/backups/vmware/vms").list_params(params);
        self.client
            .execute("list_backup_vmware_vms", request, &self.headers)
            .await
    }

    pub async fn read_backup_vmware_vm(
        &self,
        backup_id: &str,
    ) -> Result<ResponseValue<ReadBackupVmwareVmResponse>, Error> {
        let request =
            ApiRequest::get("/backups/vmware/vms/{backup_id}").path_param("backup_id", backup_id);
        self.client
            .execute("read_backup_vmware_vm", request, &self.headers)
            .await
    }

    /// Start an on-demand backup; the answer is the handle of the task
    /// performing it
    pub async fn create_backup_vmware_vm(
        &self,
        body: Option<&CreateBackupVmwareVmV1Request>,
    ) -> Result<ResponseValue<OnDemandBackupVmwareVmResponse>, Error> {
        const OPERATION: &str = "create_backup_vmware_vm";
        let request = ApiRequest::post("/backups/vmware/vms")
            .json_body(OPERATION, body)?;
        self.client.execute(OPERATION, request, &self.headers).await
    }
}
