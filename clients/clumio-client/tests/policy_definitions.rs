// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use clumio_api::{BackupSla, CreatePolicyDefinitionV1Request, PolicyOperation, SlaParam};
use clumio_client::{Error, ListParams, TaskOutcome};
use common::{BASE_PATH, MockTransport, body_json, client};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn policy_request() -> CreatePolicyDefinitionV1Request {
    CreatePolicyDefinitionV1Request {
        name: Some("gold".to_string()),
        activation_status: Some("activated".to_string()),
        operations: vec![PolicyOperation {
            action_setting: Some("immediate".to_string()),
            kind: Some("aws_ebs_volume_backup".to_string()),
            slas: vec![BackupSla {
                retention_duration: Some(SlaParam {
                    unit: Some("days".to_string()),
                    value: Some(30),
                    ..Default::default()
                }),
                rpo_frequency: Some(SlaParam {
                    unit: Some("days".to_string()),
                    value: Some(1),
                    ..Default::default()
                }),
            }],
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_body() {
    let transport = MockTransport::new();
    let body = r#"{"id":"p-1","name":"gold","lock_status":"unlocked"}"#;
    transport.respond(200, body);
    let client = client(&transport);

    let policy = client
        .policy_definitions()
        .create_policy_definition(Some(&policy_request()))
        .await
        .unwrap();

    let request = transport.single_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, format!("{BASE_PATH}/policies/definitions"));
    assert_eq!(
        body_json(&request),
        json!({
            "name": "gold",
            "activation_status": "activated",
            "operations": [{
                "action_setting": "immediate",
                "type": "aws_ebs_volume_backup",
                "slas": [{
                    "retention_duration": {"unit": "days", "value": 30},
                    "rpo_frequency": {"unit": "days", "value": 1}
                }]
            }]
        })
    );
    assert_eq!(policy.lock_status.as_deref(), Some("unlocked"));
}

#[tokio::test]
async fn test_list_and_read_with_embed() {
    let transport = MockTransport::new();
    let list = r#"{"_embedded":{"items":[{"id":"p-1"},{"id":"p-2"}]}}"#;
    let policy = r#"{"id":"p-2","operations":[{"type":"mssql_database_backup"}]}"#;
    transport.respond(200, list).respond(200, policy);
    let client = client(&transport);
    let policies = client.policy_definitions();

    let list = policies
        .list_policy_definitions(&ListParams::new(), Some("read-policy-protection-info"))
        .await
        .unwrap();
    assert_eq!(list.items().len(), 2);

    let policy = policies.read_policy_definition("p-2", None).await.unwrap();
    let kind = policy.operations[0].kind.as_deref();
    assert_eq!(kind, Some("mssql_database_backup"));

    let requests = transport.requests();
    let embed = requests[0].query_string();
    assert_eq!(embed, "embed=read-policy-protection-info");
    let url = format!("{BASE_PATH}/policies/definitions/p-2");
    assert_eq!(requests[1].url, url);
    assert!(requests[1].query.is_empty());
}

#[test_case(200, false ; "applied immediately")]
#[test_case(202, true ; "scheduled as task")]
#[tokio::test]
async fn test_update_branches_on_status(status: u16, accepted: bool) {
    let transport = MockTransport::new();
    transport.respond(status, r#"{"id":"p-1","task_id":"t-8"}"#);
    let client = client(&transport);

    let outcome = client
        .policy_definitions()
        .update_policy_definition("p-1", None, Some(&policy_request()))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(outcome.is_accepted(), accepted);
    match outcome {
        TaskOutcome::Completed(policy) => assert_eq!(policy.id.as_deref(), Some("p-1")),
        TaskOutcome::Accepted(with_task) => {
            assert_eq!(with_task.task_id.as_deref(), Some("t-8"));
            assert_eq!(with_task.resource.id.as_deref(), Some("p-1"));
        }
    }
    assert_eq!(transport.single_request().method, Method::PUT);
}

#[tokio::test]
async fn test_update_unexpected_status() {
    let transport = MockTransport::new();
    transport.respond(204, "");
    let client = client(&transport);

    let err = client
        .policy_definitions()
        .update_policy_definition("p-1", None, None)
        .await
        .expect_err("should fail");
    assert!(matches!(
        err,
        Error::UnexpectedStatus { status, .. } if status == StatusCode::NO_CONTENT
    ));
}

#[tokio::test]
async fn test_delete_returns_task() {
    let transport = MockTransport::new();
    let body = r#"{"task_id":"t-9","_links":{"_self":{"href":"/tasks/t-9"}}}"#;
    transport.respond(202, body);
    let client = client(&transport);

    let handle = client
        .policy_definitions()
        .delete_policy_definition("p-1")
        .await
        .unwrap();

    assert_eq!(transport.single_request().method, Method::DELETE);
    assert_eq!(handle.task_id.as_deref(), Some("t-9"));
}
