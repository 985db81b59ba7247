// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use clumio_api::{
    CreateOrganizationalUnitV2Request, EntityGroupAssignmentUpdates,
    PatchOrganizationalUnitV2Request,
};
use clumio_client::{Error, ListParams, TaskOutcome};
use common::{BASE_PATH, MockTransport, body_json, client};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

fn unit_url(id: &str) -> String {
    format!("{BASE_PATH}/organizational-units/{id}")
}

fn create_request() -> CreateOrganizationalUnitV2Request {
    CreateOrganizationalUnitV2Request {
        name: Some("finance".to_string()),
        parent_id: Some("ou-root".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_completed() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"id":"ou-1"}"#);
    let client = client(&transport);

    let outcome = client
        .organizational_units()
        .create_organizational_unit(None, Some(&create_request()))
        .await
        .unwrap();

    assert_eq!(outcome.status(), StatusCode::OK);
    match outcome.into_inner() {
        TaskOutcome::Completed(ou) => assert_eq!(ou.id.as_deref(), Some("ou-1")),
        other => panic!("expected a completed outcome, got {other:?}"),
    }

    let request = transport.single_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, format!("{BASE_PATH}/organizational-units"));
    assert_eq!(
        request.headers["accept"],
        "application/api.clumio.organizational-units=v2+json"
    );
    let expected = json!({"name": "finance", "parent_id": "ou-root"});
    assert_eq!(body_json(&request), expected);
}

#[tokio::test]
async fn test_create_accepted() {
    let transport = MockTransport::new();
    transport.respond(202, r#"{"task_id":"t-1","id":"ou-2","name":"finance"}"#);
    let client = client(&transport);

    let outcome = client
        .organizational_units()
        .create_organizational_unit(Some("read-policy-definition"), Some(&create_request()))
        .await
        .unwrap()
        .into_inner();

    let accepted = outcome.accepted().expect("accepted outcome");
    assert_eq!(accepted.task_id.as_deref(), Some("t-1"));
    assert_eq!(accepted.resource.id.as_deref(), Some("ou-2"));
    let request = transport.single_request();
    assert_eq!(request.query_string(), "embed=read-policy-definition");
}

#[tokio::test]
async fn test_create_unexpected_status() {
    let transport = MockTransport::new();
    transport.respond(201, r#"{"id":"ou-1"}"#);
    let client = client(&transport);

    let err = client
        .organizational_units()
        .create_organizational_unit(None, None)
        .await
        .expect_err("should fail");

    match err {
        Error::UnexpectedStatus { operation, status } => {
            assert_eq!(operation, "create_organizational_unit");
            assert_eq!(status, StatusCode::CREATED);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(transport.single_request().body.is_none());
}

#[tokio::test]
async fn test_patch_accepted() {
    let transport = MockTransport::new();
    transport.respond(202, r#"{"task_id":"t-5","id":"ou-3"}"#);
    let client = client(&transport);

    let body = PatchOrganizationalUnitV2Request {
        users: Some(EntityGroupAssignmentUpdates {
            remove: vec!["u-9".to_string()],
            ..Default::default()
        }),
        ..Default::default()
    };
    let outcome = client
        .organizational_units()
        .patch_organizational_unit("ou-3", None, Some(&body))
        .await
        .unwrap()
        .into_inner();

    assert!(outcome.is_accepted());
    let request = transport.single_request();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.url, unit_url("ou-3"));
    assert_eq!(body_json(&request), json!({"users": {"remove": ["u-9"]}}));
}

#[tokio::test]
async fn test_read_and_delete() {
    let transport = MockTransport::new();
    let unit = r#"{"id":"ou-3","descendant_ids":["ou-4","ou-5"],"user_count":2}"#;
    transport
        .respond(200, unit)
        .respond(202, r#"{"task_id":"t-6"}"#);
    let client = client(&transport);
    let ous = client.organizational_units();

    let ou = ous.read_organizational_unit("ou-3").await.unwrap();
    assert_eq!(ou.descendant_ids, vec!["ou-4", "ou-5"]);
    assert_eq!(ou.user_count, Some(2));

    let handle = ous.delete_organizational_unit("ou-3").await.unwrap();
    assert_eq!(handle.status(), StatusCode::ACCEPTED);
    assert_eq!(handle.task_id.as_deref(), Some("t-6"));

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].url, unit_url("ou-3"));
}

#[tokio::test]
async fn test_list_users() {
    let transport = MockTransport::new();
    let user = json!({"id": "u-1", "email": "a@example.com", "assigned_role": "r-1"});
    let body = json!({"_embedded": {"items": [user]}});
    transport.respond(200, &body.to_string());
    let client = client(&transport);

    let users = client
        .organizational_units()
        .list_organizational_unit_users("ou-3", &ListParams::new().limit(1))
        .await
        .unwrap();

    let request = transport.single_request();
    assert_eq!(request.url, format!("{}/users", unit_url("ou-3")));
    assert_eq!(request.query_string(), "limit=1");
    assert_eq!(users.items()[0].email.as_deref(), Some("a@example.com"));
}

#[tokio::test]
async fn test_list_tolerates_null_lists() {
    let transport = MockTransport::new();
    let body = json!({
        "_embedded": {"items": [{"id": "ou-1", "descendant_ids": null, "users": null}]},
        "_links": {
            "_self": {"href": "/organizational-units"},
            "create-organizational-unit": null
        },
        "current_count": 1
    });
    transport.respond(200, &body.to_string());
    let client = client(&transport);

    let page = client
        .organizational_units()
        .list_organizational_units(&ListParams::new())
        .await
        .unwrap();

    assert_eq!(page.current_count, Some(1));
    let ou = &page.items()[0];
    assert_eq!(ou.id.as_deref(), Some("ou-1"));
    assert!(ou.descendant_ids.is_empty());
    assert!(ou.users.is_empty());
    let links = page.links.as_ref().expect("links");
    assert!(links.action("create-organizational-unit").is_none());
}

#[tokio::test]
async fn test_list_with_null_items() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"_embedded":{"items":null},"total_count":0}"#);
    let client = client(&transport);

    let page = client
        .organizational_units()
        .list_organizational_units(&ListParams::new())
        .await
        .unwrap();

    assert!(page.items().is_empty());
    assert_eq!(page.total_count, Some(0));
}
