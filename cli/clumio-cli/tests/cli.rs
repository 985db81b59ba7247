// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Argument handling of the `clumio` binary. None of these reach the
//! network except the unreachable-endpoint case.

use assert_cmd::Command;
use predicates::prelude::*;

fn clumio() -> Command {
    let mut cmd = Command::cargo_bin("clumio").expect("clumio binary built");
    for var in [
        "CLUMIO_API_BASE_PATH",
        "CLUMIO_API_TOKEN",
        "CLUMIO_ORGANIZATIONAL_UNIT_CONTEXT",
        "CLUMIO_TIMEOUT_SECS",
        "CLUMIO_RAW_RESPONSE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Running with no arguments shows usage information.
#[test]
fn no_params() {
    clumio()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("clumio"));
}

#[test]
fn help_lists_resource_groups() {
    clumio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("backups"))
        .stdout(predicate::str::contains("ous"))
        .stdout(predicate::str::contains("protection-groups"))
        .stdout(predicate::str::contains("tasks"))
        .stdout(predicate::str::contains("policies"));
}

#[test]
fn task_get_requires_id() {
    clumio()
        .args(["tasks", "get"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<TASK_ID>"))
        .stderr(predicate::str::contains("required"));
}

#[test]
fn backup_create_requires_vm() {
    clumio()
        .args(["backups", "create", "--vcenter-id", "vc-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--vm-id"));
}

#[test]
fn malformed_header_rejected() {
    clumio()
        .args(["--header", "no-equals-sign", "tasks", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=VALUE"));
}

#[test]
fn malformed_filter_rejected() {
    clumio()
        .args(["tasks", "list", "--filter", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--filter"));
}

#[test]
fn invalid_base_path_rejected() {
    clumio()
        .args(["--base-path", "ftp://example.com", "tasks", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid client configuration"));
}

#[test]
fn unreachable_endpoint_reports_transport_error() {
    clumio()
        .args([
            "--base-path",
            "http://127.0.0.1:1",
            "--timeout",
            "5",
            "tasks",
            "get",
            "t-1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
