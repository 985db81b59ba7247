// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Clumio wire models
//!
//! All models follow the same field conventions so that [`crate::wire`] can
//! treat them uniformly:
//!
//! - Scalars and nested objects are `Option<T>` with
//!   `#[serde(default, skip_serializing_if = "Option::is_none")]`.
//! - Lists are `Vec<T>` with
//!   `#[serde(default, skip_serializing_if = "Vec::is_empty")]`.
//! - Wire names that are not valid or idiomatic Rust identifiers are renamed:
//!   `_links` to `links`, `_embedded` to `embedded`, `_self` to `self_link`,
//!   `type` to `kind`, and hyphenated action links to snake_case.

pub mod backup;
pub mod common;
pub mod organizational_unit;
pub mod policy;
pub mod protection_group;
pub mod task;

pub use backup::*;
pub use common::*;
pub use organizational_unit::*;
pub use policy::*;
pub use protection_group::*;
pub use task::*;
