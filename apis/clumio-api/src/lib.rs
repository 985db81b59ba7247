// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Clumio REST API wire models
//!
//! This crate holds the typed shapes exchanged with the Clumio REST API and
//! the machinery for moving between them and untyped JSON:
//!
//! - [`types`]: one struct per wire shape (backups, organizational units,
//!   protection groups, tasks, policy definitions) plus the shared list
//!   envelope, HATEOAS links and error body.
//! - [`wire`]: generic hydration ([`from_wire`]) and the reverse
//!   ([`to_wire`]) with one uniform policy for absent and empty data.
//! - [`filter`]: builder for the JSON filter expressions accepted by list
//!   endpoints.
//!
//! HTTP plumbing lives in the `clumio-client` crate.

pub mod filter;
pub mod types;
pub mod wire;

pub use filter::{Filter, FilterError, FilterOp};
pub use types::*;
pub use wire::{Model, WireError, WireRecord, from_wire, from_wire_bytes, to_wire};

/// Service name embedded in every `accept` media type
pub const SERVICE_NAME: &str = "clumio";
