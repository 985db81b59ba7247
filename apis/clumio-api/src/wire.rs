// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Conversion between wire records and typed models
//!
//! Every model in [`crate::types`] declares its field table through serde
//! attributes, so this module only has to supply the shared entry points and
//! the policy around absent data:
//!
//! - A missing record (`None` or JSON `null`) hydrates to `T::default()`.
//! - A missing key hydrates to `None` (scalars, nested objects) or an empty
//!   `Vec` (lists). An explicit `null` is treated like a missing key. Unknown
//!   keys are ignored.
//! - A present key with the wrong JSON type is an error.
//!
//! The reverse direction omits `None` fields and empty lists.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// An untyped JSON object as sent to or received from the API
pub type WireRecord = serde_json::Map<String, Value>;

/// A typed representation of a wire record
///
/// Implemented for every type that can be hydrated from and flattened back to
/// JSON and that has an all-absent default.
pub trait Model: Serialize + DeserializeOwned + Default {}

impl<T> Model for T where T: Serialize + DeserializeOwned + Default {}

/// Errors raised while converting between wire records and models
#[derive(Error, Debug)]
pub enum WireError {
    /// A present value does not match the declared field type
    #[error("wire record does not match the model: {0}")]
    Shape(#[source] serde_json::Error),

    /// A model could not be serialised to JSON
    #[error("failed to serialise model: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A model serialised to something other than a JSON object
    #[error("expected a JSON object, model serialised to {0}")]
    NotARecord(&'static str),
}

/// Hydrate a model from an optional JSON value
pub fn from_wire<T: Model>(record: Option<&Value>) -> Result<T, WireError> {
    match record {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => T::deserialize(value).map_err(WireError::Shape),
    }
}

/// Hydrate a model from a raw response body
///
/// Empty bodies (as returned by some `DELETE` endpoints) yield the default.
pub fn from_wire_bytes<T: Model>(body: &[u8]) -> Result<T, WireError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value: Value = serde_json::from_slice(body).map_err(WireError::Shape)?;
    from_wire(Some(&value))
}

/// Flatten a model back into a wire record
pub fn to_wire<T: Model>(model: &T) -> Result<WireRecord, WireError> {
    match serde_json::to_value(model).map_err(WireError::Serialize)? {
        Value::Object(record) => Ok(record),
        other => Err(WireError::NotARecord(json_kind(&other))),
    }
}

/// Field deserializer that hydrates an explicit `null` to the default
///
/// Pair with `#[serde(default)]` so that a missing key behaves the same:
///
/// ```ignore
/// #[serde(default, deserialize_with = "crate::wire::null_as_default")]
/// pub users: Vec<UserWithRole>,
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
