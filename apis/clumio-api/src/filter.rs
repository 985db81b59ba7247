// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Filter expressions for list endpoints
//!
//! List endpoints accept a single `filter` query parameter holding a JSON
//! object that maps field names to `{operator: value}` objects:
//!
//! ```text
//! {"vm_id": {"$eq": "vm-7"}, "start_timestamp": {"$lte": "2026-10-01T00:00:00Z"}}
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Comparison operators understood by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    Eq,
    Neq,
    Contains,
    NotContains,
    In,
    Lt,
    Lte,
    Gt,
    Gte,
    BeginsWith,
}

impl FilterOp {
    const ALL: [FilterOp; 10] = [
        FilterOp::Eq,
        FilterOp::Neq,
        FilterOp::Contains,
        FilterOp::NotContains,
        FilterOp::In,
        FilterOp::Lt,
        FilterOp::Lte,
        FilterOp::Gt,
        FilterOp::Gte,
        FilterOp::BeginsWith,
    ];

    /// The operator as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOp::Eq => "$eq",
            FilterOp::Neq => "$neq",
            FilterOp::Contains => "$contains",
            FilterOp::NotContains => "$not_contains",
            FilterOp::In => "$in",
            FilterOp::Lt => "$lt",
            FilterOp::Lte => "$lte",
            FilterOp::Gt => "$gt",
            FilterOp::Gte => "$gte",
            FilterOp::BeginsWith => "$begins_with",
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOp {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| FilterError::UnknownOperator(s.to_string()))
    }
}

/// Errors raised when parsing a filter expression
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("filter is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("filter must be a JSON object of {{field: {{operator: value}}}}")]
    NotAnObject,

    #[error("filter conditions for '{0}' must be an object of operators")]
    InvalidConditions(String),

    #[error("unknown filter operator '{0}'")]
    UnknownOperator(String),
}

/// A filter expression for the `filter` query parameter
///
/// Conditions on the same field are combined; setting the same operator
/// twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Filter {
    conditions: Map<String, Value>,
}

impl Filter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition `field <op> value`
    pub fn with(mut self, field: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        let entry = self
            .conditions
            .entry(field.into())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(ops) = entry {
            ops.insert(op.as_str().to_string(), value.into());
        }
        self
    }

    pub fn eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, FilterOp::Eq, value)
    }

    pub fn neq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, FilterOp::Neq, value)
    }

    pub fn contains(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, FilterOp::Contains, value)
    }

    /// Match any of `values`
    pub fn any_of<I, V>(self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.with(field, FilterOp::In, Value::Array(values))
    }

    pub fn lt(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, FilterOp::Lt, value)
    }

    pub fn lte(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, FilterOp::Lte, value)
    }

    pub fn gt(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, FilterOp::Gt, value)
    }

    pub fn gte(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, FilterOp::Gte, value)
    }

    pub fn begins_with(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, FilterOp::BeginsWith, value)
    }

    /// True when no condition has been added
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Value of the condition `field <op>`, if set
    pub fn condition(&self, field: &str, op: FilterOp) -> Option<&Value> {
        self.conditions.get(field)?.get(op.as_str())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Serialising a map of JSON values cannot fail.
        let text = serde_json::to_string(&self.conditions).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::try_from(serde_json::from_str::<Value>(s)?)
    }
}

impl TryFrom<Value> for Filter {
    type Error = FilterError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(fields) = value else {
            return Err(FilterError::NotAnObject);
        };
        let mut filter = Filter::new();
        for (field, conditions) in fields {
            let Value::Object(ops) = conditions else {
                return Err(FilterError::InvalidConditions(field));
            };
            for (op, value) in ops {
                filter = filter.with(field.clone(), op.parse()?, value);
            }
        }
        Ok(filter)
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Filter::try_from(value).map_err(serde::de::Error::custom)
    }
}
