// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for clumio-client

use crate::transport::TransportError;
use clumio_api::{ErrorResponse, WireError};
use http::StatusCode;
use thiserror::Error;

/// Errors returned by controller methods
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a 4xx or 5xx status
    #[error("Error occurred while executing {operation}: {message}")]
    Api {
        /// Name of the controller method that failed
        operation: &'static str,
        status: StatusCode,
        /// Message extracted from the response by the transport
        message: String,
        /// Structured error body, when the response carried one
        body: Option<ErrorResponse>,
    },

    /// A status-branching endpoint answered with neither of its documented
    /// success codes
    #[error("{operation} returned unexpected status {status}")]
    UnexpectedStatus {
        operation: &'static str,
        status: StatusCode,
    },

    /// The request model could not be turned into a JSON body
    #[error("failed to encode {operation} request body: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: WireError,
    },

    /// The response body did not match the declared model
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: WireError,
    },

    /// No response was received; passed through from the transport untouched
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// The controller method the error was raised for, if known
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::Api { operation, .. }
            | Error::UnexpectedStatus { operation, .. }
            | Error::Encode { operation, .. }
            | Error::Decode { operation, .. } => Some(operation),
            Error::Transport(_) => None,
        }
    }

    /// HTTP status of the response that caused the error, if there was one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } | Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while building a [`crate::Configuration`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid base path '{value}': {reason}")]
    InvalidBasePath { value: String, reason: String },

    #[error("invalid header name '{0}'")]
    InvalidHeaderName(String),

    #[error("invalid value for header '{0}'")]
    InvalidHeaderValue(String),

    #[error("invalid value '{value}' for environment variable {name}")]
    InvalidEnv { name: &'static str, value: String },
}
