//! Error taxonomy for actor tool calls.
//!
//! None of these ever escape an infallible tool entry point: each operation
//! converts them into its normalized default (see [`ToolError::failure_reply`]).
//! Failures reported by the engine itself are not errors here; they are
//! relayed to the caller as part of the reply.

use crate::types::GeometryField;
use serde_json::{json, Value};
use thiserror::Error;

/// Failure reported by the external engine connection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectionError {
    /// No connection to the engine could be acquired.
    #[error("Unreal Engine connection unavailable: {0}")]
    Unavailable(String),
    /// The connection exists but the exchange failed.
    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error("Invalid {field} format. Must be a list of 3 float values.")]
    InvalidGeometry { field: GeometryField },

    #[error("malformed reply: expected {expected}, got {found}")]
    MalformedReply {
        expected: &'static str,
        found: String,
    },

    #[error("No response from Unreal Engine")]
    NoResponse,

    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("invalid arguments for '{tool}': {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode command parameters: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ToolError {
    /// `{success: false, message}` mapping for this error.
    pub fn failure_reply(&self) -> Value {
        failure_reply(self.to_string())
    }
}

/// Build the normalized failure mapping returned by mutating operations.
pub fn failure_reply(message: impl Into<String>) -> Value {
    json!({ "success": false, "message": message.into() })
}

pub type Result<T> = std::result::Result<T, ToolError>;
