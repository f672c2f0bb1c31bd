//! Actor command wire payloads.
//!
//! This module owns **every parameter mapping that crosses the connection
//! boundary** between the actor tools and the engine-side command handlers.
//!
//! | Command                | Params                                      |
//! |------------------------|---------------------------------------------|
//! | `get_actors_in_level`  | *(empty)*                                   |
//! | `find_actors_by_name`  | pattern                                     |
//! | `create_actor`         | name, type, location, rotation, scale       |
//! | `delete_actor`         | name                                        |
//! | `set_actor_transform`  | name, location?, rotation?, scale?          |
//! | `get_actor_properties` | name                                        |
//!
//! ## Design rules
//!
//! 1. Every struct serialises to a flat JSON object with snake_case keys.
//! 2. Geometry is always a 3-element float array.
//! 3. Optional transform fields are omitted entirely, never sent as `null`.

use crate::types::Vec3;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Query payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FindActorsByName {
    pub pattern: String,
}

/// Payload for commands addressed to a single actor by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActorName {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Mutating payloads
// ---------------------------------------------------------------------------

/// Fully-resolved `create_actor` payload; every geometry field is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateActor {
    pub name: String,
    /// Engine actor class, always upper-cased (e.g. `CUBE`, `POINT_LIGHT`).
    #[serde(rename = "type")]
    pub actor_type: String,
    pub location: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// `set_actor_transform` payload; absent fields are left unchanged by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetActorTransform {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// A command as it is handed to the connection: name plus parameter mapping.
///
/// Serialises as `{"type": <command>, "params": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandEnvelope {
    #[serde(rename = "type")]
    pub command: String,
    pub params: Map<String, Value>,
}

impl CommandEnvelope {
    pub fn new(command: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            command: command.into(),
            params,
        }
    }
}

/// Encode a payload struct into the parameter mapping sent to the engine.
pub fn to_params<T: Serialize>(payload: &T) -> serde_json::Result<Map<String, Value>> {
    match serde_json::to_value(payload)? {
        Value::Object(map) => Ok(map),
        other => Err(serde::ser::Error::custom(format!(
            "command parameters must encode to an object, got {}",
            other
        ))),
    }
}

// ---------------------------------------------------------------------------
// Command names
// ---------------------------------------------------------------------------

/// All actor command names understood by the engine plugin, as constants.
pub mod commands {
    pub const GET_ACTORS_IN_LEVEL: &str = "get_actors_in_level";
    pub const FIND_ACTORS_BY_NAME: &str = "find_actors_by_name";
    pub const CREATE_ACTOR: &str = "create_actor";
    pub const DELETE_ACTOR: &str = "delete_actor";
    pub const SET_ACTOR_TRANSFORM: &str = "set_actor_transform";
    pub const GET_ACTOR_PROPERTIES: &str = "get_actor_properties";

    pub const ALL: [&str; 6] = [
        GET_ACTORS_IN_LEVEL,
        FIND_ACTORS_BY_NAME,
        CREATE_ACTOR,
        DELETE_ACTOR,
        SET_ACTOR_TRANSFORM,
        GET_ACTOR_PROPERTIES,
    ];
}
