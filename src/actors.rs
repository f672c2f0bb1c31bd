//! ActorTools – the six actor operations exposed to tool callers.
//!
//! Every operation comes in two forms:
//!
//! - `try_*` returns `Result<T, ToolError>` so callers can see what failed;
//! - the plain form never fails. It logs the error and returns the
//!   operation's normalized default instead (`[]`, `{}` or
//!   `{success: false, message}`).
//!
//! Failures reported by the engine inside a reply are relayed unchanged.

use crate::connection::EngineConnection;
use crate::error::{failure_reply, Result, ToolError};
use crate::geometry::{resolve_triple, validate_triple};
use crate::protocol::{
    self, commands, ActorName, CreateActor, FindActorsByName, NoParams, SetActorTransform,
};
use crate::response::{normalize, remote_failure, NormalizeMode, ReplyShape};
use crate::types::GeometryField;
use log::{debug, error, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Tool arguments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetActorsInLevelArgs {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FindActorsByNameArgs {
    /// Name pattern to match actors against
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateActorArgs {
    /// Name of the new actor
    pub name: String,
    /// Actor type, e.g. "cube", "sphere", "point_light" (case-insensitive)
    #[serde(rename = "type")]
    pub actor_type: String,
    /// World location [x, y, z]; defaults to [0, 0, 0]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<[f64; 3]>")]
    pub location: Option<Value>,
    /// Rotation [pitch, yaw, roll] in degrees; defaults to [0, 0, 0]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<[f64; 3]>")]
    pub rotation: Option<Value>,
    /// Scale [x, y, z]; defaults to [1, 1, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<[f64; 3]>")]
    pub scale: Option<Value>,
}

impl CreateActorArgs {
    pub fn new(name: impl Into<String>, actor_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actor_type: actor_type.into(),
            location: None,
            rotation: None,
            scale: None,
        }
    }

    pub fn location(mut self, v: [f64; 3]) -> Self {
        self.location = Some(json!(v));
        self
    }

    pub fn rotation(mut self, v: [f64; 3]) -> Self {
        self.rotation = Some(json!(v));
        self
    }

    pub fn scale(mut self, v: [f64; 3]) -> Self {
        self.scale = Some(json!(v));
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ActorNameArgs {
    /// Name of the target actor
    pub name: String,
}

impl ActorNameArgs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SetActorTransformArgs {
    /// Name of the target actor
    pub name: String,
    /// New location [x, y, z]; omitted leaves it unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<[f64; 3]>")]
    pub location: Option<Value>,
    /// New rotation [pitch, yaw, roll]; omitted leaves it unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<[f64; 3]>")]
    pub rotation: Option<Value>,
    /// New scale [x, y, z]; omitted leaves it unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<[f64; 3]>")]
    pub scale: Option<Value>,
}

impl SetActorTransformArgs {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
            rotation: None,
            scale: None,
        }
    }

    pub fn location(mut self, v: [f64; 3]) -> Self {
        self.location = Some(json!(v));
        self
    }

    pub fn rotation(mut self, v: [f64; 3]) -> Self {
        self.rotation = Some(json!(v));
        self
    }

    pub fn scale(mut self, v: [f64; 3]) -> Self {
        self.scale = Some(json!(v));
        self
    }
}

// ---------------------------------------------------------------------------
// ActorTools
// ---------------------------------------------------------------------------

/// Actor operations bound to one engine connection.
///
/// Holds no state besides the connection; every call is independent.
pub struct ActorTools<C> {
    conn: C,
}

impl<C: EngineConnection> ActorTools<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &C {
        &self.conn
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn try_get_actors_in_level(&self) -> Result<Vec<Value>> {
        let reply = self.send(commands::GET_ACTORS_IN_LEVEL, &NoParams {})?;
        Ok(normalize(reply.as_ref(), &NormalizeMode::ListContent)?.into_items())
    }

    /// All actors in the current level; `[]` on any failure.
    pub fn get_actors_in_level(&self) -> Vec<Value> {
        self.try_get_actors_in_level().unwrap_or_else(|e| {
            error!("Error getting actors: {}", e);
            Vec::new()
        })
    }

    pub fn try_find_actors_by_name(&self, args: &FindActorsByNameArgs) -> Result<Vec<Value>> {
        let payload = FindActorsByName {
            pattern: args.pattern.clone(),
        };
        let reply = self.send(commands::FIND_ACTORS_BY_NAME, &payload)?;
        Ok(normalize(reply.as_ref(), &NormalizeMode::list_field("actors"))?.into_items())
    }

    /// Actors whose name matches `pattern`; `[]` on any failure.
    pub fn find_actors_by_name(&self, args: &FindActorsByNameArgs) -> Vec<Value> {
        self.try_find_actors_by_name(args).unwrap_or_else(|e| {
            error!("Error finding actors: {}", e);
            Vec::new()
        })
    }

    pub fn try_get_actor_properties(&self, args: &ActorNameArgs) -> Result<Value> {
        self.named_passthrough(commands::GET_ACTOR_PROPERTIES, &args.name)
    }

    pub fn get_actor_properties(&self, args: &ActorNameArgs) -> Value {
        self.try_get_actor_properties(args).unwrap_or_else(|e| {
            error!("Error getting properties: {}", e);
            empty_reply()
        })
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Create an actor. Missing geometry falls back to the field defaults and
    /// the type is upper-cased before sending.
    pub fn try_create_actor(&self, args: &CreateActorArgs) -> Result<Value> {
        let payload = CreateActor {
            name: args.name.clone(),
            actor_type: args.actor_type.to_uppercase(),
            location: resolve_triple(GeometryField::Location, args.location.as_ref())?,
            rotation: resolve_triple(GeometryField::Rotation, args.rotation.as_ref())?,
            scale: resolve_triple(GeometryField::Scale, args.scale.as_ref())?,
        };

        info!(
            "Creating actor '{}' of type '{}' at {} rot {} scale {}",
            payload.name, payload.actor_type, payload.location, payload.rotation, payload.scale
        );
        let reply = self.send(commands::CREATE_ACTOR, &payload)?;

        match ReplyShape::detect(reply.as_ref()) {
            ReplyShape::Empty => Err(ToolError::NoResponse),
            _ => {
                let reply = reply.unwrap_or_default();
                info!("Actor creation response: {}", reply);
                Ok(reply)
            }
        }
    }

    /// Create an actor; any failure becomes `{success: false, message}`.
    pub fn create_actor(&self, args: &CreateActorArgs) -> Value {
        self.try_create_actor(args).unwrap_or_else(|e| {
            let reply = match e {
                ToolError::InvalidGeometry { .. } | ToolError::NoResponse => e.failure_reply(),
                _ => failure_reply(format!("Error creating actor: {}", e)),
            };
            error!("Actor creation failed: {}", reply["message"]);
            reply
        })
    }

    pub fn try_delete_actor(&self, args: &ActorNameArgs) -> Result<Value> {
        self.named_passthrough(commands::DELETE_ACTOR, &args.name)
    }

    pub fn delete_actor(&self, args: &ActorNameArgs) -> Value {
        self.try_delete_actor(args).unwrap_or_else(|e| {
            error!("Error deleting actor: {}", e);
            empty_reply()
        })
    }

    /// Update an actor's transform. Only supplied fields are sent; omitted
    /// fields keep their current engine-side value.
    pub fn try_set_actor_transform(&self, args: &SetActorTransformArgs) -> Result<Value> {
        let payload = SetActorTransform {
            name: args.name.clone(),
            location: validate_triple(GeometryField::Location, args.location.as_ref())?,
            rotation: validate_triple(GeometryField::Rotation, args.rotation.as_ref())?,
            scale: validate_triple(GeometryField::Scale, args.scale.as_ref())?,
        };
        let reply = self.send(commands::SET_ACTOR_TRANSFORM, &payload)?;
        passthrough(reply)
    }

    /// Invalid geometry yields `{success: false, message}`; other failures `{}`.
    pub fn set_actor_transform(&self, args: &SetActorTransformArgs) -> Value {
        self.try_set_actor_transform(args)
            .unwrap_or_else(|e| match e {
                ToolError::InvalidGeometry { .. } => e.failure_reply(),
                _ => {
                    error!("Error setting transform: {}", e);
                    empty_reply()
                }
            })
    }

    // -----------------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------------

    fn named_passthrough(&self, command: &str, name: &str) -> Result<Value> {
        let payload = ActorName {
            name: name.to_string(),
        };
        let reply = self.send(command, &payload)?;
        passthrough(reply)
    }

    /// Encode `payload`, send it, and log any failure the engine reports.
    fn send<T: Serialize>(&self, command: &str, payload: &T) -> Result<Option<Value>> {
        let params = protocol::to_params(payload)?;
        debug!("Sending '{}' with params: {:?}", command, params);

        let reply = self.conn.send_command(command, &params)?;

        if let Some(message) = reply.as_ref().and_then(remote_failure) {
            warn!("Engine reported failure for '{}': {}", command, message);
        }
        Ok(reply)
    }
}

fn passthrough(reply: Option<Value>) -> Result<Value> {
    Ok(normalize(
        reply.as_ref(),
        &NormalizeMode::PassthroughOrDefault(empty_reply()),
    )?
    .into_value())
}

fn empty_reply() -> Value {
    Value::Object(Default::default())
}
