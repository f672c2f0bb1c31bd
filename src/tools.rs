//! Tool registry – name-based dispatch for orchestration servers.
//!
//! An orchestration server only sees tool names and JSON arguments.
//! [`ToolRegistry`] publishes a [`ToolDescriptor`] per actor operation and
//! routes `(name, args)` calls to the matching [`ActorTools`] method.

use crate::actors::{
    ActorNameArgs, ActorTools, CreateActorArgs, FindActorsByNameArgs, GetActorsInLevelArgs,
    SetActorTransformArgs,
};
use crate::connection::EngineConnection;
use crate::error::{failure_reply, Result, ToolError};
use crate::protocol::commands;
use log::{error, info};
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Advertised tool metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

impl ToolDescriptor {
    fn new<A: JsonSchema>(name: &'static str, description: &'static str) -> Self {
        let input_schema = serde_json::to_value(schema_for!(A)).unwrap_or(Value::Null);
        Self {
            name,
            description,
            input_schema,
        }
    }
}

pub struct ToolRegistry<C> {
    tools: ActorTools<C>,
    descriptors: Vec<ToolDescriptor>,
}

impl<C: EngineConnection> ToolRegistry<C> {
    pub fn new(tools: ActorTools<C>) -> Self {
        let descriptors = vec![
            ToolDescriptor::new::<GetActorsInLevelArgs>(
                commands::GET_ACTORS_IN_LEVEL,
                "Get a list of all actors in the current level.",
            ),
            ToolDescriptor::new::<FindActorsByNameArgs>(
                commands::FIND_ACTORS_BY_NAME,
                "Find actors by name pattern.",
            ),
            ToolDescriptor::new::<CreateActorArgs>(
                commands::CREATE_ACTOR,
                "Create a new actor in the current level.",
            ),
            ToolDescriptor::new::<ActorNameArgs>(
                commands::DELETE_ACTOR,
                "Delete an actor by name.",
            ),
            ToolDescriptor::new::<SetActorTransformArgs>(
                commands::SET_ACTOR_TRANSFORM,
                "Set the transform of an actor.",
            ),
            ToolDescriptor::new::<ActorNameArgs>(
                commands::GET_ACTOR_PROPERTIES,
                "Get all properties of an actor.",
            ),
        ];
        info!("Actor tools registered ({} tools)", descriptors.len());
        Self { tools, descriptors }
    }

    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, name: &str) -> Option<&ToolDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn tools(&self) -> &ActorTools<C> {
        &self.tools
    }

    /// Decode `args` and run the named tool.
    ///
    /// Only dispatch errors surface here; the operations themselves already
    /// fold their failures into normalized results.
    pub fn try_call(&self, name: &str, args: Value) -> Result<Value> {
        let t = &self.tools;
        let out = match name {
            commands::GET_ACTORS_IN_LEVEL => {
                decode::<GetActorsInLevelArgs>(name, args)?;
                Value::Array(t.get_actors_in_level())
            }
            commands::FIND_ACTORS_BY_NAME => {
                Value::Array(t.find_actors_by_name(&decode(name, args)?))
            }
            commands::CREATE_ACTOR => t.create_actor(&decode(name, args)?),
            commands::DELETE_ACTOR => t.delete_actor(&decode(name, args)?),
            commands::SET_ACTOR_TRANSFORM => t.set_actor_transform(&decode(name, args)?),
            commands::GET_ACTOR_PROPERTIES => t.get_actor_properties(&decode(name, args)?),
            other => return Err(ToolError::UnknownTool(other.to_string())),
        };
        Ok(out)
    }

    /// Like [`try_call`](Self::try_call), but dispatch errors become
    /// `{success: false, message}`.
    pub fn call(&self, name: &str, args: Value) -> Value {
        self.try_call(name, args).unwrap_or_else(|e| {
            error!("Tool call '{}' rejected: {}", name, e);
            failure_reply(e.to_string())
        })
    }
}

/// Missing or `null` arguments decode as an empty object.
fn decode<A: DeserializeOwned>(tool: &str, args: Value) -> Result<A> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(args).map_err(|source| ToolError::InvalidArguments {
        tool: tool.to_string(),
        source,
    })
}
