//! Unreal MCP actor tools
//!
//! Forwards actor commands from a tool-orchestration server into a running
//! Unreal Engine instance and normalises the engine's replies.
//!
//! ## Architecture
//!
//! ```text
//! ToolRegistry  (tools.rs)        ← name + JSON args dispatch
//!   └── ActorTools  (actors.rs)   ← the six actor operations
//!         ├── geometry.rs         ← location / rotation / scale validation
//!         ├── response.rs         ← reply shape detection + normalisation
//!         └── EngineConnection    (connection.rs, injected)
//! ```
//!
//! The socket connection to the engine is owned by the caller; anything
//! implementing [`EngineConnection`] can be plugged in.

pub mod actors;
pub mod connection;
pub mod error;
pub mod geometry;
pub mod protocol;
pub mod response;
pub mod tools;
pub mod types;

// Runner configuration requires the `cli` feature.
#[cfg(feature = "cli")]
pub mod config;

pub use actors::{
    ActorNameArgs, ActorTools, CreateActorArgs, FindActorsByNameArgs, GetActorsInLevelArgs,
    SetActorTransformArgs,
};
pub use connection::{EngineConnection, RecordingConnection};
pub use error::{ConnectionError, ToolError};
pub use response::{normalize, NormalizeMode, Normalized, ReplyShape};
pub use tools::{ToolDescriptor, ToolRegistry};
pub use types::{GeometryField, Vec3};
