//! Runner configuration (file + environment via the `config` crate).
//!
//! | Key           | Env                       | Default                   |
//! |---------------|---------------------------|---------------------------|
//! | `server_name` | `UNREAL_MCP_SERVER_NAME`  | `UnrealMCP`               |
//! | `log_filter`  | `UNREAL_MCP_LOG_FILTER`   | `unreal_mcp_actors=info`  |
//! | `pretty`      | `UNREAL_MCP_PRETTY`       | `true`                    |

use ::config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "UNREAL_MCP";
pub const DEFAULT_CONFIG_FILE: &str = "unreal-mcp.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunnerConfig {
    /// Name reported in tool listings.
    pub server_name: String,
    /// Default `tracing-subscriber` filter directive (`RUST_LOG` wins).
    pub log_filter: String,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            server_name: "UnrealMCP".into(),
            log_filter: "unreal_mcp_actors=info".into(),
            pretty: true,
        }
    }
}

impl RunnerConfig {
    /// Layer defaults, then `path` (required only if given explicitly), then
    /// `UNREAL_MCP_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Config::try_from(&RunnerConfig::default())?;
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
