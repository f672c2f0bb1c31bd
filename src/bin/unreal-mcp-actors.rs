//! unreal-mcp-actors binary
//!
//! Dry-run runner for the actor tools. Lists the tool surface, or runs a
//! single tool call against a recording connection and prints the command
//! that would be sent to the engine alongside the normalised result.
//!
//! ## Configuration (env / TOML via `config` crate)
//!
//! | Key                       | Default                  | Description              |
//! |---------------------------|--------------------------|--------------------------|
//! | `UNREAL_MCP_SERVER_NAME`  | `UnrealMCP`              | Name in tool listings    |
//! | `UNREAL_MCP_LOG_FILTER`   | `unreal_mcp_actors=info` | Default log directive    |
//! | `UNREAL_MCP_PRETTY`       | `true`                   | Pretty-print JSON output |

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use unreal_mcp_actors::{
    config::RunnerConfig, ActorTools, RecordingConnection, ToolRegistry,
};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "unreal-mcp-actors", about = "Unreal MCP actor tools", version)]
struct Args {
    /// TOML config file (defaults to ./unreal-mcp.toml when present)
    #[arg(long, env = "UNREAL_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// Compact JSON output (overrides `pretty`)
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every tool with its argument schema
    Tools,

    /// Run one tool call against a recording connection
    Call {
        /// Tool name, e.g. `create_actor`
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,

        /// Scripted engine reply (JSON); without it the engine answers nothing
        #[arg(long)]
        reply: Option<String>,

        /// Simulate an unreachable engine
        #[arg(long, conflicts_with = "reply")]
        offline: bool,
    },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = RunnerConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if args.compact {
        config.pretty = false;
    }

    // Initialise logging (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log_filter))?,
        )
        .init();

    match args.command {
        Command::Tools => {
            let registry = ToolRegistry::new(ActorTools::new(RecordingConnection::new()));
            emit(
                &config,
                &json!({
                    "server": config.server_name,
                    "tools": registry.descriptors(),
                }),
            )
        }
        Command::Call {
            tool,
            args: raw_args,
            reply,
            offline,
        } => {
            let tool_args: Value =
                serde_json::from_str(&raw_args).context("--args is not valid JSON")?;

            let conn = if offline {
                RecordingConnection::offline()
            } else {
                match reply {
                    Some(raw) => RecordingConnection::new().with_reply(
                        serde_json::from_str(&raw).context("--reply is not valid JSON")?,
                    ),
                    None => RecordingConnection::new(),
                }
            };

            let registry = ToolRegistry::new(ActorTools::new(conn));
            let span = tracing::info_span!("tool_call", tool = %tool);
            let result = span.in_scope(|| registry.call(&tool, tool_args));

            log::info!(
                "Tool '{}' sent {} command(s)",
                tool,
                registry.tools().connection().sent_count()
            );

            emit(
                &config,
                &json!({
                    "sent": registry.tools().connection().sent(),
                    "result": result,
                }),
            )
        }
    }
}

fn emit<T: Serialize>(config: &RunnerConfig, value: &T) -> Result<()> {
    let out = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
