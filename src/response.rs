//! Reply normalisation.
//!
//! The engine plugin has answered the same command with several different
//! reply layouts over time. [`ReplyShape::detect`] classifies a raw reply
//! into exactly one known layout; [`normalize`] then extracts the payload
//! the caller asked for.
//!
//! ## Shape precedence
//!
//! | Order | Shape           | Matches                                    |
//! |-------|-----------------|--------------------------------------------|
//! | 1     | `Empty`         | absent, `null`, `{}`, `[]`, `""`           |
//! | 2     | `NestedContent` | `{"result": {"content": ...}}`             |
//! | 3     | `Content`       | `{"content": ...}`                         |
//! | 4     | `Mapping`       | any other object                           |
//! | 5     | `Unrecognized`  | any other value                            |

use crate::error::{Result, ToolError};
use log::{debug, info, warn};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Shape detection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplyShape<'a> {
    Empty,
    /// The `content` value inside a `result` wrapper.
    NestedContent(&'a Value),
    /// A top-level `content` value.
    Content(&'a Value),
    /// Any other object, e.g. `{success, message}` or `{actors: [...]}`.
    Mapping(&'a Map<String, Value>),
    Unrecognized(&'a Value),
}

impl<'a> ReplyShape<'a> {
    pub fn detect(raw: Option<&'a Value>) -> Self {
        let Some(raw) = raw else {
            return Self::Empty;
        };
        if is_empty(raw) {
            return Self::Empty;
        }
        let Value::Object(map) = raw else {
            return Self::Unrecognized(raw);
        };
        if let Some(content) = map
            .get("result")
            .and_then(Value::as_object)
            .and_then(|result| result.get("content"))
        {
            return Self::NestedContent(content);
        }
        if let Some(content) = map.get("content") {
            return Self::Content(content);
        }
        Self::Mapping(map)
    }

    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NestedContent(_) => "result.content",
            Self::Content(_) => "content",
            Self::Mapping(_) => "mapping",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Falsy replies: `null`, `{}`, `[]` and `""` all mean "nothing came back".
fn is_empty(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Normalisation
// ---------------------------------------------------------------------------

/// What the caller wants out of a reply.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizeMode {
    /// Item list under `result.content` or `content`.
    ListContent,
    /// Item list under the named top-level field.
    ListField(String),
    /// The whole reply, or `default` when nothing came back.
    PassthroughOrDefault(Value),
}

impl NormalizeMode {
    pub fn list_field(field: impl Into<String>) -> Self {
        Self::ListField(field.into())
    }

    /// Result returned when normalisation fails.
    pub fn fallback(&self) -> Normalized {
        match self {
            Self::ListContent | Self::ListField(_) => Normalized::Items(Vec::new()),
            Self::PassthroughOrDefault(default) => Normalized::Reply(default.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Items(Vec<Value>),
    Reply(Value),
}

impl Normalized {
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Items(items) => items,
            Self::Reply(Value::Array(items)) => items,
            Self::Reply(_) => Vec::new(),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Items(items) => Value::Array(items),
            Self::Reply(value) => value,
        }
    }
}

/// Extract the payload selected by `mode` from a raw reply.
///
/// Unrecognised layouts are treated as "no items" and only logged. An `Err`
/// means the reply matched a known layout but carried the wrong type.
pub fn normalize(raw: Option<&Value>, mode: &NormalizeMode) -> Result<Normalized> {
    let shape = ReplyShape::detect(raw);
    debug!("Reply shape '{}' for mode {:?}", shape.label(), mode);

    match mode {
        NormalizeMode::ListContent => match shape {
            ReplyShape::Empty => {
                warn!("No response from Unreal Engine");
                Ok(Normalized::Items(Vec::new()))
            }
            ReplyShape::NestedContent(content) | ReplyShape::Content(content) => {
                let items = expect_list(content, "content")?;
                info!("Found {} items under '{}'", items.len(), shape.label());
                Ok(Normalized::Items(items))
            }
            ReplyShape::Mapping(_) | ReplyShape::Unrecognized(_) => {
                warn!("Unexpected response format: {}", display(raw));
                Ok(Normalized::Items(Vec::new()))
            }
        },

        NormalizeMode::ListField(field) => match (shape, raw) {
            (ReplyShape::Empty, _) => Ok(Normalized::Items(Vec::new())),
            (_, Some(Value::Object(map))) => match map.get(field.as_str()) {
                Some(value) => {
                    let items = expect_list(value, field)?;
                    info!("Found {} items under '{}'", items.len(), field);
                    Ok(Normalized::Items(items))
                }
                None => {
                    info!("Reply has no '{}' field", field);
                    Ok(Normalized::Items(Vec::new()))
                }
            },
            _ => {
                warn!("Unexpected response format: {}", display(raw));
                Ok(Normalized::Items(Vec::new()))
            }
        },

        NormalizeMode::PassthroughOrDefault(default) => match (shape, raw) {
            (ReplyShape::Empty, _) | (_, None) => {
                info!("Empty reply, using default {}", default);
                Ok(Normalized::Reply(default.clone()))
            }
            (_, Some(value)) => {
                info!("Passing through '{}' reply", shape.label());
                Ok(Normalized::Reply(value.clone()))
            }
        },
    }
}

fn expect_list(value: &Value, field: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        Value::Null => Ok(Vec::new()),
        other => Err(ToolError::MalformedReply {
            expected: "a list",
            found: format!("{} at '{}'", json_kind(other), field),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn display(raw: Option<&Value>) -> String {
    raw.map(Value::to_string).unwrap_or_else(|| "<none>".into())
}

// ---------------------------------------------------------------------------
// Remote-reported failures
// ---------------------------------------------------------------------------

/// Failure message carried by the reply itself, if any.
///
/// Recognises `{"success": false, ...}` and `{"status": "error", ...}`. The
/// reply is still relayed unchanged; this only feeds logging.
pub fn remote_failure(raw: &Value) -> Option<String> {
    let map = raw.as_object()?;
    let failed = map.get("success").and_then(Value::as_bool) == Some(false)
        || map.get("status").and_then(Value::as_str) == Some("error");
    if !failed {
        return None;
    }
    let message = ["message", "error"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .unwrap_or("unspecified engine error");
    Some(message.to_string())
}
