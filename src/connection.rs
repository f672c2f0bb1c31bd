//! Engine connection seam.
//!
//! The socket connection to the engine plugin lives outside this crate.
//! Actor tools only need `send_command`, so that is the whole trait; callers
//! inject whatever implementation they own.

use crate::error::ConnectionError;
use crate::protocol::CommandEnvelope;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::VecDeque;
use std::sync::Arc;

/// A live (or simulated) link to a running engine instance.
///
/// `Ok(None)` means the engine answered with nothing; the tools treat that the
/// same as an empty reply.
pub trait EngineConnection: Send + Sync {
    fn send_command(
        &self,
        command: &str,
        params: &Map<String, Value>,
    ) -> Result<Option<Value>, ConnectionError>;
}

impl<C: EngineConnection + ?Sized> EngineConnection for &C {
    fn send_command(
        &self,
        command: &str,
        params: &Map<String, Value>,
    ) -> Result<Option<Value>, ConnectionError> {
        (**self).send_command(command, params)
    }
}

impl<C: EngineConnection + ?Sized> EngineConnection for Arc<C> {
    fn send_command(
        &self,
        command: &str,
        params: &Map<String, Value>,
    ) -> Result<Option<Value>, ConnectionError> {
        (**self).send_command(command, params)
    }
}

impl<C: EngineConnection + ?Sized> EngineConnection for Box<C> {
    fn send_command(
        &self,
        command: &str,
        params: &Map<String, Value>,
    ) -> Result<Option<Value>, ConnectionError> {
        (**self).send_command(command, params)
    }
}

// ---------------------------------------------------------------------------
// Recording connection
// ---------------------------------------------------------------------------

/// In-process connection that records every command and answers from a
/// queue of scripted replies.
///
/// Used for dry runs and tests. Once the queue is drained every further
/// command gets no reply.
#[derive(Default)]
pub struct RecordingConnection {
    sent: Mutex<Vec<CommandEnvelope>>,
    replies: Mutex<VecDeque<Result<Option<Value>, ConnectionError>>>,
    offline: bool,
}

impl RecordingConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A connection that fails every command with [`ConnectionError::Unavailable`].
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Queue a reply for the next unanswered command.
    pub fn with_reply(self, reply: Value) -> Self {
        self.push_reply(Ok(Some(reply)));
        self
    }

    pub fn push_reply(&self, reply: Result<Option<Value>, ConnectionError>) {
        self.replies.lock().push_back(reply);
    }

    /// Every command sent so far, oldest first.
    pub fn sent(&self) -> Vec<CommandEnvelope> {
        self.sent.lock().clone()
    }

    pub fn last_sent(&self) -> Option<CommandEnvelope> {
        self.sent.lock().last().cloned()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().len()
    }
}

impl EngineConnection for RecordingConnection {
    fn send_command(
        &self,
        command: &str,
        params: &Map<String, Value>,
    ) -> Result<Option<Value>, ConnectionError> {
        if self.offline {
            return Err(ConnectionError::Unavailable(
                "failed to connect to Unreal Engine".into(),
            ));
        }
        self.sent
            .lock()
            .push(CommandEnvelope::new(command, params.clone()));
        self.replies.lock().pop_front().unwrap_or(Ok(None))
    }
}
