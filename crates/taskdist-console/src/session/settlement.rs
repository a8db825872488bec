/*
[INPUT]:  Completed queue service calls
[OUTPUT]: Settlement messages routed back to the session owner
[POS]:    Client core - message passing between request tasks and state
[UPDATE]: When a new kind of request is issued by the session
*/

use std::fmt;

use taskdist_adapter::{TaskAccepted, TaskPayload, TaskQueueError};
use uuid::Uuid;

/// Identifies one request from issue to settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(Uuid);

impl AttemptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First group is enough to tell attempts apart in the log panel.
        let full = self.0.to_string();
        f.write_str(&full[..8])
    }
}

#[derive(Debug)]
pub enum Outcome {
    Submitted {
        payload: TaskPayload,
        result: Result<TaskAccepted, TaskQueueError>,
    },
    Fetched {
        result: Result<Vec<String>, TaskQueueError>,
    },
}

/// A finished request, waiting to be applied to session state
#[derive(Debug)]
pub struct Settlement {
    pub attempt: AttemptId,
    pub outcome: Outcome,
}

/// What applying a settlement did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub attempt: AttemptId,
    pub success: bool,
    /// Results prepended by this settlement
    pub merged: usize,
}
