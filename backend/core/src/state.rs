use serde::{Deserialize, Serialize};

/// Whether the controller will accept a new send.
///
/// At most one request may be in flight at a time; a `submit` while
/// `AwaitingResponse` is rejected, not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Idle,
    AwaitingResponse,
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleState::Idle => write!(f, "idle"),
            LifecycleState::AwaitingResponse => write!(f, "awaiting_response"),
        }
    }
}
