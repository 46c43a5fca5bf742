use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};

use turismo_core::{
    AssistantBackend, BackendReply, ChatMessage, LifecycleState, SessionId, Transcript,
};

/// Reply shown when the backend answered successfully but sent no reply text.
pub const ACK_REPLY: &str = "I received your message!";

/// Reply shown for any transport failure, non-success status, or malformed
/// response. Raw failure detail never reaches the transcript.
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";

/// Result of a [`ChatSession::submit`] call.
///
/// Rejections are silent no-ops on the session itself; the value exists so a
/// front-end can mirror the guards. Fire-and-forget callers may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was sent and an assistant entry (reply or fallback) was
    /// appended.
    Accepted,
    /// Input was empty after trimming; nothing happened.
    RejectedEmpty,
    /// A request was already in flight; nothing happened.
    RejectedBusy,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Transcript and lifecycle flag, serialized behind one lock.
struct SessionState {
    transcript: Transcript,
    lifecycle: LifecycleState,
}

/// The conversational session controller.
///
/// One instance per page/process lifetime. Issues its session token at
/// construction and tags every outbound call with it. At most one request is
/// in flight at a time: a `submit` while awaiting a response is rejected, not
/// queued.
pub struct ChatSession {
    session_id: SessionId,
    backend: Arc<dyn AssistantBackend>,
    state: Mutex<SessionState>,
}

impl ChatSession {
    pub fn new(backend: Arc<dyn AssistantBackend>) -> Self {
        let session_id = SessionId::new();
        debug!(%session_id, backend = backend.name(), "Chat session created");
        Self {
            session_id,
            backend,
            state: Mutex::new(SessionState {
                transcript: Transcript::new(),
                lifecycle: LifecycleState::Idle,
            }),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn state(&self) -> LifecycleState {
        self.lock().lifecycle
    }

    /// Read-only view of the transcript so far.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.lock().transcript.snapshot()
    }

    pub fn transcript_len(&self) -> usize {
        self.lock().transcript.len()
    }

    /// Submit one user message and await the assistant's reply.
    ///
    /// Blank input and input arriving while a request is in flight are
    /// dropped without touching the transcript, the lifecycle state, or the
    /// network. On an accepted call the user entry is appended before the
    /// outbound request is issued, and the session always returns to idle
    /// once the exchange resolves, success or failure.
    pub async fn submit(&self, raw_input: &str) -> SubmitOutcome {
        let text = raw_input.trim();
        if text.is_empty() {
            return SubmitOutcome::RejectedEmpty;
        }

        {
            let mut state = self.lock();
            if state.lifecycle == LifecycleState::AwaitingResponse {
                debug!("Submit rejected: a request is already in flight");
                return SubmitOutcome::RejectedBusy;
            }
            state.transcript.append(ChatMessage::user(text));
            state.lifecycle = LifecycleState::AwaitingResponse;
        }

        // Lock is not held across the await; the lifecycle flag alone keeps
        // the exchange exclusive.
        let result = self.backend.send(&self.session_id, text).await;

        // An empty reply string counts as no reply at all.
        let reply = match result {
            Ok(BackendReply {
                output: Some(output),
            }) if !output.is_empty() => output,
            Ok(_) => ACK_REPLY.to_string(),
            Err(e) => {
                warn!(error = %e, "Chat exchange failed; substituting fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        let mut state = self.lock();
        state.transcript.append(ChatMessage::assistant(reply));
        state.lifecycle = LifecycleState::Idle;
        SubmitOutcome::Accepted
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // Appends cannot panic, so poisoning is unreachable; recover rather
        // than propagate if it ever happens.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
