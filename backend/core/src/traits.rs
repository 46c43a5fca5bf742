use anyhow::Result;
use async_trait::async_trait;

use crate::session::SessionId;

/// Trait for the remote assistant the session controller talks to.
///
/// One call per user turn. `Ok` means the transport delivered a well-formed
/// success response; whether the backend actually produced a reply is carried
/// in [`BackendReply::output`]. Any transport failure, non-success status, or
/// unparseable body surfaces as `Err` — the controller folds both cases into
/// fixed user-facing fallback text and never inspects the failure more
/// finely.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Backend name for logging (e.g., "webhook", "mock").
    fn name(&self) -> &str;

    /// Send one user message tagged with the session token and await the
    /// backend's reply.
    async fn send(&self, session_id: &SessionId, chat_input: &str) -> Result<BackendReply>;
}

/// Successful response from an assistant backend.
#[derive(Debug, Clone)]
pub struct BackendReply {
    /// The assistant's reply text; `None` when the response was well-formed
    /// but carried no reply field.
    pub output: Option<String>,
}
