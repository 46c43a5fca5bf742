//! TurismoMgta core
//!
//! Domain types and the assistant-backend trait shared by the session
//! controller and its transports.

pub mod error;
pub mod message;
pub mod session;
pub mod state;
pub mod traits;
pub mod transcript;

pub use error::ChatError;
pub use message::{ChatMessage, MessageOrigin};
pub use session::SessionId;
pub use state::LifecycleState;
pub use traits::{AssistantBackend, BackendReply};
pub use transcript::Transcript;
