//! TurismoMgta session controller
//!
//! Owns session identity, the message transcript, and the send/receive
//! lifecycle for one-shot chat exchanges against an assistant backend.

pub mod session;

pub use session::{ChatSession, SubmitOutcome, ACK_REPLY, FALLBACK_REPLY};
