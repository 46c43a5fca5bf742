//! Outbound chat webhook transport.
//!
//! Implements [`turismo_core::AssistantBackend`] over a fixed HTTP endpoint:
//! one JSON POST per user turn, Basic-auth credential, `{"output": ...}`
//! reply body.

pub mod client;
pub mod config;

pub use client::WebhookBackend;
pub use config::WebhookConfig;
