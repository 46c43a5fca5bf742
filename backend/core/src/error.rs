use thiserror::Error;

/// Failure taxonomy for one chat exchange.
///
/// None of these are fatal and none reach the transcript as raw text; the
/// controller recovers every variant into a fixed fallback message. The enum
/// exists so transports can classify what went wrong before logging it.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("backend returned status {status}")]
    Status { status: u16 },

    #[error("malformed response body: {0}")]
    Malformed(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
