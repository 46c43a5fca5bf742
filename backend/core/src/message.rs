use serde::{Deserialize, Serialize};

/// Which side of the conversation a transcript entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    User,
    Assistant,
}

/// One immutable transcript entry.
///
/// `text` is always non-empty: user input is trimmed and validated by the
/// session controller before a message is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub origin: MessageOrigin,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: MessageOrigin::User,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: MessageOrigin::Assistant,
        }
    }

    pub fn is_user(&self) -> bool {
        self.origin == MessageOrigin::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = ChatMessage::user("Where is the beach?");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, deserialized);
    }

    #[test]
    fn test_origin_uses_snake_case() {
        let msg = ChatMessage::assistant("Hi there!");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["origin"], "assistant");
    }
}
