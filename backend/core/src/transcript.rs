use crate::message::ChatMessage;

/// Append-only ordered log of exchanged messages.
///
/// Insertion order is display order is conversational order. Entries are
/// never reordered or deleted; callers read history through [`snapshot`],
/// which never hands out a mutable alias.
///
/// [`snapshot`]: Transcript::snapshot
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message to the end. Never fails.
    pub fn append(&mut self, message: ChatMessage) {
        self.entries.push(message);
    }

    /// Read-only copy of all entries appended so far.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageOrigin;

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::user("First"));
        transcript.append(ChatMessage::assistant("Second"));
        transcript.append(ChatMessage::user("Third"));

        let snapshot = transcript.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].text, "First");
        assert_eq!(snapshot[1].text, "Second");
        assert_eq!(snapshot[2].text, "Third");
        assert_eq!(snapshot[1].origin, MessageOrigin::Assistant);
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::user("Hello"));

        let mut snapshot = transcript.snapshot();
        snapshot.clear();

        assert_eq!(transcript.len(), 1);
    }
}
