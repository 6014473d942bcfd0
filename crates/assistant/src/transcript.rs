use std::time::SystemTime;

/// Stable identifier for one transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Creates a typed message identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Transcript speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Bot,
}

/// One immutable transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: SystemTime,
}

/// Append-only ordered message log for one chat session.
///
/// Messages are never mutated or removed once pushed; IDs are allocated
/// monotonically so ordering survives any later re-rendering.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_message_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_message_id: 1,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a message stamped with the current time and returns its ID.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> MessageId {
        let id = self.alloc_message_id();
        self.messages.push(ChatMessage {
            id,
            text: text.into(),
            sender,
            timestamp: SystemTime::now(),
        });
        id
    }

    fn alloc_message_id(&mut self) -> MessageId {
        let id = MessageId::new(self.next_message_id);
        self.next_message_id = self.next_message_id.saturating_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_in_order_with_monotonic_ids() {
        let mut transcript = Transcript::new();
        let first = transcript.push(Sender::Bot, "welcome");
        let second = transcript.push(Sender::User, "hello");
        let third = transcript.push(Sender::Bot, "hi there");

        assert!(first < second && second < third);
        assert_eq!(transcript.len(), 3);
        assert_eq!(
            transcript
                .messages()
                .iter()
                .map(|message| message.id)
                .collect::<Vec<_>>(),
            vec![first, second, third]
        );
    }

    #[test]
    fn messages_keep_their_sender() {
        let mut transcript = Transcript::new();
        transcript.push(Sender::User, "q");
        transcript.push(Sender::Bot, "a");

        assert_eq!(transcript.messages()[0].sender, Sender::User);
        assert_eq!(transcript.messages()[1].sender, Sender::Bot);
    }
}
