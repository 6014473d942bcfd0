use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::rules::{GREETING, classify};
use crate::transcript::{ChatMessage, MessageId, Sender, Transcript};

/// Lower bound of the simulated typing delay.
pub const REPLY_DELAY_MIN_MS: u64 = 1_000;
/// Width of the jitter window added on top of the minimum.
pub const REPLY_DELAY_JITTER_MS: u64 = 1_000;

/// Identifier for one scheduled bot reply.
///
/// A fresh ticket is issued per accepted submission so a timer that fires
/// after the session moved on can be rejected as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReplyTicket(pub u64);

impl ReplyTicket {
    /// Creates a typed reply ticket.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Typing-lock state for the bot side of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponderState {
    #[default]
    Idle,
    Typing {
        ticket: ReplyTicket,
        response: &'static str,
    },
}

impl ResponderState {
    /// Returns true while a reply is pending delivery.
    pub fn is_typing(&self) -> bool {
        matches!(self, Self::Typing { .. })
    }
}

/// Accepted submission: the classified response and the delay after which the
/// caller should invoke [`ChatSession::deliver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: ReplyTicket,
    pub response: &'static str,
    pub delay: Duration,
}

/// Rejection reason for a user submission. Nothing is appended on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Empty or whitespace-only input.
    EmptyInput,
    /// A bot reply is already pending; replies are serialized.
    ReplyInFlight,
}

/// Rejection reason for a reply delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliverRejection {
    /// No reply is pending at all.
    NotTyping,
    /// A reply is pending, but for a different submission than the caller's.
    StaleTicket {
        pending: ReplyTicket,
        attempted: ReplyTicket,
    },
}

/// One chat conversation: transcript plus the typing lock that serializes
/// bot replies.
///
/// The session is deliberately timer-free: `submit` hands back the delay and
/// the caller owns the scheduling, which keeps every transition testable
/// without an event loop.
#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Transcript,
    responder: ResponderState,
    next_ticket: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Creates a session seeded with the standard bot greeting.
    pub fn new() -> Self {
        Self::with_greeting(GREETING)
    }

    /// Creates a session seeded with a custom greeting.
    pub fn with_greeting(greeting: &str) -> Self {
        let mut transcript = Transcript::new();
        transcript.push(Sender::Bot, greeting);

        Self {
            transcript,
            responder: ResponderState::Idle,
            next_ticket: 1,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    pub fn is_typing(&self) -> bool {
        self.responder.is_typing()
    }

    /// Submits one user message.
    ///
    /// On acceptance the user entry is appended immediately and the returned
    /// [`PendingReply`] tells the caller what to deliver and when. Rejected
    /// submissions leave the transcript untouched.
    pub fn submit(&mut self, text: &str) -> Result<PendingReply, SubmitRejection> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SubmitRejection::EmptyInput);
        }

        if self.responder.is_typing() {
            return Err(SubmitRejection::ReplyInFlight);
        }

        self.transcript.push(Sender::User, trimmed);

        let response = classify(trimmed);
        let ticket = self.alloc_ticket();
        self.responder = ResponderState::Typing { ticket, response };

        Ok(PendingReply {
            ticket,
            response,
            delay: reply_delay(),
        })
    }

    /// Delivers the pending bot reply for `ticket`.
    ///
    /// Appends exactly one bot entry and clears the typing lock. A ticket
    /// that does not match the pending reply is rejected without any
    /// transcript change, which makes late timer fires harmless.
    pub fn deliver(&mut self, ticket: ReplyTicket) -> Result<MessageId, DeliverRejection> {
        match self.responder {
            ResponderState::Idle => Err(DeliverRejection::NotTyping),
            ResponderState::Typing { ticket: pending, .. } if pending != ticket => {
                Err(DeliverRejection::StaleTicket {
                    pending,
                    attempted: ticket,
                })
            }
            ResponderState::Typing { response, .. } => {
                let id = self.transcript.push(Sender::Bot, response);
                self.responder = ResponderState::Idle;
                Ok(id)
            }
        }
    }

    fn alloc_ticket(&mut self) -> ReplyTicket {
        let ticket = ReplyTicket::new(self.next_ticket);
        self.next_ticket = self.next_ticket.saturating_add(1);
        ticket
    }
}

/// Picks a typing delay in `[REPLY_DELAY_MIN_MS, REPLY_DELAY_MIN_MS +
/// REPLY_DELAY_JITTER_MS)`.
///
/// Jitter comes from the submission clock's subsecond nanos; the exact
/// distribution carries no correctness weight, only the range does.
fn reply_delay() -> Duration {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .subsec_nanos() as u64;

    Duration::from_millis(REPLY_DELAY_MIN_MS + nanos % REPLY_DELAY_JITTER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_with_seeded_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
        assert_eq!(session.messages()[0].text, GREETING);
        assert!(!session.is_typing());
    }

    #[test]
    fn empty_and_whitespace_submissions_append_nothing() {
        let mut session = ChatSession::new();
        assert_eq!(session.submit(""), Err(SubmitRejection::EmptyInput));
        assert_eq!(session.submit("   \t\n"), Err(SubmitRejection::EmptyInput));
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn valid_submission_appends_one_user_entry_and_one_bot_entry() {
        let mut session = ChatSession::new();
        let pending = session.submit("Hello there").expect("accepted");

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].sender, Sender::User);
        assert!(session.is_typing());

        session.deliver(pending.ticket).expect("delivered");
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].sender, Sender::Bot);
        assert_eq!(session.messages()[2].text, pending.response);
        assert!(!session.is_typing());
    }

    #[test]
    fn submission_while_typing_is_rejected() {
        let mut session = ChatSession::new();
        let pending = session.submit("hello").expect("accepted");

        assert_eq!(
            session.submit("are you there?"),
            Err(SubmitRejection::ReplyInFlight)
        );
        assert_eq!(session.messages().len(), 2);

        session.deliver(pending.ticket).expect("delivered");
        assert!(session.submit("are you there?").is_ok());
    }

    #[test]
    fn stale_ticket_is_rejected_without_transcript_change() {
        let mut session = ChatSession::new();
        let pending = session.submit("hello").expect("accepted");
        let stale = ReplyTicket::new(pending.ticket.0 + 7);

        assert_eq!(
            session.deliver(stale),
            Err(DeliverRejection::StaleTicket {
                pending: pending.ticket,
                attempted: stale,
            })
        );
        assert_eq!(session.messages().len(), 2);
        assert!(session.is_typing());
    }

    #[test]
    fn delivery_without_pending_reply_is_rejected() {
        let mut session = ChatSession::new();
        assert_eq!(
            session.deliver(ReplyTicket::new(1)),
            Err(DeliverRejection::NotTyping)
        );
    }

    #[test]
    fn double_delivery_is_rejected() {
        let mut session = ChatSession::new();
        let pending = session.submit("hello").expect("accepted");

        session.deliver(pending.ticket).expect("delivered");
        assert_eq!(
            session.deliver(pending.ticket),
            Err(DeliverRejection::NotTyping)
        );
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn tickets_are_never_reused() {
        let mut session = ChatSession::new();
        let first = session.submit("hello").expect("accepted");
        session.deliver(first.ticket).expect("delivered");
        let second = session.submit("projects?").expect("accepted");

        assert!(second.ticket > first.ticket);
    }

    #[test]
    fn reply_delay_stays_in_range() {
        for _ in 0..64 {
            let delay = reply_delay();
            assert!(delay >= Duration::from_millis(REPLY_DELAY_MIN_MS));
            assert!(
                delay < Duration::from_millis(REPLY_DELAY_MIN_MS + REPLY_DELAY_JITTER_MS)
            );
        }
    }
}
