#![deny(unsafe_code)]

/// Scripted portfolio assistant.
///
/// The assistant answers canned questions about the site owner: every user
/// message is matched against an ordered rule table and the first matching
/// rule's response is delivered after a short typing delay. The crate also
/// owns the transcript model, the session state machine that serializes
/// replies, and the optional speech capability boundary. Nothing here
/// depends on a UI toolkit.
pub mod rules;
pub mod session;
pub mod speech;
pub mod transcript;

pub use rules::{DEFAULT_RESPONSE, GREETING, IntentRule, RULES, classify};
pub use session::{
    ChatSession, DeliverRejection, PendingReply, ReplyTicket, ResponderState, SubmitRejection,
};
pub use speech::{
    ListenEvent, ListenStream, SpeechError, SpeechInput, SpeechOutput, UtteranceEvent,
    UtteranceStream, detect_speech_input, detect_speech_output,
};
pub use transcript::{ChatMessage, MessageId, Sender, Transcript};
