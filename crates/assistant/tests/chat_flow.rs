use folio_assistant::{
    ChatSession, DEFAULT_RESPONSE, GREETING, Sender, SubmitRejection, classify,
};

/// Walks one full conversation through the session the way the widget does:
/// submit, wait out the delay (elided), deliver, repeat.
#[test]
fn conversation_round_trips_through_the_rule_table() {
    let mut session = ChatSession::new();
    assert_eq!(session.messages()[0].text, GREETING);

    let turns = [
        ("Hello there", classify("Hello there")),
        ("tell me about your skills", classify("tell me about your skills")),
        ("how do I contact you?", classify("how do I contact you?")),
        ("asdkjasd", DEFAULT_RESPONSE),
    ];

    for (input, expected_response) in turns {
        let pending = session.submit(input).expect("submission accepted");
        assert_eq!(pending.response, expected_response);

        let delivered = session.deliver(pending.ticket).expect("reply delivered");
        let last = session.messages().last().expect("bot entry");
        assert_eq!(last.id, delivered);
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, expected_response);
    }

    // Greeting + four (user, bot) pairs.
    assert_eq!(session.messages().len(), 1 + turns.len() * 2);
}

#[test]
fn transcript_only_ever_grows() {
    let mut session = ChatSession::new();
    let mut last_len = session.messages().len();

    let inputs = ["hi", "", "   ", "projects", "bye"];
    for input in inputs {
        match session.submit(input) {
            Ok(pending) => {
                assert_eq!(session.messages().len(), last_len + 1);
                session.deliver(pending.ticket).expect("reply delivered");
                assert_eq!(session.messages().len(), last_len + 2);
            }
            Err(SubmitRejection::EmptyInput) => {
                assert_eq!(session.messages().len(), last_len);
            }
            Err(SubmitRejection::ReplyInFlight) => {
                unreachable!("every accepted turn is delivered before the next submit");
            }
        }
        last_len = session.messages().len();
    }
}
