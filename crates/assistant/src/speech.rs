use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::StreamExt;
use futures::channel::mpsc;
use snafu::{ResultExt, Snafu};

/// How often the utterance watcher thread checks the synthesizer process.
const UTTERANCE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Host TTS commands probed in order. The first one on PATH wins.
const SYNTHESIZER_CANDIDATES: &[&str] = &["say", "espeak", "spd-say"];

/// Lifecycle events for one spoken utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtteranceEvent {
    Started,
    Finished,
    Error(String),
}

/// Event stream for one utterance; closes after the terminal event.
pub struct UtteranceStream {
    receiver: mpsc::UnboundedReceiver<UtteranceEvent>,
}

impl UtteranceStream {
    pub fn new(receiver: mpsc::UnboundedReceiver<UtteranceEvent>) -> Self {
        Self { receiver }
    }

    pub async fn recv(&mut self) -> Option<UtteranceEvent> {
        self.receiver.next().await
    }
}

/// Events from one speech-recognition attempt.
///
/// `Transcript` carries the recognized text; `End` is the natural close
/// without a result. Either way the recognizer stops after one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenEvent {
    Transcript(String),
    Error(String),
    End,
}

/// Event stream for one recognition attempt; closes after the terminal event.
pub struct ListenStream {
    receiver: mpsc::UnboundedReceiver<ListenEvent>,
}

impl ListenStream {
    pub fn new(receiver: mpsc::UnboundedReceiver<ListenEvent>) -> Self {
        Self { receiver }
    }

    pub async fn recv(&mut self) -> Option<ListenEvent> {
        self.receiver.next().await
    }
}

#[derive(Debug, Snafu)]
pub enum SpeechError {
    #[snafu(display("no speech synthesizer is available on this host"))]
    SynthesizerUnavailable,
    #[snafu(display("failed to spawn speech synthesizer `{command}`: {source}"))]
    SpawnSynthesizer {
        command: String,
        source: std::io::Error,
    },
    #[snafu(display("no speech recognizer is available on this host"))]
    RecognizerUnavailable,
}

/// Text-to-speech capability.
///
/// At most one utterance plays at a time: `speak` cancels whatever is in
/// flight before starting the new utterance.
pub trait SpeechOutput: Send + Sync {
    fn speak(&self, text: &str) -> Result<UtteranceStream, SpeechError>;
    fn cancel(&self);
}

/// Speech-to-text capability listening for a single utterance per call.
pub trait SpeechInput: Send + Sync {
    fn listen(&self) -> Result<ListenStream, SpeechError>;
    fn stop(&self);
}

/// Probes the host for a usable speech synthesizer.
///
/// Absence is not an error: callers hide the voice-output feature and carry
/// on.
pub fn detect_speech_output() -> Option<Arc<dyn SpeechOutput>> {
    match CommandSynthesizer::detect() {
        Some(synthesizer) => {
            tracing::info!(
                "speech synthesizer available: {}",
                synthesizer.command.display()
            );
            Some(Arc::new(synthesizer))
        }
        None => {
            tracing::debug!("no speech synthesizer found on PATH; voice output disabled");
            None
        }
    }
}

/// Probes the host for a usable speech recognizer.
///
/// Desktop hosts ship no recognition command this crate could drive, so the
/// probe currently always reports absence; the widget hides the mic button.
pub fn detect_speech_input() -> Option<Arc<dyn SpeechInput>> {
    tracing::debug!("no speech recognizer available; voice input disabled");
    None
}

struct ActiveUtterance {
    generation: u64,
    child: Option<Child>,
}

/// [`SpeechOutput`] backed by the host TTS command (`say`, `espeak`, or
/// `spd-say`).
///
/// Each utterance spawns one child process; a watcher thread polls it and
/// reports lifecycle events through the stream. The generation counter lets
/// a stale watcher notice that its utterance was replaced.
pub struct CommandSynthesizer {
    command: PathBuf,
    active: Arc<Mutex<ActiveUtterance>>,
}

impl CommandSynthesizer {
    /// Finds the first known synthesizer command on PATH.
    pub fn detect() -> Option<Self> {
        SYNTHESIZER_CANDIDATES
            .iter()
            .find_map(|name| find_in_path(name))
            .map(|command| Self {
                command,
                active: Arc::new(Mutex::new(ActiveUtterance {
                    generation: 0,
                    child: None,
                })),
            })
    }
}

impl SpeechOutput for CommandSynthesizer {
    fn speak(&self, text: &str) -> Result<UtteranceStream, SpeechError> {
        let child = Command::new(&self.command)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context(SpawnSynthesizerSnafu {
                command: self.command.display().to_string(),
            })?;

        let generation = {
            let Ok(mut active) = self.active.lock() else {
                return Err(SpeechError::SynthesizerUnavailable);
            };

            if let Some(mut previous) = active.child.take() {
                if let Err(error) = previous.kill() {
                    tracing::debug!("failed to stop previous utterance: {error}");
                }
                let _ = previous.wait();
            }

            active.generation = active.generation.saturating_add(1);
            active.child = Some(child);
            active.generation
        };

        let (sender, receiver) = mpsc::unbounded();
        let _ = sender.unbounded_send(UtteranceEvent::Started);

        let active = Arc::clone(&self.active);
        std::thread::spawn(move || {
            loop {
                std::thread::sleep(UTTERANCE_POLL_INTERVAL);

                let Ok(mut guard) = active.lock() else {
                    let _ = sender.unbounded_send(UtteranceEvent::Error(
                        "synthesizer state poisoned".to_string(),
                    ));
                    return;
                };

                if guard.generation != generation {
                    // A newer utterance replaced this one; its stream already
                    // reported Started, ours just closes out.
                    let _ = sender.unbounded_send(UtteranceEvent::Finished);
                    return;
                }

                let Some(child) = guard.child.as_mut() else {
                    // Cancelled.
                    let _ = sender.unbounded_send(UtteranceEvent::Finished);
                    return;
                };

                match child.try_wait() {
                    Ok(None) => continue,
                    Ok(Some(status)) => {
                        guard.child = None;
                        let event = if status.success() {
                            UtteranceEvent::Finished
                        } else {
                            UtteranceEvent::Error(format!(
                                "synthesizer exited with status {status}"
                            ))
                        };
                        let _ = sender.unbounded_send(event);
                        return;
                    }
                    Err(error) => {
                        guard.child = None;
                        let _ = sender.unbounded_send(UtteranceEvent::Error(error.to_string()));
                        return;
                    }
                }
            }
        });

        Ok(UtteranceStream::new(receiver))
    }

    fn cancel(&self) {
        let Ok(mut active) = self.active.lock() else {
            return;
        };

        if let Some(mut child) = active.child.take() {
            if let Err(error) = child.kill() {
                tracing::debug!("failed to stop utterance: {error}");
            }
            let _ = child.wait();
        }
    }
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn find_in_path_locates_the_shell() {
        assert!(find_in_path("sh").is_some());
    }

    #[test]
    fn find_in_path_misses_unknown_binaries() {
        assert!(find_in_path("folio-no-such-synthesizer").is_none());
    }

    #[test]
    fn utterance_stream_yields_events_then_closes() {
        let (sender, receiver) = mpsc::unbounded();
        let mut stream = UtteranceStream::new(receiver);

        sender.unbounded_send(UtteranceEvent::Started).unwrap();
        sender.unbounded_send(UtteranceEvent::Finished).unwrap();
        drop(sender);

        assert_eq!(block_on(stream.recv()), Some(UtteranceEvent::Started));
        assert_eq!(block_on(stream.recv()), Some(UtteranceEvent::Finished));
        assert_eq!(block_on(stream.recv()), None);
    }

    #[test]
    fn listen_stream_delivers_one_transcript() {
        let (sender, receiver) = mpsc::unbounded();
        let mut stream = ListenStream::new(receiver);

        sender
            .unbounded_send(ListenEvent::Transcript("hello".to_string()))
            .unwrap();
        drop(sender);

        assert_eq!(
            block_on(stream.recv()),
            Some(ListenEvent::Transcript("hello".to_string()))
        );
        assert_eq!(block_on(stream.recv()), None);
    }

    /// Scripted recognizer used to exercise the capability boundary without
    /// any host dependency.
    struct ScriptedRecognizer {
        transcript: &'static str,
    }

    impl SpeechInput for ScriptedRecognizer {
        fn listen(&self) -> Result<ListenStream, SpeechError> {
            let (sender, receiver) = mpsc::unbounded();
            let _ = sender.unbounded_send(ListenEvent::Transcript(self.transcript.to_string()));
            let _ = sender.unbounded_send(ListenEvent::End);
            Ok(ListenStream::new(receiver))
        }

        fn stop(&self) {}
    }

    #[test]
    fn scripted_recognizer_round_trips_through_the_trait() {
        let recognizer: Arc<dyn SpeechInput> = Arc::new(ScriptedRecognizer {
            transcript: "tell me about your skills",
        });

        let mut stream = recognizer.listen().expect("listen");
        assert_eq!(
            block_on(stream.recv()),
            Some(ListenEvent::Transcript(
                "tell me about your skills".to_string()
            ))
        );
        assert_eq!(block_on(stream.recv()), Some(ListenEvent::End));
    }
}
