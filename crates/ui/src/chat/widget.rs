use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{
    ActiveTheme, Disableable, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    v_flex,
};

use folio_assistant::{
    ChatMessage, ChatSession, ListenEvent, PendingReply, ReplyTicket, Sender, SpeechInput,
    SpeechOutput, SubmitRejection, UtteranceEvent, detect_speech_input, detect_speech_output,
};

const WIDGET_WIDTH: f32 = 384.0;
const WIDGET_HEIGHT: f32 = 500.0;

/// Floating assistant widget.
///
/// Owns one [`ChatSession`] for the lifetime of the page. The session decides
/// what to say and when; the widget owns the timers, the speech capabilities,
/// and the open/minimize chrome.
pub struct ChatWidget {
    session: ChatSession,
    input_state: Entity<InputState>,
    open: bool,
    minimized: bool,
    voice_output_enabled: bool,
    speaking: bool,
    listening: bool,
    speech_output: Option<Arc<dyn SpeechOutput>>,
    speech_input: Option<Arc<dyn SpeechInput>>,
    reply_task: Option<Task<()>>,
    utterance_task: Option<Task<()>>,
    listen_task: Option<Task<()>>,
}

impl ChatWidget {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input_state =
            cx.new(|cx| InputState::new(window, cx).placeholder("Ask me about Rudra..."));

        cx.subscribe_in(
            &input_state,
            window,
            |this, _, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.handle_submit(window, cx);
                }
            },
        )
        .detach();

        Self {
            session: ChatSession::new(),
            input_state,
            open: false,
            minimized: false,
            voice_output_enabled: true,
            speaking: false,
            listening: false,
            speech_output: detect_speech_output(),
            speech_input: detect_speech_input(),
            reply_task: None,
            utterance_task: None,
            listen_task: None,
        }
    }

    fn handle_submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let content = self.input_state.read(cx).value().to_string();

        match self.session.submit(&content) {
            Ok(pending) => {
                self.input_state.update(cx, |state, cx| {
                    state.set_value("", window, cx);
                });
                self.schedule_reply(pending, cx);
                cx.notify();
            }
            Err(SubmitRejection::EmptyInput) => {}
            Err(SubmitRejection::ReplyInFlight) => {
                // Input is disabled while typing; a queued enter can still
                // land here and is dropped by design.
            }
        }
    }

    fn schedule_reply(&mut self, pending: PendingReply, cx: &mut Context<Self>) {
        self.reply_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(pending.delay).await;

            let _ = this.update(cx, |this, cx| {
                this.deliver_reply(pending.ticket, cx);
            });
        }));
    }

    fn deliver_reply(&mut self, ticket: ReplyTicket, cx: &mut Context<Self>) {
        match self.session.deliver(ticket) {
            Ok(_) => {
                self.reply_task = None;
                if self.voice_output_enabled {
                    let text = self
                        .session
                        .messages()
                        .last()
                        .map(|message| message.text.clone());
                    if let Some(text) = text {
                        self.speak(&text, cx);
                    }
                }
                cx.notify();
            }
            Err(rejection) => {
                tracing::debug!("dropped stale reply delivery: {rejection:?}");
            }
        }
    }

    fn speak(&mut self, text: &str, cx: &mut Context<Self>) {
        let Some(synthesizer) = self.speech_output.clone() else {
            return;
        };

        match synthesizer.speak(text) {
            Ok(mut stream) => {
                self.utterance_task = Some(cx.spawn(async move |this, cx| {
                    while let Some(event) = stream.recv().await {
                        let done = this
                            .update(cx, |this, cx| {
                                match event {
                                    UtteranceEvent::Started => this.speaking = true,
                                    UtteranceEvent::Finished => this.speaking = false,
                                    UtteranceEvent::Error(message) => {
                                        tracing::warn!("speech synthesis failed: {message}");
                                        this.speaking = false;
                                    }
                                }
                                cx.notify();
                                !this.speaking
                            })
                            .unwrap_or(true);

                        if done {
                            break;
                        }
                    }
                }));
            }
            Err(error) => {
                tracing::warn!("failed to start speech synthesis: {error}");
            }
        }
    }

    fn toggle_voice_output(&mut self, cx: &mut Context<Self>) {
        self.voice_output_enabled = !self.voice_output_enabled;
        if !self.voice_output_enabled {
            self.stop_speaking(cx);
        }
        cx.notify();
    }

    fn stop_speaking(&mut self, cx: &mut Context<Self>) {
        if let Some(synthesizer) = &self.speech_output {
            synthesizer.cancel();
        }
        self.speaking = false;
        self.utterance_task = None;
        cx.notify();
    }

    fn toggle_listening(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(recognizer) = self.speech_input.clone() else {
            return;
        };

        if self.listening {
            recognizer.stop();
            self.listening = false;
            self.listen_task = None;
            cx.notify();
            return;
        }

        match recognizer.listen() {
            Ok(mut stream) => {
                self.listening = true;
                self.listen_task = Some(cx.spawn_in(window, async move |this, cx| {
                    while let Some(event) = stream.recv().await {
                        let done = this
                            .update_in(cx, |this, window, cx| {
                                match event {
                                    ListenEvent::Transcript(text) => {
                                        this.input_state.update(cx, |state, cx| {
                                            state.set_value(text, window, cx);
                                        });
                                        this.listening = false;
                                    }
                                    ListenEvent::Error(message) => {
                                        tracing::warn!("speech recognition failed: {message}");
                                        this.listening = false;
                                    }
                                    ListenEvent::End => this.listening = false,
                                }
                                cx.notify();
                                !this.listening
                            })
                            .unwrap_or(true);

                        if done {
                            break;
                        }
                    }
                }));
                cx.notify();
            }
            Err(error) => {
                tracing::warn!("failed to start speech recognition: {error}");
            }
        }
    }

    fn render_launcher(&self, cx: &Context<Self>) -> AnyElement {
        Button::new("chat-launcher")
            .primary()
            .icon(IconName::Bot)
            .on_click(cx.listener(|this, _, _window, cx| {
                this.open = true;
                this.minimized = false;
                cx.notify();
            }))
            .into_any_element()
    }

    fn render_header(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        h_flex()
            .w_full()
            .items_center()
            .justify_between()
            .px_3()
            .py_2()
            .border_b_1()
            .border_color(theme.border)
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .size(px(28.))
                            .rounded_full()
                            .bg(theme.primary)
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(
                                Icon::new(IconName::Bot)
                                    .size(px(16.))
                                    .text_color(theme.primary_foreground),
                            ),
                    )
                    .child(
                        v_flex()
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(theme.foreground)
                                    .child("Rudra's AI Assistant"),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(theme.muted_foreground)
                                    .child(if self.speech_output.is_some() {
                                        "Online • Voice & Text Enabled"
                                    } else {
                                        "Online"
                                    }),
                            ),
                    ),
            )
            .child(
                h_flex()
                    .items_center()
                    .gap_1()
                    .when(self.speech_output.is_some(), |el| {
                        el.child(
                            Button::new("chat-voice-toggle")
                                .ghost()
                                .small()
                                .child(if self.voice_output_enabled {
                                    "Voice On"
                                } else {
                                    "Voice Off"
                                })
                                .on_click(cx.listener(|this, _, _window, cx| {
                                    this.toggle_voice_output(cx);
                                })),
                        )
                    })
                    .child(
                        Button::new("chat-minimize")
                            .ghost()
                            .small()
                            .icon(if self.minimized {
                                IconName::WindowMaximize
                            } else {
                                IconName::WindowMinimize
                            })
                            .on_click(cx.listener(|this, _, _window, cx| {
                                this.minimized = !this.minimized;
                                cx.notify();
                            })),
                    )
                    .child(
                        Button::new("chat-close")
                            .ghost()
                            .small()
                            .icon(IconName::WindowClose)
                            .on_click(cx.listener(|this, _, _window, cx| {
                                this.open = false;
                                cx.notify();
                            })),
                    ),
            )
            .into_any_element()
    }

    fn render_message(&self, message: &ChatMessage, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let from_user = message.sender == Sender::User;

        let bubble = v_flex()
            .max_w(px(280.))
            .px_3()
            .py_2()
            .rounded_lg()
            .bg(if from_user { theme.primary } else { theme.muted })
            .child(
                div()
                    .text_sm()
                    .text_color(if from_user {
                        theme.primary_foreground
                    } else {
                        theme.foreground
                    })
                    .child(message.text.clone()),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(if from_user {
                        theme.primary_foreground
                    } else {
                        theme.muted_foreground
                    })
                    .child(format_clock(message.timestamp)),
            );

        h_flex()
            .w_full()
            .when(from_user, |el| el.justify_end())
            .when(!from_user, |el| el.justify_start())
            .child(bubble)
            .into_any_element()
    }

    fn render_transcript(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let messages = self
            .session
            .messages()
            .iter()
            .map(|message| self.render_message(message, cx))
            .collect::<Vec<_>>();

        v_flex()
            .id("chat-transcript")
            .flex_1()
            .min_h_0()
            .w_full()
            .overflow_y_scroll()
            .p_3()
            .gap_2()
            .children(messages)
            .when(self.session.is_typing(), |el| {
                el.child(
                    div()
                        .px_3()
                        .py_2()
                        .rounded_lg()
                        .bg(theme.muted)
                        .text_sm()
                        .text_color(theme.muted_foreground)
                        .child("…"),
                )
            })
            .into_any_element()
    }

    fn render_input_row(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let typing = self.session.is_typing();

        h_flex()
            .w_full()
            .items_center()
            .gap_2()
            .p_3()
            .border_t_1()
            .border_color(theme.border)
            .child(Input::new(&self.input_state).w_full().disabled(typing))
            .when(self.speech_input.is_some(), |el| {
                el.child(
                    Button::new("chat-mic")
                        .small()
                        .outline()
                        .child(if self.listening { "Stop Mic" } else { "Mic" })
                        .on_click(cx.listener(|this, _, window, cx| {
                            this.toggle_listening(window, cx);
                        })),
                )
            })
            .when(self.speaking, |el| {
                el.child(
                    Button::new("chat-stop-speaking")
                        .small()
                        .danger()
                        .icon(IconName::CircleX)
                        .on_click(cx.listener(|this, _, _window, cx| {
                            this.stop_speaking(cx);
                        })),
                )
            })
            .child(
                Button::new("chat-send")
                    .small()
                    .primary()
                    .icon(IconName::ArrowUp)
                    .disabled(typing)
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.handle_submit(window, cx);
                    })),
            )
            .into_any_element()
    }

    fn render_panel(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        let panel = v_flex()
            .w(px(WIDGET_WIDTH))
            .rounded_lg()
            .border_1()
            .border_color(theme.border)
            .bg(theme.background)
            .shadow_lg()
            .overflow_hidden()
            .child(self.render_header(cx));

        if self.minimized {
            panel.into_any_element()
        } else {
            panel
                .h(px(WIDGET_HEIGHT))
                .child(self.render_transcript(cx))
                .child(self.render_input_row(cx))
                .into_any_element()
        }
    }
}

impl Render for ChatWidget {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.open {
            self.render_panel(cx)
        } else {
            self.render_launcher(cx)
        }
    }
}

/// Formats a timestamp as a `HH:MM` wall-clock label (UTC).
fn format_clock(timestamp: SystemTime) -> String {
    let seconds = timestamp
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs();
    let hours = (seconds / 3_600) % 24;
    let minutes = (seconds / 60) % 60;
    format!("{hours:02}:{minutes:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_label_is_zero_padded() {
        let timestamp = UNIX_EPOCH + Duration::from_secs(9 * 3_600 + 5 * 60);
        assert_eq!(format_clock(timestamp), "09:05");
    }

    #[test]
    fn clock_label_wraps_at_midnight() {
        let timestamp = UNIX_EPOCH + Duration::from_secs(24 * 3_600 + 61 * 60);
        assert_eq!(format_clock(timestamp), "01:01");
    }
}
