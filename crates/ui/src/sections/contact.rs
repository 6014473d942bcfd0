use std::time::Duration;

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{
    ActiveTheme, IconName,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

use folio_content::{ContactLinks, contact_links};

/// How long the copied-to-clipboard toast stays visible.
const TOAST_DURATION: Duration = Duration::from_millis(2_000);

/// Contact panel: three outbound links plus the copyable chat handle.
pub struct ContactSection {
    links: ContactLinks,
    toast_visible: bool,
    toast_task: Option<Task<()>>,
}

impl ContactSection {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            links: contact_links(),
            toast_visible: false,
            toast_task: None,
        }
    }

    /// Copies the chat handle and shows the transient confirmation toast.
    fn copy_chat_handle(&mut self, cx: &mut Context<Self>) {
        cx.write_to_clipboard(ClipboardItem::new_string(self.links.chat_handle.clone()));
        tracing::info!("copied chat handle to clipboard");

        self.toast_visible = true;
        self.toast_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(TOAST_DURATION).await;

            let _ = this.update(cx, |this, cx| {
                this.toast_visible = false;
                this.toast_task = None;
                cx.notify();
            });
        }));
        cx.notify();
    }
}

impl Render for ContactSection {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        v_flex()
            .id("contact")
            .w_full()
            .items_center()
            .gap_4()
            .px_8()
            .py_16()
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground)
                    .child("Let's Connect"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.muted_foreground)
                    .max_w(px(520.))
                    .child(
                        "Interested in working together? We should queue up a time to \
                         chat. I'll buy the coffee.",
                    ),
            )
            .child(
                h_flex()
                    .flex_wrap()
                    .items_center()
                    .justify_center()
                    .gap_3()
                    .pt_2()
                    .child(
                        Button::new("contact-email")
                            .outline()
                            .child("Email")
                            .on_click(cx.listener(|this, _, _window, cx| {
                                cx.open_url(&this.links.mailto());
                            })),
                    )
                    .child(
                        Button::new("contact-github")
                            .outline()
                            .icon(IconName::GitHub)
                            .child("GitHub")
                            .on_click(cx.listener(|this, _, _window, cx| {
                                cx.open_url(&this.links.github_url);
                            })),
                    )
                    .child(
                        Button::new("contact-linkedin")
                            .outline()
                            .child("LinkedIn")
                            .on_click(cx.listener(|this, _, _window, cx| {
                                cx.open_url(&this.links.linkedin_url);
                            })),
                    )
                    .child(
                        Button::new("contact-discord")
                            .outline()
                            .icon(IconName::Copy)
                            .child("Copy Discord ID")
                            .on_click(cx.listener(|this, _, _window, cx| {
                                this.copy_chat_handle(cx);
                            })),
                    ),
            )
            .when(self.toast_visible, |el| {
                el.child(
                    div()
                        .px_3()
                        .py_1()
                        .rounded_md()
                        .bg(theme.primary)
                        .text_xs()
                        .text_color(theme.primary_foreground)
                        .child("Discord ID copied!"),
                )
            })
    }
}
