use gpui::*;
use gpui_component::{ActiveTheme, Icon, IconName, h_flex, v_flex};

use folio_content::{Profile, profile};

/// About section: portrait placeholder plus the profile paragraphs.
pub struct AboutSection {
    profile: Profile,
}

impl AboutSection {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self { profile: profile() }
    }
}

impl Render for AboutSection {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        h_flex()
            .id("about")
            .w_full()
            .flex_wrap()
            .items_center()
            .justify_center()
            .gap_8()
            .px_8()
            .py_12()
            .child(
                div()
                    .size(px(220.))
                    .rounded_full()
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.muted)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        Icon::new(IconName::CircleUser)
                            .size(px(96.))
                            .text_color(theme.muted_foreground),
                    ),
            )
            .child(
                v_flex()
                    .gap_4()
                    .max_w(px(560.))
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.foreground)
                            .child("About Me"),
                    )
                    .children(self.profile.about_paragraphs.iter().cloned().map(
                        |paragraph| {
                            div()
                                .text_sm()
                                .text_color(theme.muted_foreground)
                                .child(paragraph)
                        },
                    )),
            )
    }
}
