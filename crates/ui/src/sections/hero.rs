use gpui::*;
use gpui_component::{
    ActiveTheme, IconName,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

use folio_content::{ContactLinks, Profile, contact_links, profile};

/// Opening section: identity, availability, and a profile-as-code card.
pub struct HeroSection {
    profile: Profile,
    links: ContactLinks,
}

impl HeroSection {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            profile: profile(),
            links: contact_links(),
        }
    }

    fn code_card_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "// profile.rs".to_string(),
            "let developer = Developer {".to_string(),
            format!("    name: \"{}\",", self.profile.name),
            format!("    role: \"{}\",", self.profile.headline),
            "    focus: [\"AI/ML\", \"Full Stack\"],".to_string(),
            "    open_to_work: true,".to_string(),
            "};".to_string(),
        ];
        lines.push(format!("// {}", self.profile.availability));
        lines
    }
}

impl Render for HeroSection {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let code_lines = self.code_card_lines();

        h_flex()
            .id("hero")
            .w_full()
            .flex_wrap()
            .items_center()
            .justify_center()
            .gap_8()
            .px_8()
            .py_16()
            .child(
                v_flex()
                    .gap_3()
                    .max_w(px(520.))
                    .child(
                        div()
                            .text_3xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.foreground)
                            .child(self.profile.name.clone()),
                    )
                    .child(
                        div()
                            .text_lg()
                            .text_color(theme.primary)
                            .child(self.profile.headline.clone()),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child(self.profile.availability.clone()),
                    )
                    .child(
                        h_flex()
                            .gap_2()
                            .pt_2()
                            .child(
                                Button::new("hero-github")
                                    .primary()
                                    .icon(IconName::GitHub)
                                    .child("View GitHub")
                                    .on_click(cx.listener(|this, _, _window, cx| {
                                        cx.open_url(&this.links.github_url);
                                    })),
                            )
                            .child(
                                Button::new("hero-contact")
                                    .outline()
                                    .child("Get in Touch")
                                    .on_click(cx.listener(|this, _, _window, cx| {
                                        cx.open_url(&this.links.mailto());
                                    })),
                            ),
                    ),
            )
            .child(
                v_flex()
                    .min_w(px(360.))
                    .p_4()
                    .gap_1()
                    .rounded_lg()
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.muted)
                    .children(code_lines.into_iter().enumerate().map(|(index, line)| {
                        div()
                            .id(("hero-code-line", index))
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child(line)
                    })),
            )
    }
}
