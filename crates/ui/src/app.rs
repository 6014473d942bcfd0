use gpui::*;
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

use crate::chat::ChatWidget;
use crate::sections::{
    AboutSection, BlogsSection, ContactSection, HeroSection, ProjectsSection, TechStackSection,
};
use crate::settings::{ThemeSettings, ThemeSettingsStore};

#[cfg(target_os = "macos")]
const WINDOW_TOOLBAR_LEFT_SAFE_PADDING: f32 = 78.0;
#[cfg(not(target_os = "macos"))]
const WINDOW_TOOLBAR_LEFT_SAFE_PADDING: f32 = 16.0;
#[cfg(target_os = "windows")]
const WINDOW_TOOLBAR_RIGHT_SAFE_PADDING: f32 = 120.0;
#[cfg(not(target_os = "windows"))]
const WINDOW_TOOLBAR_RIGHT_SAFE_PADDING: f32 = 16.0;

/// Margin between the chat widget and the window edge.
const CHAT_OVERLAY_INSET: f32 = 24.0;

gpui::actions!(folio, [Quit]);

/// Computes the top toolbar height using a Zed-style responsive formula.
///
/// Keeps the title area consistent across macOS and Linux while still
/// respecting user font scaling via rem size.
fn window_toolbar_height(window: &Window) -> Pixels {
    (1.75 * window.rem_size()).max(px(34.0))
}

/// Root view: the portfolio sections in fixed order, the top bar with the
/// theme toggle, and the floating chat widget.
///
/// The shell owns the one global display flag (`dark_mode`); sections read
/// the active theme and never write it.
pub struct PortfolioShell {
    hero: Entity<HeroSection>,
    about: Entity<AboutSection>,
    tech_stack: Entity<TechStackSection>,
    projects: Entity<ProjectsSection>,
    blogs: Entity<BlogsSection>,
    contact: Entity<ContactSection>,
    chat: Entity<ChatWidget>,
    settings_store: ThemeSettingsStore,
    dark_mode: bool,
    title_bar_should_move: bool,
}

impl PortfolioShell {
    pub fn new(
        settings_store: ThemeSettingsStore,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let dark_mode = settings_store.settings().is_dark();

        Self {
            hero: cx.new(HeroSection::new),
            about: cx.new(AboutSection::new),
            tech_stack: cx.new(TechStackSection::new),
            projects: cx.new(ProjectsSection::new),
            blogs: cx.new(BlogsSection::new),
            contact: cx.new(ContactSection::new),
            chat: cx.new(|cx| ChatWidget::new(window, cx)),
            settings_store,
            dark_mode,
            title_bar_should_move: false,
        }
    }

    /// Flips the dark/light flag, applies it globally, and persists it.
    ///
    /// Styling only: no carousel or chat state is touched.
    fn toggle_theme(&mut self, cx: &mut Context<Self>) {
        self.dark_mode = !self.dark_mode;

        let settings = ThemeSettings::for_dark_mode(self.dark_mode);
        settings.apply(cx);

        if let Err(error) = self.settings_store.update(settings) {
            tracing::warn!("failed to persist theme preference: {error}");
        }

        cx.refresh_windows();
        cx.notify();
    }

    fn render_top_bar(
        &self,
        window: &Window,
        toolbar_height: Pixels,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.theme();
        let theme_icon = if self.dark_mode {
            IconName::Sun
        } else {
            IconName::Moon
        };

        h_flex()
            .id("app-top-bar")
            .window_control_area(WindowControlArea::Drag)
            .on_mouse_down_out(cx.listener(|this, _, _window, _cx| {
                this.title_bar_should_move = false;
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, _, _window, _cx| {
                    this.title_bar_should_move = false;
                }),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _, _window, _cx| {
                    this.title_bar_should_move = true;
                }),
            )
            .on_mouse_move(cx.listener(|this, _, window, _cx| {
                if this.title_bar_should_move {
                    this.title_bar_should_move = false;
                    window.start_window_move();
                }
            }))
            .w_full()
            .h(toolbar_height)
            .flex_shrink_0()
            .pl(px(WINDOW_TOOLBAR_LEFT_SAFE_PADDING))
            .pr(px(WINDOW_TOOLBAR_RIGHT_SAFE_PADDING))
            .items_center()
            .justify_between()
            .bg(theme.background)
            .border_b_1()
            .border_color(theme.border)
            .child(
                div()
                    .text_sm()
                    .text_color(theme.foreground)
                    .child("rudra.dev"),
            )
            .child(
                Button::new("theme-toggle")
                    .ghost()
                    .small()
                    .icon(theme_icon)
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.toggle_theme(cx);
                    })),
            )
            .child(self.render_linux_window_controls(window, cx))
    }

    fn render_linux_window_controls(&self, window: &Window, cx: &Context<Self>) -> AnyElement {
        #[cfg(target_os = "linux")]
        {
            let maximize_icon = if window.is_maximized() {
                IconName::WindowRestore
            } else {
                IconName::WindowMaximize
            };

            h_flex()
                .id("linux-window-controls")
                .items_center()
                // Prevent clicks on window controls from bubbling into title bar
                // gestures, which can cause double-toggle behavior.
                .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
                .on_mouse_down(MouseButton::Right, |_, _, cx| cx.stop_propagation())
                .gap_2()
                .ml_2()
                .child(
                    Button::new("linux-window-minimize")
                        .ghost()
                        .small()
                        .icon(IconName::WindowMinimize)
                        .on_click(cx.listener(|_, _, window, _| {
                            window.minimize_window();
                        })),
                )
                .child(
                    Button::new("linux-window-maximize")
                        .ghost()
                        .small()
                        .icon(maximize_icon)
                        .on_click(cx.listener(|_, _, window, _| {
                            window.zoom_window();
                        })),
                )
                .child(
                    Button::new("linux-window-close")
                        .ghost()
                        .small()
                        .icon(IconName::WindowClose)
                        .on_click(cx.listener(|_, _, window, _| {
                            window.remove_window();
                        })),
                )
                .into_any_element()
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = (window, cx);
            div().into_any_element()
        }
    }
}

impl Render for PortfolioShell {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let toolbar_height = window_toolbar_height(window);

        div()
            .size_full()
            .relative()
            .bg(theme.background)
            .child(
                v_flex()
                    .size_full()
                    .child(self.render_top_bar(window, toolbar_height, cx))
                    .child(
                        v_flex()
                            .id("page-scroll")
                            .flex_1()
                            .min_h_0()
                            .w_full()
                            .overflow_y_scroll()
                            .child(self.hero.clone())
                            .child(self.about.clone())
                            .child(self.tech_stack.clone())
                            .child(self.projects.clone())
                            .child(self.blogs.clone())
                            .child(self.contact.clone()),
                    ),
            )
            .child(
                div()
                    .absolute()
                    .bottom(px(CHAT_OVERLAY_INSET))
                    .right(px(CHAT_OVERLAY_INSET))
                    .child(self.chat.clone()),
            )
    }
}
