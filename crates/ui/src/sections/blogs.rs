use std::time::Duration;

use gpui::*;
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

use folio_content::{ContentItem, blog_posts};

use crate::carousel::{CarouselDriver, Direction};
use crate::sections::card::content_card;

/// Auto-advance period for the blog carousel.
const ADVANCE_PERIOD: Duration = Duration::from_secs(6);

/// Blog-post carousel.
pub struct BlogsSection {
    posts: Vec<ContentItem>,
    carousel: CarouselDriver,
}

impl BlogsSection {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let posts = blog_posts();
        let mut carousel = CarouselDriver::new(posts.len(), ADVANCE_PERIOD);
        carousel.start(cx, Self::carousel_mut);

        Self { posts, carousel }
    }

    fn carousel_mut(this: &mut Self) -> &mut CarouselDriver {
        &mut this.carousel
    }

    fn render_controls(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let transitioning = self.carousel.is_transitioning();
        let current = self.carousel.current();
        let count = self.carousel.count();

        let dots = (0..count)
            .map(|index| {
                div()
                    .id(("blog-dot", index))
                    .size(px(8.))
                    .rounded_full()
                    .bg(if index == current {
                        theme.primary
                    } else {
                        theme.border
                    })
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.carousel.jump(index, cx, Self::carousel_mut);
                    }))
            })
            .collect::<Vec<_>>();

        h_flex()
            .items_center()
            .gap_3()
            .child(
                Button::new("blogs-prev")
                    .ghost()
                    .small()
                    .icon(IconName::ChevronLeft)
                    .disabled(transitioning)
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.carousel.navigate(Direction::Prev, cx, Self::carousel_mut);
                    })),
            )
            .child(h_flex().items_center().gap_2().children(dots))
            .child(
                Button::new("blogs-next")
                    .ghost()
                    .small()
                    .icon(IconName::ChevronRight)
                    .disabled(transitioning)
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.carousel.navigate(Direction::Next, cx, Self::carousel_mut);
                    })),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(theme.muted_foreground)
                    .child(format!("{:02} / {:02}", current + 1, count)),
            )
            .into_any_element()
    }
}

impl Render for BlogsSection {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        let body = match self.posts.get(self.carousel.current()) {
            Some(post) => v_flex()
                .w_full()
                .items_center()
                .gap_4()
                .child(content_card("blog-link", post, cx))
                .child(self.render_controls(cx))
                .into_any_element(),
            None => div()
                .text_sm()
                .text_color(theme.muted_foreground)
                .child("No posts yet.")
                .into_any_element(),
        };

        v_flex()
            .id("blogs")
            .w_full()
            .items_center()
            .gap_2()
            .px_8()
            .py_12()
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground)
                    .child("Latest Blog Posts"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.muted_foreground)
                    .pb_4()
                    .child("Thoughts, tutorials, and insights from my journey in tech"),
            )
            .child(body)
    }
}
