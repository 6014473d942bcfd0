use std::time::Duration;

use gpui::*;
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

use folio_content::{ContentItem, projects};

use crate::carousel::{CarouselDriver, Direction};
use crate::sections::card::content_card;

/// Auto-advance period for the projects carousel.
const ADVANCE_PERIOD: Duration = Duration::from_secs(5);

/// Projects carousel with the category filter from the gallery view.
///
/// The filter rebuilds the carousel over the filtered list; catalog order is
/// preserved within every filter.
pub struct ProjectsSection {
    items: Vec<ContentItem>,
    filtered: Vec<ContentItem>,
    active_filter: Option<String>,
    carousel: CarouselDriver,
}

impl ProjectsSection {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let items = projects();
        let filtered = items.clone();
        let mut carousel = CarouselDriver::new(filtered.len(), ADVANCE_PERIOD);
        carousel.start(cx, Self::carousel_mut);

        Self {
            items,
            filtered,
            active_filter: None,
            carousel,
        }
    }

    fn carousel_mut(this: &mut Self) -> &mut CarouselDriver {
        &mut this.carousel
    }

    /// Unique categories in catalog order, with their item counts.
    fn categories(&self) -> Vec<(String, usize)> {
        let mut categories: Vec<(String, usize)> = Vec::new();
        for item in &self.items {
            match categories
                .iter_mut()
                .find(|(name, _)| *name == item.category)
            {
                Some((_, count)) => *count += 1,
                None => categories.push((item.category.clone(), 1)),
            }
        }
        categories
    }

    fn set_filter(&mut self, filter: Option<String>, cx: &mut Context<Self>) {
        if self.active_filter == filter {
            return;
        }

        self.filtered = match &filter {
            None => self.items.clone(),
            Some(category) => self
                .items
                .iter()
                .filter(|item| item.category == *category)
                .cloned()
                .collect(),
        };
        self.active_filter = filter;

        self.carousel.rebuild(self.filtered.len());
        self.carousel.start(cx, Self::carousel_mut);
        cx.notify();
    }

    fn render_filter_bar(&self, cx: &Context<Self>) -> AnyElement {
        let all_selected = self.active_filter.is_none();

        let mut chips = vec![
            filter_chip("project-filter-all", "All", self.items.len(), all_selected)
                .on_click(cx.listener(|this, _, _window, cx| {
                    this.set_filter(None, cx);
                }))
                .into_any_element(),
        ];

        for (index, (name, count)) in self.categories().into_iter().enumerate() {
            let selected = self.active_filter.as_deref() == Some(name.as_str());
            let chip_name = name.clone();
            chips.push(
                filter_chip(("project-filter", index), name.as_str(), count, selected)
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.set_filter(Some(chip_name.clone()), cx);
                    }))
                    .into_any_element(),
            );
        }

        h_flex().flex_wrap().gap_2().children(chips).into_any_element()
    }

    fn render_controls(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let transitioning = self.carousel.is_transitioning();
        let current = self.carousel.current();
        let count = self.carousel.count();

        let dots = (0..count)
            .map(|index| {
                div()
                    .id(("project-dot", index))
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
                Button::new("projects-prev")
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
                Button::new("projects-next")
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

impl Render for ProjectsSection {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        let body = match self.filtered.get(self.carousel.current()) {
            Some(item) => v_flex()
                .w_full()
                .items_center()
                .gap_4()
                .child(content_card("project-link", item, cx))
                .child(self.render_controls(cx))
                .into_any_element(),
            None => div()
                .text_sm()
                .text_color(theme.muted_foreground)
                .child("No projects in this category yet.")
                .into_any_element(),
        };

        v_flex()
            .id("projects")
            .w_full()
            .items_center()
            .gap_6()
            .px_8()
            .py_12()
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground)
                    .child("Portfolio Projects"),
            )
            .child(self.render_filter_bar(cx))
            .child(body)
    }
}

fn filter_chip(
    id: impl Into<ElementId>,
    name: &str,
    count: usize,
    selected: bool,
) -> Button {
    let chip = Button::new(id)
        .small()
        .child(format!("{name} ({count})"));

    if selected { chip.primary() } else { chip.outline() }
}
