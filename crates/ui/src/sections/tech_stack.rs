use std::time::Duration;

use gpui::*;
use gpui_component::{ActiveTheme, h_flex, v_flex};

use folio_content::{TechCategory, tech_categories};

/// Tick period for the marquee animation.
const MARQUEE_TICK: Duration = Duration::from_millis(33);
/// Horizontal distance covered per tick.
const MARQUEE_STEP: f32 = 1.0;
/// Fixed width of one tech chip, gap included.
const CHIP_CELL_WIDTH: f32 = 148.0;

/// Wraps the running offset into `[0, row_width)` so the duplicated row
/// appears to scroll forever.
fn wrapped_offset(offset: f32, row_width: f32) -> f32 {
    if row_width <= 0.0 {
        0.0
    } else {
        offset % row_width
    }
}

/// Continuously scrolling rows of technologies, one per category.
///
/// A single shared offset drives every row; hovering anywhere in the section
/// pauses the tick until the pointer leaves.
pub struct TechStackSection {
    categories: Vec<TechCategory>,
    offset: f32,
    paused: bool,
    _tick_task: Task<()>,
}

impl TechStackSection {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let tick_task = cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor().timer(MARQUEE_TICK).await;

                let alive = this.update(cx, |this, cx| {
                    if !this.paused {
                        this.offset += MARQUEE_STEP;
                        cx.notify();
                    }
                });

                if alive.is_err() {
                    break;
                }
            }
        });

        Self {
            categories: tech_categories(),
            offset: 0.0,
            paused: false,
            _tick_task: tick_task,
        }
    }

    fn render_row(
        &self,
        row_index: usize,
        category: &TechCategory,
        cx: &Context<Self>,
    ) -> AnyElement {
        let theme = cx.theme();
        let row_width = category.items.len() as f32 * CHIP_CELL_WIDTH;
        let shift = wrapped_offset(self.offset, row_width);

        // Items are drawn twice so the wrap point never shows a gap.
        let chips = category
            .items
            .iter()
            .chain(category.items.iter())
            .enumerate()
            .map(|(chip_index, item)| {
                div()
                    .id(("tech-chip", row_index * 1_000 + chip_index))
                    .w(px(CHIP_CELL_WIDTH - 8.0))
                    .flex_shrink_0()
                    .px_3()
                    .py_1()
                    .rounded_full()
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.muted)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_sm()
                    .text_color(theme.foreground)
                    .child(item.name.clone())
            })
            .collect::<Vec<_>>();

        v_flex()
            .w_full()
            .gap_2()
            .child(
                div()
                    .text_sm()
                    .text_color(theme.muted_foreground)
                    .child(category.name.clone()),
            )
            .child(
                div()
                    .w_full()
                    .overflow_hidden()
                    .child(h_flex().gap_2().ml(px(-shift)).children(chips)),
            )
            .into_any_element()
    }
}

impl Render for TechStackSection {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let rows = self
            .categories
            .clone()
            .into_iter()
            .enumerate()
            .map(|(row_index, category)| self.render_row(row_index, &category, cx))
            .collect::<Vec<_>>();

        v_flex()
            .id("tech-stack")
            .w_full()
            .gap_6()
            .px_8()
            .py_12()
            .on_hover(cx.listener(|this, hovered: &bool, _window, cx| {
                this.paused = *hovered;
                cx.notify();
            }))
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground)
                    .child("My Tech Stack"),
            )
            .children(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_wraps_at_row_width() {
        assert_eq!(wrapped_offset(0.0, 100.0), 0.0);
        assert_eq!(wrapped_offset(40.0, 100.0), 40.0);
        assert_eq!(wrapped_offset(140.0, 100.0), 40.0);
        assert_eq!(wrapped_offset(1_040.0, 100.0), 40.0);
    }

    #[test]
    fn zero_width_row_pins_the_offset() {
        assert_eq!(wrapped_offset(500.0, 0.0), 0.0);
    }
}
