use gpui::*;
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

use folio_content::ContentItem;

/// Renders one catalog entry as the carousel's current card.
///
/// Link buttons open their URL directly, so the card needs no back-reference
/// to the owning section.
pub(crate) fn content_card(id_prefix: &'static str, item: &ContentItem, cx: &App) -> AnyElement {
    let theme = cx.theme();

    let tags = item
        .tags
        .iter()
        .map(|tag| {
            div()
                .px_2()
                .py_1()
                .rounded_full()
                .border_1()
                .border_color(theme.border)
                .bg(theme.muted)
                .text_xs()
                .text_color(theme.muted_foreground)
                .child(tag.clone())
        })
        .collect::<Vec<_>>();

    let stats = item
        .stats
        .iter()
        .map(|stat| {
            div()
                .text_xs()
                .text_color(theme.muted_foreground)
                .child(format!("{} {}", stat.count, stat.label))
        })
        .collect::<Vec<_>>();

    let links = item
        .links
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let url = link.url.clone();
            Button::new((id_prefix, index))
                .small()
                .outline()
                .icon(IconName::ExternalLink)
                .child(link.label.clone())
                .on_click(move |_, _window, cx| {
                    cx.open_url(&url);
                })
        })
        .collect::<Vec<_>>();

    v_flex()
        .w_full()
        .max_w(px(640.))
        .gap_3()
        .p_6()
        .rounded_lg()
        .border_1()
        .border_color(theme.border)
        .bg(theme.background)
        .child(
            h_flex()
                .w_full()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .px_2()
                        .py_1()
                        .rounded_full()
                        .bg(theme.muted)
                        .text_xs()
                        .text_color(theme.muted_foreground)
                        .child(item.category.clone()),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(theme.muted_foreground)
                        .child(item.published.clone()),
                ),
        )
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .text_color(theme.foreground)
                .child(item.title.clone()),
        )
        .child(
            div()
                .text_sm()
                .text_color(theme.muted_foreground)
                .child(item.description.clone()),
        )
        .child(h_flex().flex_wrap().gap_2().children(tags))
        .child(h_flex().gap_4().children(stats))
        .child(h_flex().gap_2().pt_1().children(links))
        .into_any_element()
}
