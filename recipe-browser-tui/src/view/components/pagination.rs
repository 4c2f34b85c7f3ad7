//! 分页栏组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use recipe_browser_core::PageLimit;

use crate::i18n::{fill, t};
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染分页栏
///
/// 分页模式显示 "Page X of Y (Total: N)" 与每页条数；
/// 搜索模式只显示结果总数，并注明分页已禁用。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let list = &app.list;
    let total = list.total().to_string();

    let mut spans = Vec::new();

    if list.pagination_enabled() {
        let prev_style = if list.has_prev_page() { Styles::hint_key() } else { Styles::muted() };
        let next_style = if list.has_next_page() { Styles::hint_key() } else { Styles::muted() };

        spans.push(Span::styled(" ◀ ", prev_style));
        spans.push(Span::styled(
            fill(
                texts.pagination.page_of,
                &[
                    ("page", &list.page().to_string()),
                    ("pages", &list.total_pages().to_string()),
                    ("total", &total),
                ],
            ),
            Styles::text(),
        ));
        spans.push(Span::styled(" ▶ ", next_style));
    } else {
        spans.push(Span::styled(
            format!(" {} ", fill(texts.pagination.results, &[("total", &total)])),
            Styles::text(),
        ));
        spans.push(Span::styled(texts.pagination.disabled, Styles::muted()));
    }

    spans.push(Span::styled("  │  ", Styles::muted()));
    spans.push(Span::styled(format!("{}: ", texts.pagination.per_page), Styles::muted()));

    let options_style = if list.pagination_enabled() { Styles::text() } else { Styles::muted() };
    for limit in PageLimit::all() {
        let label = format!(" {limit} ");
        if *limit == list.limit() {
            spans.push(Span::styled(label, Styles::selected()));
        } else {
            spans.push(Span::styled(label, options_style));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
