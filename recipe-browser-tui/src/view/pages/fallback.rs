//! 表格区域的兜底页面
//!
//! 连接失败、搜索无结果、数据库为空时替代表格显示的居中面板。

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::{fill, t};
use crate::view::components::centered_rect;
use crate::view::theme::Styles;

/// 连接失败
pub fn render_connection_error(frame: &mut Frame, area: Rect, api_base_url: &str, detail: Option<String>) {
    let texts = &t().fallback;
    let mut lines = vec![
        Line::styled(
            fill(texts.connection_error_message, &[("url", api_base_url)]),
            Styles::text(),
        ),
        Line::from(""),
    ];
    if let Some(detail) = detail {
        lines.push(Line::styled(detail, Styles::muted()));
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(texts.connection_error_hint, Styles::muted()));

    render_panel(frame, area, texts.connection_error_title, Styles::error(), lines);
}

/// 搜索无结果，提供清空过滤的操作
pub fn render_no_results(frame: &mut Frame, area: Rect) {
    let texts = &t().fallback;
    let lines = vec![
        Line::styled(texts.no_results_message, Styles::text()),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.clear_filters), Styles::selected()),
            Span::styled("  c / Enter", Styles::hint_key()),
        ]),
    ];

    render_panel(frame, area, texts.no_results_title, Styles::warning(), lines);
}

/// 数据库为空
pub fn render_no_data(frame: &mut Frame, area: Rect) {
    let texts = &t().fallback;
    let lines = vec![
        Line::styled(texts.no_data_message, Styles::text()),
        Line::from(""),
        Line::styled(texts.no_data_hint, Styles::muted()),
    ];

    render_panel(frame, area, texts.no_data_title, Styles::warning(), lines);
}

fn render_panel(frame: &mut Frame, area: Rect, title: &str, title_style: Style, lines: Vec<Line<'static>>) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(4);
    let panel = centered_rect(area.width.saturating_sub(4).min(72), height, area);

    let block = Block::default()
        .title(Span::styled(format!(" {title} "), title_style))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(title_style);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, panel);
}
