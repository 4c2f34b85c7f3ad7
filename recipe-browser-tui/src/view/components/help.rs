//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    match app.modal.active {
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let actions = &texts.help.actions;

    let area = centered_rect(62, 34, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .style(Style::default().bg(colors().bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    section(&mut lines, texts.help.global_shortcuts, &[
        ("Tab", actions.switch_panel),
        ("Alt+r", actions.refresh),
        ("Alt+c", actions.clear_filters),
        ("Alt+l", actions.toggle_language),
        ("Alt+t", actions.toggle_theme),
        ("?/Alt+h", actions.help),
        ("q/Alt+q", actions.quit),
    ]);
    section(&mut lines, texts.help.table_shortcuts, &[
        ("↑↓/jk", actions.move_up_down),
        ("Enter/i", actions.open_detail),
        ("←→/p n", actions.change_page),
        ("l", actions.cycle_limit),
        ("/ f", actions.edit_filters),
        ("r", actions.refresh),
        ("c", actions.clear_filters),
    ]);
    section(&mut lines, texts.help.filter_shortcuts, &[
        ("a-z 0-9", actions.type_filter),
        ("←→", actions.switch_field),
        ("Ctrl+u", actions.clear_field),
        ("Enter/Esc", actions.back_to_table),
    ]);
    section(&mut lines, texts.help.detail_shortcuts, &[
        ("t", actions.toggle_time),
        ("Esc", actions.close_detail),
    ]);
    lines.push(Line::styled(texts.help.close_hint, Styles::muted()));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 追加一组快捷键说明
fn section(lines: &mut Vec<Line<'static>>, title: &'static str, entries: &[(&'static str, &'static str)]) {
    lines.push(Line::styled(title, Styles::title().add_modifier(Modifier::UNDERLINED)));
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<11}"), Styles::hint_key()),
            Span::styled(*desc, Styles::text()),
        ]));
    }
    lines.push(Line::from(""));
}
