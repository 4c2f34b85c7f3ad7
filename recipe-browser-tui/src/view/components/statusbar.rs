//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use recipe_browser_core::ListView;

use crate::i18n::{t, Translations};
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和覆盖层生成快捷键提示
    let hints = get_hints(app, t());

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App, texts: &'static Translations) -> Vec<(&'static str, &'static str)> {
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    if app.modal.is_open() {
        return vec![(keys.esc, texts.common.close)];
    }

    if app.is_detail_open() {
        return vec![
            ("t", actions.toggle_time),
            (keys.esc, texts.common.close),
        ];
    }

    let mut hints = vec![(keys.tab, actions.switch_panel)];

    if app.focus.is_filters() {
        hints.push((keys.arrows_lr, actions.switch_field));
        hints.push(("Ctrl+u", texts.help.actions.clear_field));
        hints.push((keys.enter, actions.done));
    } else {
        match app.list.view() {
            ListView::EmptyFiltered => {
                hints.push(("c", actions.clear_filters));
            }
            ListView::ConnectionError | ListView::EmptyCorpus => {
                hints.push(("r", actions.refresh));
            }
            ListView::Table { .. } => {
                hints.push((keys.arrows_ud, actions.move_up_down));
                hints.push((keys.enter, actions.details));
                if app.list.pagination_enabled() {
                    hints.push((keys.arrows_lr, actions.page));
                    hints.push(("l", actions.per_page));
                }
            }
        }
    }

    // 过滤栏中 ? 会被当作输入
    let help_key = if app.focus.is_filters() { "Alt+h" } else { "?" };
    hints.push((help_key, actions.help));
    hints
}
