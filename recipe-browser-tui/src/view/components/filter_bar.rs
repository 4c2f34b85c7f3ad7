//! 过滤栏组件
//!
//! 每个带过滤绑定的表格列上方对应一个输入框，宽度与表格列一致。
//! 下方一行显示已生效的过滤条件数量。

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use recipe_browser_core::FilterField;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::{fill, t};
use crate::model::App;
use crate::view::pages::table::{column_widths, COLUMNS};
use crate::view::theme::Styles;

/// 渲染过滤栏（输入框三行 + 状态一行）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let [inputs_area, status_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let cells = Layout::horizontal(column_widths()).split(inputs_area);
    for (column, cell) in COLUMNS.iter().zip(cells.iter()) {
        if let Some(field) = column.filter {
            render_input(app, frame, *cell, field, (column.label)(t()));
        }
    }

    render_status_line(app, frame, status_area);
}

/// 渲染单个输入框
fn render_input(app: &App, frame: &mut Frame, area: Rect, field: FilterField, label: &str) {
    let editing = app.focus.is_filters() && app.filter_bar.active_field() == field;
    let value = app.filter_bar.value(field);

    let border_style = if editing {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let mut spans = Vec::new();
    if value.is_empty() && field == FilterField::Rating {
        spans.push(Span::styled(t().table.rating_placeholder, Styles::muted()));
    } else {
        // 边框占两列，编辑时光标再占一列
        let width = usize::from(area.width.saturating_sub(3));
        spans.push(Span::styled(visible_tail(value, width).to_string(), Styles::text()));
    }
    if editing {
        spans.push(Span::styled("▏", Styles::border_focused()));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// 输入超出输入框宽度时只显示末尾部分
fn visible_tail(value: &str, width: usize) -> &str {
    if value.width() <= width {
        return value;
    }

    let mut used = 0;
    let mut start = value.len();
    for (i, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    &value[start..]
}

/// 渲染 "Filters Active (n)" 状态行
fn render_status_line(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let count = app.list.filters().len();

    let line = if count == 0 {
        Line::from(Span::styled(format!(" {}", texts.table.no_filters), Styles::muted()))
    } else {
        Line::from(vec![
            Span::styled(
                format!(" {}", fill(texts.table.filters_active, &[("count", &count.to_string())])),
                Styles::warning(),
            ),
            Span::styled("  Alt+c ", Styles::hint_key()),
            Span::styled(texts.hints.actions.clear_filters, Styles::muted()),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}
