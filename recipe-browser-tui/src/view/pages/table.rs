//! 菜谱表格视图

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use recipe_browser_core::{display, FilterField, Recipe};

use crate::i18n::{t, Translations};
use crate::model::App;
use crate::view::theme::Styles;

/// 表格列配置
pub struct ColumnSpec {
    /// 表头文本
    pub label: fn(&Translations) -> &'static str,
    /// 列宽
    pub width: Constraint,
    /// 单元格文本
    pub render: fn(&Recipe) -> String,
    /// 单元格样式
    pub style: fn() -> Style,
    /// 绑定的过滤字段，过滤栏的输入框与之对齐
    pub filter: Option<FilterField>,
}

/// 表格列，从左到右
pub static COLUMNS: [ColumnSpec; 5] = [
    ColumnSpec {
        label: |t| t.table.column_title,
        width: Constraint::Percentage(34),
        render: |r| r.title.clone(),
        style: Styles::text,
        filter: Some(FilterField::Title),
    },
    ColumnSpec {
        label: |t| t.table.column_cuisine,
        width: Constraint::Percentage(18),
        render: |r| display::cuisine_label(r).to_string(),
        style: Styles::text,
        filter: Some(FilterField::Cuisine),
    },
    ColumnSpec {
        label: |t| t.table.column_rating,
        width: Constraint::Percentage(20),
        render: |r| display::rating_stars(r.rating),
        style: Styles::star,
        filter: Some(FilterField::Rating),
    },
    ColumnSpec {
        label: |t| t.table.column_total_time,
        width: Constraint::Percentage(14),
        render: |r| display::minutes_cell(r.total_time),
        style: Styles::text,
        filter: Some(FilterField::TotalTime),
    },
    ColumnSpec {
        label: |t| t.table.column_serves,
        width: Constraint::Percentage(14),
        render: |r| display::serves_label(r).to_string(),
        style: Styles::muted,
        filter: None,
    },
];

/// 各列宽度
pub fn column_widths() -> impl Iterator<Item = Constraint> {
    COLUMNS.iter().map(|c| c.width)
}

/// 渲染表格区域
pub fn render(app: &App, frame: &mut Frame, area: Rect, loading: bool) {
    let texts = t();
    let border_style = if app.focus.is_table() {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if loading {
        block = block.title(Span::styled(format!(" {} ", texts.common.loading), Styles::warning()));
    }

    let records = app.list.records();
    if records.is_empty() {
        let message = if loading {
            texts.table.loading_recipes
        } else {
            // 分页模式下页码超出当前数据量
            texts.table.empty_page
        };
        let paragraph = Paragraph::new(vec![Line::from(""), Line::styled(message, Styles::muted())])
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from((c.label)(texts)))).style(Styles::title());

    let row_style = if loading { Styles::muted() } else { Style::default() };
    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            Row::new(
                COLUMNS
                    .iter()
                    .map(|c| Cell::from((c.render)(record)).style((c.style)())),
            )
            .style(row_style)
        })
        .collect();

    let table = Table::new(rows, column_widths())
        .header(header)
        .block(block)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.table.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_serves_column_has_no_filter() {
        let unfiltered: Vec<_> = COLUMNS.iter().filter(|c| c.filter.is_none()).collect();
        assert_eq!(unfiltered.len(), 1);
        assert_eq!((unfiltered[0].label)(t()), "Serves");
    }

    #[test]
    fn cells_use_fallbacks() {
        let recipe = Recipe::new(1, "Toast");
        let cells: Vec<String> = COLUMNS.iter().map(|c| (c.render)(&recipe)).collect();
        assert_eq!(cells, vec!["Toast", "N/A", "N/A", "N/A", "N/A"]);
    }

    #[test]
    fn rating_cell_shows_stars() {
        let mut recipe = Recipe::new(1, "Pad Thai");
        recipe.rating = Some(4.6);
        assert_eq!((COLUMNS[2].render)(&recipe), "★★★★½ (4.6)");
    }
}
