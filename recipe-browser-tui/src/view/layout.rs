//! 主布局渲染

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use recipe_browser_core::ListView;

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 五层布局：标题栏 + 过滤栏 + 主体 + 分页栏 + 状态栏
    let [title_area, filter_area, body_area, pagination_area, status_area] = Layout::vertical([
        Constraint::Length(1), // 标题栏
        Constraint::Length(4), // 过滤栏
        Constraint::Min(3),    // 表格 / 兜底页面
        Constraint::Length(1), // 分页栏
        Constraint::Length(1), // 状态栏
    ])
    .areas(frame.area());

    render_title_bar(app, frame, title_area);
    components::filter_bar::render(app, frame, filter_area);
    render_body(app, frame, body_area);
    components::pagination::render(app, frame, pagination_area);
    components::statusbar::render(app, frame, status_area);

    // 覆盖层（在最上层）
    components::detail::render(app, frame);
    components::help::render(app, frame);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(Line::from(vec![
        Span::raw(format!(" {} ", t().common.app_name)),
        Span::raw("· "),
        Span::raw(app.api_base_url.clone()),
    ]))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

fn render_body(app: &App, frame: &mut Frame, area: Rect) {
    match app.list.view() {
        ListView::ConnectionError => {
            let detail = app.list.last_error().map(ToString::to_string);
            pages::fallback::render_connection_error(frame, area, &app.api_base_url, detail);
        }
        ListView::EmptyFiltered => pages::fallback::render_no_results(frame, area),
        ListView::EmptyCorpus => pages::fallback::render_no_data(frame, area),
        ListView::Table { loading } => pages::table::render(app, frame, area, loading),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use recipe_browser_core::{BrowserError, FilterField, PageLimit, Recipe, RecipePage};

    const API: &str = "http://localhost:8000/api";

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test terminal");
        terminal.draw(|frame| render(app, frame)).expect("draw");

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_app(records: Vec<Recipe>, total: u64) -> App {
        let mut app = App::new(PageLimit::Ten, API);
        let ticket = app.take_pending_fetch().expect("initial fetch");
        app.list.resolve(ticket.generation, Ok(RecipePage { data: records, total }));
        app
    }

    fn rows(n: i64) -> Vec<Recipe> {
        (1..=n)
            .map(|i| {
                let mut r = Recipe::new(i, format!("Recipe {i}"));
                r.cuisine = Some("Italian".into());
                r.rating = Some(4.6);
                r.total_time = Some(40);
                r.serves = Some("4 servings".into());
                r
            })
            .collect()
    }

    #[test]
    fn table_with_pagination() {
        let screen = draw(&loaded_app(rows(10), 95));

        assert!(screen.contains("Recipe Browser"));
        assert!(screen.contains(API));
        assert!(screen.contains("Recipe 1"));
        assert!(screen.contains("Italian"));
        assert!(screen.contains("★★★★½ (4.6)"));
        assert!(screen.contains("4 servings"));
        assert!(screen.contains("Page 1 of 10 (Total: 95)"));
        assert!(screen.contains("No filters"));
    }

    #[test]
    fn initial_loading_state() {
        let app = App::new(PageLimit::Ten, API);
        let screen = draw(&app);
        assert!(screen.contains("Loading recipes..."));
    }

    #[test]
    fn connection_error_names_api_address() {
        let mut app = App::new(PageLimit::Ten, API);
        let ticket = app.take_pending_fetch().expect("initial fetch");
        app.list.resolve(
            ticket.generation,
            Err(BrowserError::Network { detail: "connection refused".into() }),
        );

        let screen = draw(&app);
        assert!(screen.contains("Connection Error"));
        assert!(screen.contains("Could not connect to the API at http://localhost:8000/api."));
        assert!(!screen.contains("Recipe 1"));
    }

    #[test]
    fn empty_search_shows_no_results_panel() {
        let mut app = loaded_app(rows(10), 95);
        let ticket = app.list.set_filter(FilterField::Cuisine, "Klingon");
        app.list.resolve(ticket.generation, Ok(RecipePage { data: Vec::new(), total: 0 }));

        let screen = draw(&app);
        assert!(screen.contains("No Results Found"));
        assert!(screen.contains("Clear Filters"));
        assert!(screen.contains("Filters Active (1)"));
        assert!(screen.contains("(Pagination disabled in search mode)"));
    }

    #[test]
    fn empty_corpus_shows_no_data_panel() {
        let screen = draw(&loaded_app(Vec::new(), 0));
        assert!(screen.contains("No Data Found"));
    }

    #[test]
    fn detail_drawer_overlays_table() {
        let mut app = loaded_app(rows(3), 3);
        app.list.select(rows(3).remove(1));

        let screen = draw(&app);
        assert!(screen.contains("Description"));
        assert!(screen.contains("No description provided."));
        assert!(screen.contains("Nutrition"));
        assert!(screen.contains("Total Time: 40 mins"));
    }

    #[test]
    fn help_modal_lists_shortcuts() {
        let mut app = loaded_app(rows(3), 3);
        app.modal.show(crate::model::Modal::Help);

        let screen = draw(&app);
        assert!(screen.contains("Global shortcuts"));
        assert!(screen.contains("Toggle time breakdown"));
    }
}
