//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod detail;             // 详情抽屉子消息处理
//!         mod filter;             // 过滤栏子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod table;              // 表格 / 分页子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!     使用 match 进行穷举，每个 Message 变体都对应一个状态变更，
//!     复杂的子消息委托给子模块处理。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 请求的生命周期
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层从不直接发起网络请求：
//!
//!         1. 改变请求参数的消息（过滤、翻页、每页条数、刷新、清空过滤）
//!            调用 `ListController` 的对应方法，拿到一张 `FetchTicket`；
//!         2. 通过 `app.queue_fetch(ticket)` 排队；
//!         3. 主循环取出 ticket 交给 `backend::Fetcher` 在后台执行；
//!         4. 结果以 `AppMessage::FetchCompleted` 回到这里，
//!            由 `ListController::apply` 判断是否过期。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod detail;
mod filter;
mod modal;
mod table;

use recipe_browser_core::FetchOutcome;

use crate::i18n::{self, fill, t};
use crate::message::AppMessage;
use crate::model::{App, Modal};
use crate::view::theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗或抽屉打开，不切换焦点
            if !app.modal.is_open() && !app.is_detail_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Filter(filter_msg) => {
            filter::update(app, filter_msg);
        }

        AppMessage::Table(table_msg) => {
            table::update(app, table_msg);
        }

        AppMessage::Page(page_msg) => {
            table::update_page(app, page_msg);
        }

        AppMessage::Detail(detail_msg) => {
            detail::update(app, detail_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Refresh => {
            let ticket = app.list.refresh();
            app.queue_fetch(ticket);
            app.set_status(t().status_bar.refreshing);
        }

        AppMessage::ClearFilters => {
            app.filter_bar.clear();
            let ticket = app.list.clear_filters();
            app.queue_fetch(ticket);
            app.set_status(t().status_bar.filters_cleared);
        }

        AppMessage::ShowHelp => {
            app.modal.show(Modal::Help);
        }

        AppMessage::ToggleLanguage => {
            let next = i18n::current_language().next();
            i18n::set_language(next);
            app.set_status(next.display_name());
            log::info!("Language switched to {}", next.code());
        }

        AppMessage::ToggleTheme => {
            let next = theme::current_theme().next();
            theme::set_theme(next);
            log::info!("Theme switched to {next:?}");
        }

        AppMessage::FetchCompleted(outcome) => {
            handle_fetch_completed(app, outcome);
        }

        AppMessage::Noop => {}
    }
}

/// 应用后台请求结果；过期结果被控制器丢弃，界面保持不变
fn handle_fetch_completed(app: &mut App, outcome: FetchOutcome) {
    if !app.list.apply(outcome) {
        return;
    }

    app.table.select_first();

    match app.list.last_error() {
        Some(e) => {
            let error = e.to_string();
            app.set_status(fill(t().status_bar.fetch_failed, &[("error", &error)]));
        }
        None => app.clear_status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{DetailMessage, FilterMessage, ModalMessage, PageMessage, TableMessage};
    use crate::model::FocusPanel;
    use async_trait::async_trait;
    use recipe_browser_core::{
        BrowserError, BrowserResult, FetchStatus, FilterField, FilterSet, ListView, PageLimit, Recipe,
        RecipePage, RecipeSource, RequestMode,
    };

    /// 内存数据源：偶数 id 为 Italian，奇数 id 为 Thai
    struct MemorySource {
        corpus: Vec<Recipe>,
        failing: bool,
    }

    impl MemorySource {
        fn new(n: i64) -> Self {
            let corpus = (1..=n)
                .map(|i| {
                    let mut r = Recipe::new(i, format!("Recipe {i}"));
                    r.cuisine = Some(if i % 2 == 0 { "Italian" } else { "Thai" }.to_string());
                    r
                })
                .collect();
            Self { corpus, failing: false }
        }

        fn failing() -> Self {
            Self { corpus: Vec::new(), failing: true }
        }
    }

    #[async_trait]
    impl RecipeSource for MemorySource {
        fn id(&self) -> &'static str {
            "memory"
        }

        async fn list_recipes(&self, page: u32, limit: PageLimit) -> BrowserResult<RecipePage> {
            if self.failing {
                return Err(BrowserError::Network { detail: "connection refused".into() });
            }
            let start = ((page - 1) * limit.value()) as usize;
            let data = self.corpus.iter().skip(start).take(limit.value() as usize).cloned().collect();
            Ok(RecipePage { data, total: self.corpus.len() as u64 })
        }

        async fn search_recipes(&self, filters: &FilterSet) -> BrowserResult<RecipePage> {
            if self.failing {
                return Err(BrowserError::Network { detail: "connection refused".into() });
            }
            let data: Vec<Recipe> = self
                .corpus
                .iter()
                .filter(|r| {
                    filters.iter().all(|(field, value)| match field {
                        FilterField::Title => r.title.contains(value),
                        FilterField::Cuisine => r.cuisine.as_deref().is_some_and(|c| c.contains(value)),
                        _ => true,
                    })
                })
                .cloned()
                .collect();
            let total = data.len() as u64;
            Ok(RecipePage { data, total })
        }
    }

    /// 执行排队中的请求并把结果送回 update
    fn settle(app: &mut App, source: &MemorySource) {
        let ticket = app.take_pending_fetch().expect("a fetch should be queued");
        let outcome = tokio_test::block_on(ticket.run(source));
        update(app, AppMessage::FetchCompleted(outcome));
    }

    fn loaded_app(source: &MemorySource) -> App {
        let mut app = App::new(PageLimit::Ten, "http://localhost:3000");
        settle(&mut app, source);
        app
    }

    #[test]
    fn new_app_queues_initial_fetch() {
        let mut app = App::new(PageLimit::Ten, "http://localhost:3000");
        assert!(app.list.is_loading());
        assert!(app.take_pending_fetch().is_some());
        assert!(app.take_pending_fetch().is_none());
    }

    #[test]
    fn initial_fetch_fills_table() {
        let source = MemorySource::new(25);
        let app = loaded_app(&source);

        assert_eq!(app.list.records().len(), 10);
        assert_eq!(app.list.total(), 25);
        assert_eq!(app.list.status(), FetchStatus::Idle);
        assert_eq!(app.list.view(), ListView::Table { loading: false });
        assert!(app.status_message.is_none());
    }

    #[test]
    fn paging_queues_fetches_within_range() {
        let source = MemorySource::new(25);
        let mut app = loaded_app(&source);

        update(&mut app, AppMessage::Page(PageMessage::Prev));
        assert!(app.take_pending_fetch().is_none());

        update(&mut app, AppMessage::Page(PageMessage::Next));
        update(&mut app, AppMessage::Page(PageMessage::Next));
        settle(&mut app, &source);
        assert_eq!(app.list.page(), 3);
        assert_eq!(app.list.records().len(), 5);

        update(&mut app, AppMessage::Page(PageMessage::Next));
        assert!(app.take_pending_fetch().is_none());
    }

    #[test]
    fn cycling_limit_resets_to_first_page() {
        let source = MemorySource::new(25);
        let mut app = loaded_app(&source);
        update(&mut app, AppMessage::Page(PageMessage::Next));
        settle(&mut app, &source);

        update(&mut app, AppMessage::Page(PageMessage::CycleLimit));
        settle(&mut app, &source);
        assert_eq!(app.list.limit(), PageLimit::Twenty);
        assert_eq!(app.list.page(), 1);
        assert_eq!(app.list.records().len(), 20);
    }

    #[test]
    fn typing_a_filter_switches_to_search_mode() {
        let source = MemorySource::new(25);
        let mut app = loaded_app(&source);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Filters);

        update(&mut app, AppMessage::Filter(FilterMessage::NextField));
        for c in "Thai".chars() {
            update(&mut app, AppMessage::Filter(FilterMessage::Input(c)));
        }
        assert_eq!(app.list.filters().get(FilterField::Cuisine), Some("Thai"));
        settle(&mut app, &source);

        assert_eq!(app.list.mode(), RequestMode::Filtered);
        assert_eq!(app.list.total(), 13);
        assert!(!app.list.pagination_enabled());

        update(&mut app, AppMessage::Page(PageMessage::Next));
        assert!(app.take_pending_fetch().is_none());
    }

    #[test]
    fn field_navigation_does_not_fetch() {
        let source = MemorySource::new(5);
        let mut app = loaded_app(&source);
        update(&mut app, AppMessage::Filter(FilterMessage::NextField));
        update(&mut app, AppMessage::Filter(FilterMessage::Backspace));
        assert!(app.take_pending_fetch().is_none());
    }

    #[test]
    fn only_latest_keystroke_result_is_applied() {
        let source = MemorySource::new(25);
        let mut app = loaded_app(&source);

        update(&mut app, AppMessage::Filter(FilterMessage::Input('1')));
        let stale = app.take_pending_fetch().expect("queued");
        update(&mut app, AppMessage::Filter(FilterMessage::Input('2')));
        let latest = app.take_pending_fetch().expect("queued");

        let latest_outcome = tokio_test::block_on(latest.run(&source));
        let stale_outcome = tokio_test::block_on(stale.run(&source));

        update(&mut app, AppMessage::FetchCompleted(latest_outcome));
        update(&mut app, AppMessage::FetchCompleted(stale_outcome));

        // "12" 只匹配 "Recipe 12"
        assert_eq!(app.list.total(), 1);
        assert_eq!(app.list.records()[0].id, 12);
    }

    #[test]
    fn empty_search_offers_clear_filters() {
        let source = MemorySource::new(10);
        let mut app = loaded_app(&source);

        for c in "zzz".chars() {
            update(&mut app, AppMessage::Filter(FilterMessage::Input(c)));
        }
        settle(&mut app, &source);
        assert_eq!(app.list.view(), ListView::EmptyFiltered);

        update(&mut app, AppMessage::ClearFilters);
        assert!(app.list.filters().is_empty());
        assert!(app.filter_bar.value(FilterField::Title).is_empty());
        settle(&mut app, &source);
        assert_eq!(app.list.mode(), RequestMode::Paged);
        assert_eq!(app.list.records().len(), 10);
    }

    #[test]
    fn failed_fetch_shows_connection_error() {
        let source = MemorySource::failing();
        let app = loaded_app(&source);

        assert_eq!(app.list.view(), ListView::ConnectionError);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn refresh_recovers_after_failure() {
        let mut app = loaded_app(&MemorySource::failing());
        update(&mut app, AppMessage::Refresh);
        assert!(app.list.is_loading());

        settle(&mut app, &MemorySource::new(3));
        assert_eq!(app.list.view(), ListView::Table { loading: false });
        assert!(app.status_message.is_none());
    }

    #[test]
    fn shrunk_corpus_moves_back_to_last_page() {
        let mut app = loaded_app(&MemorySource::new(25));
        update(&mut app, AppMessage::Page(PageMessage::Next));
        update(&mut app, AppMessage::Page(PageMessage::Next));
        settle(&mut app, &MemorySource::new(25));
        assert_eq!(app.list.page(), 3);

        update(&mut app, AppMessage::Refresh);
        settle(&mut app, &MemorySource::new(5));
        assert_eq!(app.list.page(), 1);
        assert_eq!(app.list.total_pages(), 1);

        update(&mut app, AppMessage::Refresh);
        settle(&mut app, &MemorySource::new(5));
        assert_eq!(app.list.records().len(), 5);
    }

    #[test]
    fn prev_page_works_after_failed_fetch() {
        let source = MemorySource::new(25);
        let mut app = loaded_app(&source);
        update(&mut app, AppMessage::Page(PageMessage::Next));
        update(&mut app, AppMessage::Page(PageMessage::Next));
        settle(&mut app, &source);

        update(&mut app, AppMessage::Refresh);
        settle(&mut app, &MemorySource::failing());
        assert_eq!(app.list.view(), ListView::ConnectionError);

        update(&mut app, AppMessage::Page(PageMessage::Prev));
        settle(&mut app, &source);
        assert_eq!(app.list.page(), 1);
        assert_eq!(app.list.records().len(), 10);
        assert!(app.list.has_next_page());
    }

    #[test]
    fn open_and_close_detail() {
        let source = MemorySource::new(5);
        let mut app = loaded_app(&source);

        update(&mut app, AppMessage::Table(TableMessage::SelectNext));
        update(&mut app, AppMessage::Table(TableMessage::OpenDetail));
        assert_eq!(app.list.selected().map(|r| r.id), Some(2));

        update(&mut app, AppMessage::Detail(DetailMessage::ToggleTime));
        assert!(app.detail.time_expanded);

        // 抽屉打开时不切换焦点
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Table);

        update(&mut app, AppMessage::Detail(DetailMessage::Close));
        assert!(!app.is_detail_open());
        assert!(!app.detail.time_expanded);
    }

    #[test]
    fn open_detail_on_empty_table_does_nothing() {
        let mut app = loaded_app(&MemorySource::new(0));
        assert_eq!(app.list.view(), ListView::EmptyCorpus);
        update(&mut app, AppMessage::Table(TableMessage::OpenDetail));
        assert!(!app.is_detail_open());
    }

    #[test]
    fn cursor_resets_when_new_page_arrives() {
        let source = MemorySource::new(25);
        let mut app = loaded_app(&source);
        update(&mut app, AppMessage::Table(TableMessage::SelectLast));
        assert_eq!(app.table.selected, 9);

        update(&mut app, AppMessage::Page(PageMessage::Next));
        settle(&mut app, &source);
        assert_eq!(app.table.selected, 0);
        assert_eq!(app.highlighted_record().map(|r| r.id), Some(11));
    }

    #[test]
    fn help_modal_opens_and_closes() {
        let mut app = App::new(PageLimit::Ten, "http://localhost:3000");
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.modal.is_open());
        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new(PageLimit::Ten, "http://localhost:3000");
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
