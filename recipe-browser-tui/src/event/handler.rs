//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use recipe_browser_core::ListView;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, DetailMessage, FilterMessage, ModalMessage, PageMessage, TableMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop,                                      // 窗口大小改变等，下一帧自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 弹窗 > 详情抽屉 > 全局 > 焦点面板
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if app.is_detail_open() {
        return handle_detail_keys(key);
    }

    if let Some(msg) = handle_global_keys(key) {
        return msg;
    }

    if app.focus.is_filters() {
        handle_filter_keys(key)
    } else {
        handle_table_keys(key, app)
    }
}

/// 任何焦点下都生效的快捷键
fn handle_global_keys(key: KeyEvent) -> Option<AppMessage> {
    let msg = if DefaultKeymap::ALT_QUIT.matches(&key) {
        AppMessage::Quit
    } else if DefaultKeymap::HELP.matches(&key) {
        AppMessage::ShowHelp
    } else if DefaultKeymap::REFRESH.matches(&key) {
        AppMessage::Refresh
    } else if DefaultKeymap::CLEAR_FILTERS.matches(&key) {
        AppMessage::ClearFilters
    } else if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        AppMessage::ToggleLanguage
    } else if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        AppMessage::ToggleTheme
    } else if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        AppMessage::ToggleFocus
    } else {
        return None;
    };
    Some(msg)
}

/// 处理弹窗按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}

/// 处理详情抽屉按键
fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Detail(DetailMessage::Close);
    }
    if DefaultKeymap::TOGGLE_TIME.matches(&key) {
        return AppMessage::Detail(DetailMessage::ToggleTime);
    }
    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    AppMessage::Noop
}

/// 处理过滤栏按键：可打印字符全部作为输入
fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_FIELD.matches(&key) {
        return AppMessage::Filter(FilterMessage::ClearField);
    }
    if DefaultKeymap::FIELD_PREV.matches(&key) {
        return AppMessage::Filter(FilterMessage::PrevField);
    }
    if DefaultKeymap::FIELD_NEXT.matches(&key) {
        return AppMessage::Filter(FilterMessage::NextField);
    }

    match key.code {
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            AppMessage::Filter(FilterMessage::Input(c))
        }
        KeyCode::Backspace => AppMessage::Filter(FilterMessage::Backspace),
        // 回到表格
        KeyCode::Enter | KeyCode::Esc | KeyCode::Down => AppMessage::ToggleFocus,
        _ => AppMessage::Noop,
    }
}

/// 处理表格按键
fn handle_table_keys(key: KeyEvent, app: &App) -> AppMessage {
    if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return AppMessage::Noop;
    }

    // 搜索无结果时，Enter 即清空过滤
    if app.list.view() == ListView::EmptyFiltered && key.code == KeyCode::Enter {
        return AppMessage::ClearFilters;
    }

    if DefaultKeymap::CYCLE_LIMIT.matches(&key) {
        return AppMessage::Page(PageMessage::CycleLimit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Table(TableMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Table(TableMessage::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Table(TableMessage::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => AppMessage::Table(TableMessage::SelectLast),
        KeyCode::Enter | KeyCode::Char('i') => AppMessage::Table(TableMessage::OpenDetail),

        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => AppMessage::Page(PageMessage::Prev),
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => AppMessage::Page(PageMessage::Next),

        KeyCode::Char('r') => AppMessage::Refresh,
        KeyCode::Char('c') => AppMessage::ClearFilters,
        KeyCode::Char('/' | 'f') => AppMessage::ToggleFocus,
        KeyCode::Char('?') => AppMessage::ShowHelp,
        KeyCode::Char('q') => AppMessage::Quit,

        _ => AppMessage::Noop,
    }
}
