//! 应用主状态结构

use recipe_browser_core::{FetchTicket, ListController, PageLimit, Recipe};

use super::{DetailState, FilterBarState, FocusPanel, ModalState, TableCursor};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 分页 / 过滤 / 请求状态机（列表数据的唯一来源）
    pub list: ListController,

    // === 各区域的本地状态 ===
    /// 过滤栏输入
    pub filter_bar: FilterBarState,
    /// 表格光标
    pub table: TableCursor,
    /// 详情抽屉
    pub detail: DetailState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 后端地址（用于标题栏和连接失败页）
    pub api_base_url: String,

    /// 等待主循环派发的请求
    pending_fetch: Option<FetchTicket>,
}

impl App {
    /// 创建新的应用实例，并排队首个请求
    pub fn new(limit: PageLimit, api_base_url: impl Into<String>) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Table,
            list: ListController::new(limit),
            filter_bar: FilterBarState::new(),
            table: TableCursor::new(),
            detail: DetailState::new(),
            modal: ModalState::new(),
            status_message: None,
            api_base_url: api_base_url.into(),
            pending_fetch: None,
        };

        let ticket = app.list.start();
        app.queue_fetch(ticket);
        app
    }

    /// 排队一个请求；旧的未派发请求直接被替换（反正会过期）
    pub fn queue_fetch(&mut self, ticket: FetchTicket) {
        self.pending_fetch = Some(ticket);
    }

    /// 取出待派发的请求
    pub fn take_pending_fetch(&mut self) -> Option<FetchTicket> {
        self.pending_fetch.take()
    }

    /// 光标所在行的记录
    pub fn highlighted_record(&self) -> Option<&Recipe> {
        self.list.records().get(self.table.selected)
    }

    /// 详情抽屉是否打开
    pub fn is_detail_open(&self) -> bool {
        self.list.selected().is_some()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
