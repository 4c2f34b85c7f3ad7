//! 应用主消息枚举

use recipe_browser_core::FetchOutcome;

use super::{DetailMessage, FilterMessage, ModalMessage, PageMessage, TableMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（过滤栏 ↔ 表格）
    ToggleFocus,

    /// 过滤栏相关消息
    Filter(FilterMessage),

    /// 表格相关消息
    Table(TableMessage),

    /// 分页相关消息
    Page(PageMessage),

    /// 详情抽屉相关消息
    Detail(DetailMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 用当前参数重新请求
    Refresh,

    /// 清空全部过滤条件
    ClearFilters,

    /// 显示帮助
    ShowHelp,

    /// 切换界面语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 后台请求完成
    FetchCompleted(FetchOutcome),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
