//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和后台结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod detail;         // 详情抽屉子消息
//!         mod filter;         // 过滤栏子消息
//!         mod modal;          // 弹窗子消息
//!         mod table;          // 表格 / 分页子消息
//!
//!
//!     主消息：
//!
//!         pub enum AppMessage {
//!             Quit,                           // 退出应用
//!             ToggleFocus,                    // 切换焦点面板
//!             Filter(FilterMessage),          // 过滤栏输入
//!             Table(TableMessage),            // 表格光标 / 打开详情
//!             Page(PageMessage),              // 翻页 / 每页条数
//!             Detail(DetailMessage),          // 详情抽屉
//!             Modal(ModalMessage),            // 弹窗
//!             Refresh,                        // 重新请求
//!             ClearFilters,                   // 清空过滤
//!             ShowHelp,                       // 显示帮助
//!             ToggleLanguage,                 // 切换语言
//!             ToggleTheme,                    // 切换主题
//!             FetchCompleted(FetchOutcome),   // 后台请求完成
//!             Noop,                           // 无操作，用于代替 Option::None
//!         }
//!
//!     除 FetchCompleted 外，其余消息都由 src/event/handler.rs 从按键翻译而来；
//!     FetchCompleted 由主循环在收到后台结果时构造。
//!
//!
//! 最后，消息被传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod detail;
mod filter;
mod modal;
mod table;

pub use app::AppMessage;
pub use detail::DetailMessage;
pub use filter::FilterMessage;
pub use modal::ModalMessage;
pub use table::{PageMessage, TableMessage};
