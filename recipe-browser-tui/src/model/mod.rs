//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构与简单的自我维护方法，
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Filters / Table）
//!
//!         pub mod state;      // 各区域的本地状态
//!
//!     列表相关的全部业务状态（页码、每页条数、过滤条件、请求代数、
//!     加载状态、当前记录、选中的详情记录）都在 core 的 `ListController` 里，
//!     App 只是持有它。state/ 下只放纯 UI 状态：输入框文本、光标位置、
//!     抽屉里的展开开关、弹窗。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub list: ListController,           // 分页 / 过滤状态机
//!             pub filter_bar: FilterBarState,     // 过滤栏输入
//!             pub table: TableCursor,             // 表格光标
//!             pub detail: DetailState,            // 详情抽屉
//!             pub modal: ModalState,              // 弹窗状态
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub api_base_url: String,           // 后端地址
//!             pending_fetch: Option<FetchTicket>, // 待派发的请求
//!         }
//!
//!     每个会改变请求参数的操作都从 `ListController` 拿到一张 `FetchTicket`，
//!     通过 `queue_fetch()` 存起来，由主循环取出交给后台执行。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - Filters：顶部过滤栏，字符键直接输入
//!     - Table：表格，字符键作为快捷键
//!
//!     数据流：
//!         用户按 Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::ToggleFocus
//!             ↓
//!         update/mod.rs 执行 app.focus = app.focus.toggle()
//!             ↓
//!         view 层根据 app.focus 设置边框颜色
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     active: Option<Modal>，None = 无弹窗。目前只有帮助弹窗。
//!     详情抽屉不算弹窗，是否打开由 `ListController::selected()` 决定。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{DetailState, FilterBarState, Modal, ModalState, TableCursor};
