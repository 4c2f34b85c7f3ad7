//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!             只处理 Event::Key 的 Press 事件，其余一律返回 AppMessage::Noop。
//!             按优先级依次判断：
//!                 - Ctrl+C，任何情况下都退出
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 详情抽屉打开时，调用 handle_detail_keys 处理
//!                 - Alt 组合键与 Tab，就地处理
//!                 - 焦点位于过滤栏，调用 handle_filter_keys 处理（字符即输入）
//!                 - 焦点位于表格，调用 handle_table_keys 处理（字符即快捷键）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 常用键盘映射
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     表格：
//!         ↑/↓ j/k         → TableMessage::SelectPrevious / SelectNext
//!         Enter / i       → TableMessage::OpenDetail
//!         ←/→ p/n         → PageMessage::Prev / Next
//!         l               → PageMessage::CycleLimit
//!         / 或 f          → 进入过滤栏
//!
//!     过滤栏：
//!         字符输入         → FilterMessage::Input(c)
//!         Backspace       → FilterMessage::Backspace
//!         Ctrl+U          → FilterMessage::ClearField
//!         ←/→             → FilterMessage::PrevField / NextField
//!         Enter / Esc     → 回到表格
//!
//!     详情抽屉：
//!         Esc             → DetailMessage::Close
//!         t               → DetailMessage::ToggleTime
//!
//!
//! handler.rs 创建的 AppMessage 在 src/app.rs 中被传入 update::update(app, msg)。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
