//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，把它画到终端上，从不修改状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 / 过滤栏 / 主体 / 分页栏 / 状态栏
//!         mod components;         // 过滤栏、分页栏、状态栏、详情抽屉、帮助弹窗
//!         mod pages;              // 表格与兜底页面
//!         pub mod theme;          // 主题与常用样式
//!
//!     主体区域显示什么由 `ListController::view()` 决定：
//!         ConnectionError  → pages::fallback::render_connection_error
//!         EmptyFiltered    → pages::fallback::render_no_results
//!         EmptyCorpus      → pages::fallback::render_no_data
//!         Table { .. }     → pages::table::render
//!
//!     详情抽屉和帮助弹窗最后绘制，覆盖在其它内容之上。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
