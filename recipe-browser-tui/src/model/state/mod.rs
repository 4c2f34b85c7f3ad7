//! 页面状态模块
//!
//! 定义各个 UI 区域的本地状态。列表数据本身由 `ListController` 持有。

mod detail;
mod filter_bar;
mod modal;
mod table;

pub use detail::DetailState;
pub use filter_bar::FilterBarState;
pub use modal::{Modal, ModalState};
pub use table::TableCursor;
