//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码，
//! 主要负责终端的初始化和恢复。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!
//!     · init_terminal      进入 raw 模式与备用屏幕，并安装恢复终端的 panic hook
//!     · restore_terminal   退出备用屏幕，恢复光标；main.rs 中无论主循环成功与否都会调用
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
