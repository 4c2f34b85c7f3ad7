//!
//! src/backend/mod.rs
//! Backend 层：与 UI 无关的服务
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置加载（JSON 文件 + 环境变量）
//!         mod fetcher;            // 在 tokio 运行时上执行 FetchTicket
//!         mod logging;            // 文件日志（simplelog）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户翻页 / 输入过滤条件
//!         ↓
//!     Update 层调用 ListController，得到 FetchTicket，放入 app 的待发队列
//!         ↓
//!     主循环取出 FetchTicket，交给 Fetcher::dispatch
//!         ↓
//!     tokio 任务调用 recipe-browser-core 的 HttpRecipeSource
//!         ↓
//!     结果（带 generation）经通道送回主循环
//!         ↓
//!     Update 层处理 AppMessage::FetchCompleted，ListController 丢弃过期结果
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod fetcher;
mod logging;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use fetcher::Fetcher;
pub use logging::init_logging;
