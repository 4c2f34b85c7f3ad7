//! recipe-browser：菜谱数据浏览终端界面
//!
//! 启动顺序：
//!     1. 读取配置（文件 + 环境变量覆盖）并校验
//!     2. 初始化文件日志（终端被界面占用，日志不能写到 stdout）
//!     3. 设置语言与主题
//!     4. 创建 tokio 运行时与 HTTP 数据源
//!     5. 进入主循环，退出时恢复终端，并保存界面偏好

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use recipe_browser_core::HttpRecipeSource;

use backend::{AppConfig, ConfigService, Fetcher, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 配置
    let config_service = LocalConfigService::new()?;
    let (stored, init_error) = config_service.load_or_init()?;
    let config = stored.clone().with_env_overrides(|key| std::env::var(key).ok());
    config.validate()?;

    // 2. 日志
    if let Some(path) = backend::init_logging(&config.log_level) {
        log::info!("Logging to {}", path.display());
    }
    if let Some(e) = init_error {
        log::warn!("Failed to write default config: {e}");
    }
    log::info!(
        "Starting recipe-browser (api: {}, timeout: {}s, limit: {})",
        config.api_base_url,
        config.request_timeout_secs,
        config.default_limit
    );

    // 3. 语言与主题
    i18n::set_language(config.language());
    view::theme::set_theme(config.theme);

    // 4. 运行时与数据源
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let source = HttpRecipeSource::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let mut fetcher = Fetcher::new(runtime.handle().clone(), Arc::new(source));
    let mut app = model::App::new(config.page_limit(), config.api_base_url.clone());

    // 5. 主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut fetcher);

    // 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    save_preferences(&config_service, &stored);
    log::info!("Exiting recipe-browser");

    result
}

/// 运行中切换过的语言 / 主题写回配置文件；写入失败只记日志
fn save_preferences(service: &impl ConfigService, stored: &AppConfig) {
    let updated = AppConfig {
        language: i18n::current_language().code().to_string(),
        theme: view::theme::current_theme(),
        ..stored.clone()
    };
    if &updated == stored {
        return;
    }

    match service.save(&updated) {
        Ok(()) => log::info!("Saved language/theme preferences"),
        Err(e) => log::warn!("Failed to save preferences: {e}"),
    }
}
