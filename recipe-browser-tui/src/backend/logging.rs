//! 文件日志
//!
//! TUI 占用了备用屏幕，日志只能写到文件：
//! `<data dir>/recipe-browser/recipe-browser.log`

use std::fs::{self, File};
use std::path::PathBuf;
use std::str::FromStr;

use simplelog::{Config, LevelFilter, WriteLogger};

/// 解析日志级别，无法识别时使用 `Info`
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Info)
}

/// 日志文件路径
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("recipe-browser").join("recipe-browser.log"))
}

/// 初始化文件日志
///
/// 失败时静默跳过（日志不是启动的前置条件），成功时返回日志文件路径。
pub fn init_logging(level: &str) -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }

    let log_file = File::create(&path).ok()?;
    WriteLogger::init(parse_level(level), Config::default(), log_file).ok()?;
    Some(path)
}
