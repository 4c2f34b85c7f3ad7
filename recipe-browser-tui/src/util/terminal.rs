//! 终端初始化和清理
//!
//! 进入备用屏幕并打开 raw 模式；正常退出和 panic 都走同一个 `leave_screen`，
//! 保证 shell 回到可用状态，panic 信息也能打印出来。

use std::io::{self, Stdout, Write};
use std::panic;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 窗口标题
const WINDOW_TITLE: &str = "recipe-browser";

/// 初始化终端，并安装恢复终端的 panic hook
pub fn init_terminal() -> Result<Term> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = leave_screen(&mut io::stdout());
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE))?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    leave_screen(terminal.backend_mut())?;
    Ok(())
}

/// 关闭 raw 模式、离开备用屏幕、显示光标
fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}
