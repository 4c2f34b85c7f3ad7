//! 可复用的界面组件

pub mod detail;
pub mod filter_bar;
pub mod help;
pub mod pagination;
pub mod statusbar;

use ratatui::layout::Rect;

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
