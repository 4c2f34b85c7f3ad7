//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部过滤栏
    Filters,
    /// 表格
    #[default]
    Table,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Filters => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::Filters,
        }
    }

    /// 是否是过滤栏
    pub fn is_filters(self) -> bool {
        matches!(self, FocusPanel::Filters)
    }

    /// 是否是表格
    pub fn is_table(self) -> bool {
        matches!(self, FocusPanel::Table)
    }
}
