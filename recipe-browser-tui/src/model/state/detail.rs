//! 详情抽屉状态

/// 抽屉内的本地 UI 状态，每次打开新记录时重置
#[derive(Debug, Default)]
pub struct DetailState {
    /// 时间明细（烹饪/准备时间）是否展开
    pub time_expanded: bool,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_time(&mut self) {
        self.time_expanded = !self.time_expanded;
    }

    pub fn reset(&mut self) {
        self.time_expanded = false;
    }
}
