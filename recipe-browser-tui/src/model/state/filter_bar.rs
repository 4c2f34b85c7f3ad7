//! 过滤栏状态
//!
//! 保存每个过滤字段的原始输入文本（不裁剪空白），
//! 裁剪与“空值即移除”由 `ListController::set_filter` 负责。

use recipe_browser_core::FilterField;

/// 单个输入框的最大长度
const MAX_INPUT_LEN: usize = 64;

/// 过滤栏状态
#[derive(Debug, Default)]
pub struct FilterBarState {
    /// 按 `FilterField::all()` 顺序排列的输入文本
    values: [String; 4],
    /// 当前编辑的字段索引
    active: usize,
}

impl FilterBarState {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(field: FilterField) -> usize {
        FilterField::all()
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0)
    }

    /// 当前编辑的字段
    pub fn active_field(&self) -> FilterField {
        FilterField::all()
            .get(self.active)
            .copied()
            .unwrap_or(FilterField::Title)
    }

    /// 某字段的输入文本
    pub fn value(&self, field: FilterField) -> &str {
        &self.values[Self::index_of(field)]
    }

    /// 输入一个字符，返回被修改的字段（超长时返回 `None`）
    pub fn input(&mut self, c: char) -> Option<FilterField> {
        let value = &mut self.values[self.active];
        if value.chars().count() >= MAX_INPUT_LEN {
            return None;
        }
        value.push(c);
        Some(self.active_field())
    }

    /// 删除最后一个字符，返回被修改的字段（原本为空时返回 `None`）
    pub fn backspace(&mut self) -> Option<FilterField> {
        self.values[self.active].pop()?;
        Some(self.active_field())
    }

    /// 清空当前字段，返回被修改的字段（原本为空时返回 `None`）
    pub fn clear_field(&mut self) -> Option<FilterField> {
        let value = &mut self.values[self.active];
        if value.is_empty() {
            return None;
        }
        value.clear();
        Some(self.active_field())
    }

    /// 切换到下一个字段
    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % self.values.len();
    }

    /// 切换到上一个字段
    pub fn prev_field(&mut self) {
        self.active = (self.active + self.values.len() - 1) % self.values.len();
    }

    /// 清空全部输入
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_edits_active_field() {
        let mut bar = FilterBarState::new();
        assert_eq!(bar.input('p'), Some(FilterField::Title));
        bar.input('i');
        assert_eq!(bar.value(FilterField::Title), "pi");

        bar.next_field();
        bar.next_field();
        assert_eq!(bar.active_field(), FilterField::Rating);
        bar.input('>');
        bar.input('4');
        assert_eq!(bar.value(FilterField::Rating), ">4");
        assert_eq!(bar.value(FilterField::Title), "pi");
    }

    #[test]
    fn field_navigation_wraps() {
        let mut bar = FilterBarState::new();
        bar.prev_field();
        assert_eq!(bar.active_field(), FilterField::TotalTime);
        bar.next_field();
        assert_eq!(bar.active_field(), FilterField::Title);
    }

    #[test]
    fn backspace_and_clear_on_empty_do_nothing() {
        let mut bar = FilterBarState::new();
        assert_eq!(bar.backspace(), None);
        assert_eq!(bar.clear_field(), None);

        bar.input('x');
        assert_eq!(bar.backspace(), Some(FilterField::Title));
        assert_eq!(bar.value(FilterField::Title), "");
    }

    #[test]
    fn input_is_capped() {
        let mut bar = FilterBarState::new();
        for _ in 0..MAX_INPUT_LEN {
            assert!(bar.input('a').is_some());
        }
        assert_eq!(bar.input('a'), None);
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut bar = FilterBarState::new();
        bar.input('a');
        bar.next_field();
        bar.input('b');
        bar.clear();
        assert!(FilterField::all().iter().all(|f| bar.value(*f).is_empty()));
    }
}
