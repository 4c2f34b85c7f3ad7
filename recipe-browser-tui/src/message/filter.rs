//! 过滤栏消息类型

/// 过滤栏相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMessage {
    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 清空当前字段
    ClearField,

    /// 下一个字段
    NextField,

    /// 上一个字段
    PrevField,
}
