//! 详情抽屉消息类型

/// 详情抽屉相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMessage {
    /// 关闭抽屉
    Close,

    /// 展开 / 收起时间明细
    ToggleTime,
}
