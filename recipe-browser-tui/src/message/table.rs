//! 表格与分页消息类型

/// 表格相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMessage {
    /// 选择上一项
    SelectPrevious,

    /// 选择下一项
    SelectNext,

    /// 选择第一项
    SelectFirst,

    /// 选择最后一项
    SelectLast,

    /// 打开光标所在行的详情
    OpenDetail,
}

/// 分页相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMessage {
    /// 下一页
    Next,

    /// 上一页
    Prev,

    /// 切换每页条数
    CycleLimit,
}
