//! 表格与分页更新逻辑

use crate::message::{PageMessage, TableMessage};
use crate::model::App;

/// 处理表格消息
pub fn update(app: &mut App, msg: TableMessage) {
    let len = app.list.records().len();

    match msg {
        TableMessage::SelectPrevious => app.table.select_previous(),
        TableMessage::SelectNext => app.table.select_next(len),
        TableMessage::SelectFirst => app.table.select_first(),
        TableMessage::SelectLast => app.table.select_last(len),
        TableMessage::OpenDetail => {
            if let Some(record) = app.highlighted_record().cloned() {
                log::debug!("[detail] Opening recipe {}", record.id);
                app.list.select(record);
                app.detail.reset();
            }
        }
    }
}

/// 处理分页消息；搜索模式或越界时控制器会拒绝，这里什么也不做
pub fn update_page(app: &mut App, msg: PageMessage) {
    let ticket = match msg {
        PageMessage::Next => app.list.next_page(),
        PageMessage::Prev => app.list.prev_page(),
        PageMessage::CycleLimit => app.list.cycle_limit(),
    };

    if let Some(ticket) = ticket {
        app.queue_fetch(ticket);
    }
}
