//! 过滤栏更新逻辑

use crate::message::FilterMessage;
use crate::model::App;

/// 处理过滤栏消息
///
/// 每次字段内容发生变化都会立即向控制器提交新的过滤值并排队请求，
/// 过期的响应由控制器按代数丢弃。
pub fn update(app: &mut App, msg: FilterMessage) {
    let changed = match msg {
        FilterMessage::Input(c) => app.filter_bar.input(c),
        FilterMessage::Backspace => app.filter_bar.backspace(),
        FilterMessage::ClearField => app.filter_bar.clear_field(),
        FilterMessage::NextField => {
            app.filter_bar.next_field();
            None
        }
        FilterMessage::PrevField => {
            app.filter_bar.prev_field();
            None
        }
    };

    if let Some(field) = changed {
        let ticket = app.list.set_filter(field, app.filter_bar.value(field));
        app.queue_fetch(ticket);
    }
}
