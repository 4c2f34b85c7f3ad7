//! 详情抽屉更新逻辑

use crate::message::DetailMessage;
use crate::model::App;

/// 处理详情抽屉消息
pub fn update(app: &mut App, msg: DetailMessage) {
    match msg {
        DetailMessage::Close => {
            app.list.deselect();
            app.detail.reset();
        }
        DetailMessage::ToggleTime => {
            if app.is_detail_open() {
                app.detail.toggle_time();
            }
        }
    }
}
