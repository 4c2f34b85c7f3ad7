//! 主循环
//!
//! 每一轮：派发排队的请求 → 收取后台结果 → 渲染 → 轮询按键。
//! 请求在 tokio 运行时上执行，UI 线程只做同步的状态更新与绘制。

use std::time::Duration;

use anyhow::Result;

use crate::backend::Fetcher;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

pub fn run(terminal: &mut Term, app: &mut App, fetcher: &mut Fetcher) -> Result<()> {
    loop {
        // 1. 派发排队中的请求
        if let Some(ticket) = app.take_pending_fetch() {
            fetcher.dispatch(ticket);
        }

        // 2. 收取已完成的请求，过期结果由控制器丢弃
        while let Some(outcome) = fetcher.try_recv() {
            update::update(app, AppMessage::FetchCompleted(outcome));
        }

        // 3. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 4. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 5. 轮询事件（100ms 超时，也决定了收取结果的频率）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
