//! 请求执行器
//!
//! 把 `ListController` 产生的 `FetchTicket` 放到 tokio 运行时上执行，
//! 结果通过无界通道送回 UI 主循环。主循环每轮用 `try_recv` 取走结果，
//! 交给 Update 层处理（过期结果由控制器丢弃）。

use std::sync::Arc;

use recipe_browser_core::{FetchOutcome, FetchTicket, RecipeSource};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 异步请求执行器
pub struct Fetcher {
    handle: Handle,
    source: Arc<dyn RecipeSource>,
    tx: UnboundedSender<FetchOutcome>,
    rx: UnboundedReceiver<FetchOutcome>,
}

impl Fetcher {
    pub fn new(handle: Handle, source: Arc<dyn RecipeSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            source,
            tx,
            rx,
        }
    }

    /// 在后台执行请求
    pub fn dispatch(&self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        log::debug!(
            "[{}] dispatching generation {}",
            source.id(),
            ticket.generation
        );

        self.handle.spawn(async move {
            let outcome = ticket.run(source.as_ref()).await;
            if tx.send(outcome).is_err() {
                log::debug!("UI loop gone, dropping fetch outcome");
            }
        });
    }

    /// 取出一个已完成的结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<FetchOutcome> {
        self.rx.try_recv().ok()
    }
}
