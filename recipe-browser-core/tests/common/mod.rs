//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use recipe_browser_core::{
    BrowserError, BrowserResult, FilterField, FilterSet, PageLimit, Recipe, RecipePage,
    RecipeRequest, RecipeSource,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成测试用语料：`count` 条记录，菜系在 Italian / Thai 之间交替
pub fn corpus(count: usize) -> Vec<Recipe> {
    (1..=count)
        .map(|i| {
            let id = i64::try_from(i).unwrap_or_default();
            let mut recipe = Recipe::new(id, format!("Recipe {i}"));
            recipe.cuisine = Some(if i % 2 == 0 { "Italian" } else { "Thai" }.to_string());
            recipe.rating = Some(3.0 + f64::from(u32::try_from(i % 5).unwrap_or(0)) * 0.4);
            recipe
        })
        .collect()
}

/// 内存数据源
///
/// 语义与后端一致：分页列表按 `page/limit` 切片，搜索返回全部匹配。
/// 可以按页码注入延迟，或让所有请求失败。
#[derive(Default)]
pub struct ScriptedSource {
    corpus: Vec<Recipe>,
    delays: HashMap<u32, Duration>,
    failing: bool,
    requests: Mutex<Vec<RecipeRequest>>,
}

impl ScriptedSource {
    pub fn new(corpus: Vec<Recipe>) -> Self {
        Self {
            corpus,
            ..Self::default()
        }
    }

    /// 所有请求都返回网络错误
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// 延迟某一页的响应
    pub fn with_delay(mut self, page: u32, delay: Duration) -> Self {
        self.delays.insert(page, delay);
        self
    }

    /// 已执行过的请求（按到达顺序）
    pub fn requests(&self) -> Vec<RecipeRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn record(&self, request: RecipeRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }

    fn matches(recipe: &Recipe, filters: &FilterSet) -> bool {
        filters.iter().all(|(field, value)| {
            let value = value.to_lowercase();
            match field {
                FilterField::Title => recipe.title.to_lowercase().contains(&value),
                FilterField::Cuisine => recipe
                    .cuisine
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&value)),
                // 数值比较由真实后端负责，这里只做精确匹配
                FilterField::Rating => recipe.rating.is_some_and(|r| format!("{r}") == value),
                FilterField::TotalTime => recipe.total_time.is_some_and(|t| t.to_string() == value),
            }
        })
    }
}

#[async_trait]
impl RecipeSource for ScriptedSource {
    fn id(&self) -> &'static str {
        "scripted"
    }

    async fn list_recipes(&self, page: u32, limit: PageLimit) -> BrowserResult<RecipePage> {
        self.record(RecipeRequest::Paged { page, limit });
        if let Some(delay) = self.delays.get(&page) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing {
            return Err(BrowserError::Network {
                detail: "connection refused".to_string(),
            });
        }

        let limit = limit.value() as usize;
        let offset = (page.saturating_sub(1) as usize) * limit;
        let data = self.corpus.iter().skip(offset).take(limit).cloned().collect();
        Ok(RecipePage {
            data,
            total: self.corpus.len() as u64,
        })
    }

    async fn search_recipes(&self, filters: &FilterSet) -> BrowserResult<RecipePage> {
        self.record(RecipeRequest::Filtered(filters.clone()));
        if self.failing {
            return Err(BrowserError::Network {
                detail: "connection refused".to_string(),
            });
        }

        let data: Vec<Recipe> = self
            .corpus
            .iter()
            .filter(|r| Self::matches(r, filters))
            .cloned()
            .collect();
        let total = data.len() as u64;
        Ok(RecipePage { data, total })
    }
}

// ============ 本地 HTTP 服务 ============

/// 只应答一次的本地 HTTP 服务
///
/// 返回基础地址和一个任务句柄，句柄结束时给出收到的请求行
/// （如 `GET /api/recipes?page=1&limit=10 HTTP/1.1`）。
pub async fn one_shot_server(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");

    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if raw.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&raw)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (format!("http://{addr}/api"), handle)
}

/// 一个当前无人监听的本地端口
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api")
}
