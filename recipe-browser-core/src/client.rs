//! 基于 HTTP 的食谱数据源

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::{BrowserError, BrowserResult};
use crate::http_client::HttpUtils;
use crate::traits::RecipeSource;
use crate::types::{FilterSet, PageLimit, RecipePage};

/// 默认后端地址
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// 默认请求超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// 通过 REST 后端读取食谱
#[derive(Debug, Clone)]
pub struct HttpRecipeSource {
    client: reqwest::Client,
    /// 不带结尾 `/` 的基础地址，如 `http://localhost:8000/api`
    base_url: String,
}

impl HttpRecipeSource {
    /// 创建数据源
    ///
    /// `base_url` 必须是 http(s) 绝对地址。
    pub fn new(base_url: &str, timeout: Duration) -> BrowserResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| BrowserError::InvalidConfig(format!("invalid API URL '{trimmed}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BrowserError::InvalidConfig(format!(
                "API URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BrowserError::InvalidConfig(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
        })
    }

    /// 基础地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 列表请求地址
    pub fn list_url(&self, page: u32, limit: PageLimit) -> String {
        format!("{}/recipes?page={page}&limit={limit}", self.base_url)
    }

    /// 搜索请求地址（参数按字段顺序排列并做 URL 编码）
    pub fn search_url(&self, filters: &FilterSet) -> String {
        let query = filters
            .to_query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        if query.is_empty() {
            format!("{}/recipes/search", self.base_url)
        } else {
            format!("{}/recipes/search?{query}", self.base_url)
        }
    }

    async fn get_page(&self, url: &str) -> BrowserResult<RecipePage> {
        let text = HttpUtils::execute_request(self.client.get(url), self.id(), url).await?;
        HttpUtils::parse_json(&text, self.id())
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    fn id(&self) -> &'static str {
        "http"
    }

    async fn list_recipes(&self, page: u32, limit: PageLimit) -> BrowserResult<RecipePage> {
        let url = self.list_url(page, limit);
        self.get_page(&url).await
    }

    async fn search_recipes(&self, filters: &FilterSet) -> BrowserResult<RecipePage> {
        let url = self.search_url(filters);
        self.get_page(&url).await
    }
}
