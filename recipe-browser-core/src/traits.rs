use async_trait::async_trait;

use crate::error::BrowserResult;
use crate::types::{FilterSet, PageLimit, RecipePage, RecipeRequest};

/// 食谱数据源 Trait
///
/// 对应后端的两个只读端点。实现者只负责执行请求，
/// 请求的推导与结果的取舍由 [`ListController`](crate::ListController) 决定。
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// 数据源标识符（用于日志）
    fn id(&self) -> &'static str;

    /// 获取未过滤的一页数据 (`GET /recipes?page&limit`)
    async fn list_recipes(&self, page: u32, limit: PageLimit) -> BrowserResult<RecipePage>;

    /// 按字段搜索，不分页 (`GET /recipes/search?...`)
    async fn search_recipes(&self, filters: &FilterSet) -> BrowserResult<RecipePage>;

    /// 执行已推导好的请求
    async fn fetch(&self, request: &RecipeRequest) -> BrowserResult<RecipePage> {
        match request {
            RecipeRequest::Paged { page, limit } => self.list_recipes(*page, *limit).await,
            RecipeRequest::Filtered(filters) => self.search_recipes(filters).await,
        }
    }
}
