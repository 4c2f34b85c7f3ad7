//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **占位页归 `fallback.*`**：连接失败、无结果、无数据
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 带 `{name}` 的文本是模板，用 [`fill`](super::fill) 填充。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 表格与过滤栏
    pub table: TableTexts,
    /// 分页栏
    pub pagination: PaginationTexts,
    /// 详情抽屉
    pub detail: DetailTexts,
    /// 占位页
    pub fallback: FallbackTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub move_up_down: &'static str,
    pub switch_panel: &'static str,
    pub switch_field: &'static str,
    pub details: &'static str,
    pub page: &'static str,
    pub per_page: &'static str,
    pub clear_filters: &'static str,
    pub refresh: &'static str,
    pub toggle_time: &'static str,
    pub help: &'static str,
    pub done: &'static str,
}

// ============================================================================
// 表格
// ============================================================================

pub struct TableTexts {
    pub column_title: &'static str,
    pub column_cuisine: &'static str,
    pub column_rating: &'static str,
    pub column_total_time: &'static str,
    pub column_serves: &'static str,
    /// 评分过滤输入框的占位文本
    pub rating_placeholder: &'static str,
    /// 模板：`{count}`
    pub filters_active: &'static str,
    pub no_filters: &'static str,
    pub loading_recipes: &'static str,
    pub empty_page: &'static str,
}

// ============================================================================
// 分页栏
// ============================================================================

pub struct PaginationTexts {
    /// 模板：`{page}` `{pages}` `{total}`
    pub page_of: &'static str,
    /// 模板：`{total}`
    pub results: &'static str,
    pub disabled: &'static str,
    pub per_page: &'static str,
}

// ============================================================================
// 详情抽屉
// ============================================================================

pub struct DetailTexts {
    pub description: &'static str,
    pub no_description: &'static str,
    pub total_time: &'static str,
    pub cook_time: &'static str,
    pub prep_time: &'static str,
    pub serves: &'static str,
    pub nutrition: &'static str,
    /// 与 `display::NUTRITION_FIELDS` 顺序一致
    pub nutrient_labels: [&'static str; 8],
    pub show_breakdown: &'static str,
    pub hide_breakdown: &'static str,
}

// ============================================================================
// 占位页
// ============================================================================

pub struct FallbackTexts {
    pub connection_error_title: &'static str,
    /// 模板：`{url}`
    pub connection_error_message: &'static str,
    pub connection_error_hint: &'static str,
    pub no_results_title: &'static str,
    pub no_results_message: &'static str,
    pub clear_filters: &'static str,
    pub no_data_title: &'static str,
    pub no_data_message: &'static str,
    pub no_data_hint: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub refreshing: &'static str,
    pub filters_cleared: &'static str,
    /// 模板：`{error}`
    pub fetch_failed: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub table_shortcuts: &'static str,
    pub filter_shortcuts: &'static str,
    pub detail_shortcuts: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助弹窗快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub refresh: &'static str,
    pub clear_filters: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub move_up_down: &'static str,
    pub open_detail: &'static str,
    pub change_page: &'static str,
    pub cycle_limit: &'static str,
    pub edit_filters: &'static str,
    pub type_filter: &'static str,
    pub switch_field: &'static str,
    pub clear_field: &'static str,
    pub back_to_table: &'static str,
    pub toggle_time: &'static str,
    pub close_detail: &'static str,
    pub toggle_language: &'static str,
    pub toggle_theme: &'static str,
}
