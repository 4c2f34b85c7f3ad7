//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, DetailTexts, FallbackTexts, HelpActionTexts, HelpTexts, HintTexts,
    KeyNames, PaginationTexts, StatusBarTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Recipe Browser",
        loading: "Loading...",
        close: "Close",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            move_up_down: "Move",
            switch_panel: "Switch panel",
            switch_field: "Switch field",
            details: "Details",
            page: "Page",
            per_page: "Per page",
            clear_filters: "Clear filters",
            refresh: "Refresh",
            toggle_time: "Time breakdown",
            help: "Help",
            done: "Done",
        },
    },

    // ========================================================================
    // 表格
    // ========================================================================
    table: TableTexts {
        column_title: "Title",
        column_cuisine: "Cuisine",
        column_rating: "Rating",
        column_total_time: "Total Time (mins)",
        column_serves: "Serves",
        rating_placeholder: "e.g. >4.5 or <3",
        filters_active: "Filters Active ({count})",
        no_filters: "No filters",
        loading_recipes: "Loading recipes...",
        empty_page: "This page is empty.",
    },

    // ========================================================================
    // 分页栏
    // ========================================================================
    pagination: PaginationTexts {
        page_of: "Page {page} of {pages} (Total: {total})",
        results: "Results: {total}",
        disabled: "(Pagination disabled in search mode)",
        per_page: "Per page",
    },

    // ========================================================================
    // 详情抽屉
    // ========================================================================
    detail: DetailTexts {
        description: "Description",
        no_description: "No description provided.",
        total_time: "Total Time",
        cook_time: "Cook Time",
        prep_time: "Prep Time",
        serves: "Serves",
        nutrition: "Nutrition",
        nutrient_labels: [
            "Calories",
            "Carbs",
            "Cholesterol",
            "Protein",
            "Saturated Fat",
            "Sodium",
            "Sugar",
            "Total Fat",
        ],
        show_breakdown: "show breakdown",
        hide_breakdown: "hide breakdown",
    },

    // ========================================================================
    // 占位页
    // ========================================================================
    fallback: FallbackTexts {
        connection_error_title: "Connection Error",
        connection_error_message: "Could not connect to the API at {url}.",
        connection_error_hint: "Make sure the backend server is running, then press Alt+r to retry.",
        no_results_title: "No Results Found",
        no_results_message: "No recipes match your current filters.",
        clear_filters: "Clear Filters",
        no_data_title: "No Data Found",
        no_data_message: "The recipe database appears to be empty.",
        no_data_hint: "Seed the backend (run parse_recipes.py), then press Alt+r.",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        refreshing: "Refreshing...",
        filters_cleared: "Filters cleared",
        fetch_failed: "Fetch failed: {error}",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        table_shortcuts: "Table",
        filter_shortcuts: "Filters",
        detail_shortcuts: "Detail drawer",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch between filters and table",
            refresh: "Refresh",
            clear_filters: "Clear all filters",
            help: "Show this help",
            quit: "Quit",
            move_up_down: "Move Up/Down",
            open_detail: "Open recipe details",
            change_page: "Previous / next page",
            cycle_limit: "Change results per page",
            edit_filters: "Edit filters",
            type_filter: "Type to filter (applied as you type)",
            switch_field: "Switch filter field",
            clear_field: "Clear current field",
            back_to_table: "Back to table",
            toggle_time: "Toggle time breakdown",
            close_detail: "Close details",
            toggle_language: "Switch language",
            toggle_theme: "Switch theme",
        },
    },
};
