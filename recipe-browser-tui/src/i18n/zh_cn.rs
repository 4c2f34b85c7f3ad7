//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "食谱浏览器",
        loading: "加载中...",
        close: "关闭",
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
            move_up_down: "移动",
            switch_panel: "切换面板",
            switch_field: "切换字段",
            details: "详情",
            page: "翻页",
            per_page: "每页条数",
            clear_filters: "清除过滤",
            refresh: "刷新",
            toggle_time: "时间明细",
            help: "帮助",
            done: "完成",
        },
    },

    // ========================================================================
    // 表格
    // ========================================================================
    table: TableTexts {
        column_title: "名称",
        column_cuisine: "菜系",
        column_rating: "评分",
        column_total_time: "总时长（分钟）",
        column_serves: "份量",
        rating_placeholder: "如 >4.5 或 <3",
        filters_active: "已启用过滤（{count}）",
        no_filters: "未设置过滤",
        loading_recipes: "正在加载食谱...",
        empty_page: "本页没有数据。",
    },

    // ========================================================================
    // 分页栏
    // ========================================================================
    pagination: PaginationTexts {
        page_of: "第 {page} / {pages} 页（共 {total} 条）",
        results: "结果：{total} 条",
        disabled: "（搜索模式下不分页）",
        per_page: "每页",
    },

    // ========================================================================
    // 详情抽屉
    // ========================================================================
    detail: DetailTexts {
        description: "简介",
        no_description: "暂无简介。",
        total_time: "总时长",
        cook_time: "烹饪时间",
        prep_time: "准备时间",
        serves: "份量",
        nutrition: "营养成分",
        nutrient_labels: [
            "热量",
            "碳水化合物",
            "胆固醇",
            "蛋白质",
            "饱和脂肪",
            "钠",
            "糖",
            "总脂肪",
        ],
        show_breakdown: "展开明细",
        hide_breakdown: "收起明细",
    },

    // ========================================================================
    // 占位页
    // ========================================================================
    fallback: FallbackTexts {
        connection_error_title: "连接失败",
        connection_error_message: "无法连接到 API：{url}",
        connection_error_hint: "请确认后端服务已启动，然后按 Alt+r 重试。",
        no_results_title: "没有匹配的结果",
        no_results_message: "没有符合当前过滤条件的食谱。",
        clear_filters: "清除过滤",
        no_data_title: "暂无数据",
        no_data_message: "食谱数据库似乎是空的。",
        no_data_hint: "请先导入数据（运行 parse_recipes.py），然后按 Alt+r。",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        refreshing: "刷新中...",
        filters_cleared: "已清除过滤条件",
        fetch_failed: "加载失败：{error}",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global_shortcuts: "全局快捷键",
        table_shortcuts: "表格",
        filter_shortcuts: "过滤栏",
        detail_shortcuts: "详情抽屉",
        close_hint: "按 Esc 关闭帮助",
        actions: HelpActionTexts {
            switch_panel: "在过滤栏与表格之间切换",
            refresh: "刷新",
            clear_filters: "清除全部过滤条件",
            help: "显示帮助",
            quit: "退出",
            move_up_down: "上下移动",
            open_detail: "查看食谱详情",
            change_page: "上一页 / 下一页",
            cycle_limit: "切换每页条数",
            edit_filters: "编辑过滤条件",
            type_filter: "输入即过滤",
            switch_field: "切换过滤字段",
            clear_field: "清空当前字段",
            back_to_table: "返回表格",
            toggle_time: "展开/收起时间明细",
            close_detail: "关闭详情",
            toggle_language: "切换语言",
            toggle_theme: "切换主题",
        },
    },
};
