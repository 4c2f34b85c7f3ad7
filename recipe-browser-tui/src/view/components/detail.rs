//! 详情抽屉组件
//!
//! 从右侧滑出的覆盖层，显示被选中的菜谱：标题、菜系徽章、简介、
//! 可折叠的时间明细、份量与固定顺序的营养成分表。

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use recipe_browser_core::{display, Recipe};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染详情抽屉（如果有选中的记录）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(record) = app.list.selected() else {
        return;
    };

    let area = drawer_rect(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(format!(" {} ", record.title), Styles::title()))
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());

    let paragraph = Paragraph::new(detail_lines(record, app.detail.time_expanded))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 抽屉占据右半边，上下各让出一行给标题栏和状态栏
fn drawer_rect(area: Rect) -> Rect {
    let width = (area.width / 2).max(area.width.min(40));
    let height = area.height.saturating_sub(2);
    Rect::new(area.x + area.width - width, area.y + 1.min(area.height), width, height)
}

/// 生成抽屉内容
fn detail_lines(record: &Recipe, time_expanded: bool) -> Vec<Line<'static>> {
    let texts = t();
    let section = Styles::title().add_modifier(Modifier::UNDERLINED);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", display::cuisine_label(record)), Styles::badge()),
            Span::raw("  "),
            Span::styled(display::rating_stars(record.rating), Styles::star()),
        ]),
        Line::from(""),
        Line::styled(texts.detail.description, section),
    ];

    let description = match record.description.as_deref() {
        Some(d) if !d.trim().is_empty() => d.to_string(),
        _ => texts.detail.no_description.to_string(),
    };
    lines.push(Line::styled(description, Styles::text()));
    lines.push(Line::from(""));

    // 时间明细：默认只显示总时长
    let (marker, toggle_hint) = if time_expanded {
        ("▾", texts.detail.hide_breakdown)
    } else {
        ("▸", texts.detail.show_breakdown)
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{marker} {}: ", texts.detail.total_time), Styles::title()),
        Span::styled(display::format_minutes(record.total_time), Styles::text()),
        Span::styled("   t ", Styles::hint_key()),
        Span::styled(toggle_hint, Styles::muted()),
    ]));
    if time_expanded {
        lines.push(label_value(texts.detail.cook_time, display::format_minutes(record.cook_time)));
        lines.push(label_value(texts.detail.prep_time, display::format_minutes(record.prep_time)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{}: ", texts.detail.serves), Styles::title()),
        Span::styled(display::serves_label(record).to_string(), Styles::text()),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::styled(texts.detail.nutrition, section));
    for (label, (_, value)) in texts
        .detail
        .nutrient_labels
        .iter()
        .zip(display::nutrition_rows(&record.nutrients))
    {
        lines.push(label_value(*label, value));
    }

    lines
}

fn label_value(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), Styles::muted()),
        Span::styled(value, Styles::text()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_browser_core::Nutrients;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn sample() -> Recipe {
        let mut recipe = Recipe::new(7, "Green Curry");
        recipe.cuisine = Some("Thai".into());
        recipe.total_time = Some(45);
        recipe.cook_time = Some(30);
        recipe.prep_time = Some(15);
        recipe.serves = Some("4 servings".into());
        let mut nutrients = Nutrients::default();
        nutrients.insert("calories", "389 kcal");
        nutrients.insert("fatContent", "21 g");
        recipe.nutrients = nutrients;
        recipe
    }

    #[test]
    fn collapsed_time_shows_only_total() {
        let lines = text_of(&detail_lines(&sample(), false));
        assert!(lines.iter().any(|l| l.contains("Total Time: 45 mins")));
        assert!(!lines.iter().any(|l| l.contains("Cook Time")));
    }

    #[test]
    fn expanded_time_shows_breakdown() {
        let lines = text_of(&detail_lines(&sample(), true));
        assert!(lines.iter().any(|l| l.contains("Cook Time: 30 mins")));
        assert!(lines.iter().any(|l| l.contains("Prep Time: 15 mins")));
    }

    #[test]
    fn nutrition_rows_in_fixed_order_with_fallbacks() {
        let lines = text_of(&detail_lines(&sample(), false));
        let start = lines
            .iter()
            .position(|l| l == "Nutrition")
            .expect("nutrition header");
        let rows: Vec<&str> = lines[start + 1..].iter().map(|l| l.trim()).collect();
        assert_eq!(
            rows,
            vec![
                "Calories: 389 kcal",
                "Carbs: N/A",
                "Cholesterol: N/A",
                "Protein: N/A",
                "Saturated Fat: N/A",
                "Sodium: N/A",
                "Sugar: N/A",
                "Total Fat: 21 g",
            ]
        );
    }

    #[test]
    fn undecodable_nutrition_string_falls_back_everywhere() {
        let mut recipe = Recipe::new(3, "Soup");
        recipe.nutrients = Nutrients::from_value(&serde_json::json!("{calories: oops"));

        let lines = text_of(&detail_lines(&recipe, false));
        let start = lines
            .iter()
            .position(|l| l == "Nutrition")
            .expect("nutrition header");
        assert_eq!(lines.len() - start - 1, 8);
        assert!(lines[start + 1..].iter().all(|l| l.ends_with(": N/A")));
    }

    #[test]
    fn missing_description_uses_fallback() {
        let lines = text_of(&detail_lines(&Recipe::new(1, "Toast"), false));
        assert!(lines.iter().any(|l| l == "No description provided."));
        assert!(lines.iter().any(|l| l.contains("Serves: N/A")));
    }
}
