//! Display helpers shared by the table and the detail drawer.

use crate::types::{Nutrients, Recipe};

/// Shown wherever a value is absent or unusable.
pub const FALLBACK: &str = "N/A";

/// Shown when a record has no description.
pub const NO_DESCRIPTION: &str = "No description provided.";

const MAX_STARS: usize = 5;

/// Nutrition rows of the detail drawer, in display order: `(key, label)`.
pub const NUTRITION_FIELDS: [(&str, &str); 8] = [
    ("calories", "Calories"),
    ("carbohydrateContent", "Carbs"),
    ("cholesterolContent", "Cholesterol"),
    ("proteinContent", "Protein"),
    ("saturatedFatContent", "Saturated Fat"),
    ("sodiumContent", "Sodium"),
    ("sugarContent", "Sugar"),
    ("fatContent", "Total Fat"),
];

/// Star badge for a rating, e.g. `★★★★½ (4.6)`.
///
/// The rating is rounded to the nearest half star; the numeric value keeps
/// one decimal. Absent or negative ratings render as [`FALLBACK`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rating_stars(rating: Option<f64>) -> String {
    let Some(rating) = rating.filter(|r| r.is_finite() && *r >= 0.0) else {
        return FALLBACK.to_string();
    };

    let halves = ((rating * 2.0).round() as usize).min(MAX_STARS * 2);
    let full = halves / 2;
    let half = halves % 2 == 1;
    let empty = MAX_STARS - full - usize::from(half);

    let mut badge = "★".repeat(full);
    if half {
        badge.push('½');
    }
    badge.push_str(&"☆".repeat(empty));
    format!("{badge} ({rating:.1})")
}

/// `"N mins"`, or [`FALLBACK`] when absent or zero.
pub fn format_minutes(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) if m > 0 => format!("{m} mins"),
        _ => FALLBACK.to_string(),
    }
}

/// Bare minute count for the table column.
pub fn minutes_cell(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) if m > 0 => m.to_string(),
        _ => FALLBACK.to_string(),
    }
}

pub fn text_or_fallback(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => FALLBACK,
    }
}

pub fn serves_label(recipe: &Recipe) -> &str {
    text_or_fallback(recipe.serves.as_deref())
}

pub fn cuisine_label(recipe: &Recipe) -> &str {
    text_or_fallback(recipe.cuisine.as_deref())
}

pub fn description_or_fallback(recipe: &Recipe) -> &str {
    match recipe.description.as_deref() {
        Some(d) if !d.trim().is_empty() => d,
        _ => NO_DESCRIPTION,
    }
}

/// Fixed nutrition list `(label, value)`; missing keys fall back to [`FALLBACK`].
pub fn nutrition_rows(nutrients: &Nutrients) -> Vec<(&'static str, String)> {
    NUTRITION_FIELDS
        .iter()
        .map(|(key, label)| {
            let value = text_or_fallback(nutrients.get(key)).to_string();
            (*label, value)
        })
        .collect()
}
