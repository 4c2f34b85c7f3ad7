//! Data model shared by the controller, the HTTP source and the UI.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::BrowserError;

// ============ Recipe ============

/// One browsable recipe as returned by the backend.
///
/// Optional numeric fields are decoded leniently: a JSON number or a numeric
/// string is accepted, anything else becomes `None` and is shown as a
/// fallback value by the UI instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable unique identifier.
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Average rating, 0.0 to 5.0.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    /// Preparation time in minutes.
    #[serde(default, deserialize_with = "lenient_u32")]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes.
    #[serde(default, deserialize_with = "lenient_u32")]
    pub cook_time: Option<u32>,
    /// Total time in minutes.
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_time: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    /// Nutrition facts, normalized from either an object or an encoded string.
    #[serde(default)]
    pub nutrients: Nutrients,
    /// Serving count as free text (e.g. `"8 servings"`).
    #[serde(default, deserialize_with = "lenient_text")]
    pub serves: Option<String>,
}

impl Recipe {
    /// Minimal record, used by tests and fixtures.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cuisine: None,
            rating: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            description: None,
            nutrients: Nutrients::default(),
            serves: None,
        }
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value)
        .filter(|n| *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n.round() as u32))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

// ============ Nutrients ============

/// Nutrition facts keyed by schema.org-style names (`calories`, `fatContent`, ...).
///
/// The backend stores this column as JSON and may hand it out either as an
/// object or as a string containing an encoded object. Both shapes collapse
/// into this one mapping at deserialization time; an undecodable string
/// yields an empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Nutrients(BTreeMap<String, String>);

impl Nutrients {
    /// Normalize an arbitrary JSON value into a nutrition mapping.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_object(map),
            Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
                Ok(Value::Object(map)) => Self::from_object(&map),
                Ok(_) | Err(_) => {
                    log::debug!("Ignoring undecodable nutrients blob ({} bytes)", encoded.len());
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    fn from_object(map: &serde_json::Map<String, Value>) -> Self {
        let entries = map
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => return None,
                };
                Some((key.clone(), text))
            })
            .collect();
        Self(entries)
    }

    /// Look up a nutrient value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'de> Deserialize<'de> for Nutrients {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

// ============ Response ============

/// Response body of both the listing and the search endpoint.
///
/// The backend also echoes `page` and `limit`; they carry no information the
/// client does not already have and are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePage {
    /// Records of this page (or every match, for a search).
    pub data: Vec<Recipe>,
    /// Corpus size when paging, match count when searching.
    pub total: u64,
}

// ============ Filters ============

/// Columns the search endpoint can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    /// Partial match on title.
    Title,
    /// Match on cuisine.
    Cuisine,
    /// Rating, optionally prefixed with a comparison operator (`>4.5`).
    Rating,
    /// Total time in minutes.
    TotalTime,
}

impl FilterField {
    /// All filterable fields, in column order.
    pub fn all() -> &'static [FilterField] {
        &[
            FilterField::Title,
            FilterField::Cuisine,
            FilterField::Rating,
            FilterField::TotalTime,
        ]
    }

    /// Query parameter name understood by the search endpoint.
    pub fn as_param(self) -> &'static str {
        match self {
            FilterField::Title => "title",
            FilterField::Cuisine => "cuisine",
            FilterField::Rating => "rating",
            FilterField::TotalTime => "total_time",
        }
    }

    pub fn from_param(param: &str) -> Option<FilterField> {
        Self::all().iter().copied().find(|f| f.as_param() == param)
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Active per-field search constraints.
///
/// Values are stored trimmed. A value that trims to nothing removes the
/// field, so an empty or whitespace-only entry never reaches a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet(BTreeMap<FilterField, String>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or remove a constraint. Returns `true` if the field is now active.
    pub fn set(&mut self, field: FilterField, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.0.remove(&field);
            false
        } else {
            self.0.insert(field, trimmed.to_string());
            true
        }
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: FilterField) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterField, &str)> {
        self.0.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Query parameters for the search endpoint, in field order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, &str)> {
        self.iter().map(|(f, v)| (f.as_param(), v)).collect()
    }
}

// ============ Pagination ============

/// Page sizes offered by the results-per-page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageLimit {
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageLimit {
    pub fn all() -> &'static [PageLimit] {
        &[PageLimit::Ten, PageLimit::Twenty, PageLimit::Fifty]
    }

    pub fn value(self) -> u32 {
        match self {
            PageLimit::Ten => 10,
            PageLimit::Twenty => 20,
            PageLimit::Fifty => 50,
        }
    }

    /// Only the enumerated sizes are accepted.
    pub fn from_value(value: u32) -> Option<PageLimit> {
        Self::all().iter().copied().find(|l| l.value() == value)
    }

    /// Next size in the selector, wrapping around.
    #[must_use]
    pub fn next(self) -> PageLimit {
        match self {
            PageLimit::Ten => PageLimit::Twenty,
            PageLimit::Twenty => PageLimit::Fifty,
            PageLimit::Fifty => PageLimit::Ten,
        }
    }
}

impl TryFrom<u32> for PageLimit {
    type Error = BrowserError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| {
            BrowserError::InvalidConfig(format!("page limit must be 10, 20 or 50, got {value}"))
        })
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// `max(1, ceil(total / limit))`.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Current position in the unfiltered corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-indexed page number.
    pub page: u32,
    pub limit: PageLimit,
    /// Total reported by the last successful fetch.
    pub total: u64,
}

impl PageState {
    pub fn new(limit: PageLimit) -> Self {
        Self {
            page: 1,
            limit,
            total: 0,
        }
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit.value())
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageLimit::default())
    }
}

// ============ Requests ============

/// Which endpoint the current state maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// Unfiltered browsing via page/limit.
    Paged,
    /// Search across all matches; pagination is not applicable.
    Filtered,
}

/// A fully derived request, ready to be executed by a [`RecipeSource`](crate::RecipeSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeRequest {
    Paged { page: u32, limit: PageLimit },
    Filtered(FilterSet),
}

impl RecipeRequest {
    pub fn mode(&self) -> RequestMode {
        match self {
            RecipeRequest::Paged { .. } => RequestMode::Paged,
            RecipeRequest::Filtered(_) => RequestMode::Filtered,
        }
    }
}
