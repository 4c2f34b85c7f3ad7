//! # recipe-browser-core
//!
//! Data model, request derivation and list state for browsing a recipe REST
//! backend. Front ends (see `recipe-browser-tui`) own the event loop and the
//! async runtime; this crate owns the rules.
//!
//! ## Backend
//!
//! | Endpoint | Used when |
//! |----------|-----------|
//! | `GET {base}/recipes?page&limit` | no filter is active |
//! | `GET {base}/recipes/search?title&cuisine&rating&total_time` | at least one filter is active |
//!
//! Both answer `{data, total}`. `base` defaults to [`DEFAULT_API_BASE`].
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use recipe_browser_core::{
//!     FilterField, HttpRecipeSource, ListController, ListView, PageLimit, DEFAULT_API_BASE,
//!     DEFAULT_TIMEOUT,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpRecipeSource::new(DEFAULT_API_BASE, DEFAULT_TIMEOUT)?;
//!     let mut controller = ListController::new(PageLimit::Ten);
//!
//!     // 1. Initial page
//!     let outcome = controller.start().run(&source).await;
//!     controller.apply(outcome);
//!
//!     // 2. Search; page goes back to 1 and pagination is disabled
//!     let outcome = controller.set_filter(FilterField::Rating, ">4.5").run(&source).await;
//!     controller.apply(outcome);
//!
//!     if let ListView::Table { .. } = controller.view() {
//!         for recipe in controller.records() {
//!             println!("{} {}", recipe.title, recipe_browser_core::display::rating_stars(recipe.rating));
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Stale responses
//!
//! Every ticket carries a generation. [`ListController::apply`] drops any
//! outcome whose generation is not the latest one issued, so tickets may be
//! executed concurrently and resolved in any order.

mod client;
mod controller;
pub mod display;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{BrowserError, BrowserResult};

// Re-export the state machine
pub use controller::{FetchOutcome, FetchStatus, FetchTicket, ListController, ListView};

// Re-export the data source seam
pub use client::{HttpRecipeSource, DEFAULT_API_BASE, DEFAULT_TIMEOUT};
pub use traits::RecipeSource;

// Re-export types
pub use types::{
    total_pages, FilterField, FilterSet, Nutrients, PageLimit, PageState, Recipe, RecipePage,
    RecipeRequest, RequestMode,
};

// Re-export utils module
pub use utils::log_sanitizer;
