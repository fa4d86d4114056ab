//! Core crate exports for building and running the `shoplight` palette.
//!
//! The root module re-exports the catalog, filter, and UI types so that
//! embedders can assemble the palette without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod filter;
pub mod logging;
pub mod ui;

pub use catalog::{CatalogError, CatalogState, DEFAULT_CATALOG_URL, Product};
pub use filter::{CATEGORIES, FilterState, PriceBracket, filter_indices};
pub use ui::style::{Theme, default_theme};
pub use ui::{App, PaletteOutcome, run};
