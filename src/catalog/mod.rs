//! Remote product catalog: payload types and fetch lifecycle.
//!
//! The catalog is fetched exactly once when the palette starts. The result is
//! tracked as a tagged [`CatalogState`] so that the in-flight and failed cases
//! stay distinguishable internally, even though the UI renders all of them the
//! same way as an empty result set.

mod fetch;

pub use fetch::{FetchResult, spawn};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Endpoint queried when no catalog URL is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// A single catalog entry. Unknown payload fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: u64,
	pub title: String,
	pub category: String,
	pub price: f64,
}

/// Failure modes of the one-shot catalog request.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("catalog request failed: {0}")]
	Request(#[from] reqwest::Error),
	#[error("catalog payload is not a product list: {0}")]
	Payload(#[from] serde_json::Error),
}

/// Lifecycle of the catalog over the session.
///
/// `Loading` and `Failed` both expose an empty product slice; the palette
/// shows "No results found." for either, matching the loaded-empty case.
#[derive(Debug, Default)]
pub enum CatalogState {
	#[default]
	Loading,
	Loaded(Vec<Product>),
	Failed,
}

impl CatalogState {
	/// The raw product list, or an empty slice while loading or after failure.
	pub fn products(&self) -> &[Product] {
		match self {
			Self::Loaded(products) => products,
			Self::Loading | Self::Failed => &[],
		}
	}

	/// Record the outcome of the fetch, logging failures and moving on.
	pub fn apply(&mut self, result: FetchResult) {
		*self = match result {
			Ok(products) => {
				tracing::info!(count = products.len(), "catalog loaded");
				Self::Loaded(products)
			}
			Err(err) => {
				tracing::error!(error = %err, "error fetching catalog");
				Self::Failed
			}
		};
	}
}
