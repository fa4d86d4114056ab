//! Pure filtering over the fetched catalog.
//!
//! [`filter_indices`] is the whole engine: given the raw product list and the
//! current [`FilterState`] it returns the indices of the products that pass
//! every active predicate, in their original order. It is deterministic, has
//! no hidden state, and is cheap enough to recompute on every frame at
//! catalog scale, so there is no caching layer.

use crate::catalog::Product;

/// The fixed category set offered by the category selector.
///
/// Matching is case-sensitive and exact; the catalog uses these strings
/// verbatim ("jewelery" included).
pub const CATEGORIES: [&str; 4] = [
	"men's clothing",
	"jewelery",
	"electronics",
	"women's clothing",
];

/// One of the four fixed price ranges offered as a single-select filter.
///
/// Each bracket is its own literal range test with an open upper bound, and
/// every bracket after the first has a lower bound equal to the previous
/// label's value. A product priced exactly at a bracket's upper bound is
/// therefore excluded from that bracket and picked up by the next one: price
/// 20 fails `Under20` but passes `Under50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBracket {
	Under20,
	Under50,
	Under100,
	Under1000,
}

impl PriceBracket {
	/// All brackets, in the order the selector offers them.
	pub const ALL: [PriceBracket; 4] = [
		PriceBracket::Under20,
		PriceBracket::Under50,
		PriceBracket::Under100,
		PriceBracket::Under1000,
	];

	/// Label shown in the selector and in printed output.
	pub fn label(self) -> &'static str {
		match self {
			Self::Under20 => "less than $20",
			Self::Under50 => "less than $50",
			Self::Under100 => "less than $100",
			Self::Under1000 => "less than $1000",
		}
	}

	/// Literal range test for this bracket.
	pub fn contains(self, price: f64) -> bool {
		match self {
			Self::Under20 => price < 20.0,
			Self::Under50 => (20.0..50.0).contains(&price),
			Self::Under100 => (50.0..100.0).contains(&price),
			Self::Under1000 => (100.0..1000.0).contains(&price),
		}
	}
}

/// The tuple of user-controlled filter inputs.
///
/// An empty query and unset selectors mean the corresponding predicate is
/// inactive; with everything inactive the filtered list is the raw list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
	pub query: String,
	pub category: Option<String>,
	pub bracket: Option<PriceBracket>,
}

impl FilterState {
	/// True when no predicate is active.
	pub fn is_empty(&self) -> bool {
		self.query.is_empty() && self.category.is_none() && self.bracket.is_none()
	}
}

/// Return the indices of the products passing all active predicates.
///
/// Predicates combine with logical AND and preserve the original relative
/// order. The query predicate is a case-folded substring test on the title;
/// it is not token-based and not fuzzy.
pub fn filter_indices(products: &[Product], filter: &FilterState) -> Vec<usize> {
	let needle = (!filter.query.is_empty()).then(|| filter.query.to_lowercase());

	products
		.iter()
		.enumerate()
		.filter(|(_, product)| passes(product, filter, needle.as_deref()))
		.map(|(index, _)| index)
		.collect()
}

fn passes(product: &Product, filter: &FilterState, needle: Option<&str>) -> bool {
	if let Some(category) = &filter.category
		&& product.category != *category
	{
		return false;
	}

	if let Some(bracket) = filter.bracket
		&& !bracket.contains(product.price)
	{
		return false;
	}

	if let Some(needle) = needle
		&& !product.title.to_lowercase().contains(needle)
	{
		return false;
	}

	true
}

#[cfg(test)]
mod tests {
	use super::*;

	fn product(id: u64, title: &str, category: &str, price: f64) -> Product {
		Product {
			id,
			title: title.to_string(),
			category: category.to_string(),
			price,
		}
	}

	fn sample_catalog() -> Vec<Product> {
		vec![
			product(1, "Red Shirt", "men's clothing", 15.0),
			product(2, "Blue Ring", "jewelery", 45.0),
		]
	}

	#[test]
	fn empty_filter_returns_raw_list_in_order() {
		let catalog = sample_catalog();
		let filter = FilterState::default();
		assert!(filter.is_empty());
		assert_eq!(filter_indices(&catalog, &filter), vec![0, 1]);
	}

	#[test]
	fn query_matches_title_substring_case_folded() {
		let catalog = sample_catalog();
		for query in ["shirt", "SHIRT", "Shi", "red sh"] {
			let filter = FilterState {
				query: query.to_string(),
				..FilterState::default()
			};
			assert_eq!(filter_indices(&catalog, &filter), vec![0], "query {query:?}");
		}
	}

	#[test]
	fn query_without_match_excludes_everything() {
		let catalog = sample_catalog();
		let filter = FilterState {
			query: "necklace".to_string(),
			..FilterState::default()
		};
		assert!(filter_indices(&catalog, &filter).is_empty());
	}

	#[test]
	fn category_selection_is_exact_and_exclusive() {
		let catalog = sample_catalog();
		let filter = FilterState {
			category: Some("jewelery".to_string()),
			..FilterState::default()
		};
		assert_eq!(filter_indices(&catalog, &filter), vec![1]);

		// Case-sensitive: a differently-cased category matches nothing.
		let filter = FilterState {
			category: Some("Jewelery".to_string()),
			..FilterState::default()
		};
		assert!(filter_indices(&catalog, &filter).is_empty());
	}

	#[test]
	fn cheapest_bracket_includes_items_under_twenty() {
		let catalog = sample_catalog();
		let filter = FilterState {
			bracket: Some(PriceBracket::Under20),
			..FilterState::default()
		};
		assert_eq!(filter_indices(&catalog, &filter), vec![0]);
	}

	#[test]
	fn bracket_boundary_price_falls_into_the_next_bracket() {
		let catalog = vec![product(1, "Boundary", "electronics", 20.0)];

		let at_twenty = FilterState {
			bracket: Some(PriceBracket::Under20),
			..FilterState::default()
		};
		assert!(filter_indices(&catalog, &at_twenty).is_empty());

		let at_fifty = FilterState {
			bracket: Some(PriceBracket::Under50),
			..FilterState::default()
		};
		assert_eq!(filter_indices(&catalog, &at_fifty), vec![0]);
	}

	#[test]
	fn brackets_have_exclusive_upper_and_inclusive_lower_bounds() {
		assert!(PriceBracket::Under20.contains(19.99));
		assert!(!PriceBracket::Under20.contains(20.0));
		assert!(PriceBracket::Under50.contains(20.0));
		assert!(!PriceBracket::Under50.contains(19.99));
		assert!(!PriceBracket::Under50.contains(50.0));
		assert!(PriceBracket::Under100.contains(50.0));
		assert!(!PriceBracket::Under100.contains(100.0));
		assert!(PriceBracket::Under1000.contains(100.0));
		assert!(!PriceBracket::Under1000.contains(1000.0));
	}

	#[test]
	fn predicates_combine_with_logical_and() {
		let catalog = vec![
			product(1, "Gold Ring", "jewelery", 120.0),
			product(2, "Silver Ring", "jewelery", 45.0),
			product(3, "Ring Binder", "electronics", 45.0),
		];
		let filter = FilterState {
			query: "ring".to_string(),
			category: Some("jewelery".to_string()),
			bracket: Some(PriceBracket::Under50),
		};
		assert_eq!(filter_indices(&catalog, &filter), vec![1]);
	}

	#[test]
	fn filtering_is_idempotent() {
		let catalog = sample_catalog();
		let filter = FilterState {
			query: "r".to_string(),
			bracket: Some(PriceBracket::Under50),
			..FilterState::default()
		};
		let first = filter_indices(&catalog, &filter);
		let second = filter_indices(&catalog, &filter);
		assert_eq!(first, second);
	}

	#[test]
	fn filtered_list_is_a_subsequence_of_the_raw_list() {
		let catalog = vec![
			product(1, "a", "electronics", 5.0),
			product(2, "b", "electronics", 25.0),
			product(3, "c", "electronics", 7.0),
			product(4, "d", "electronics", 12.0),
		];
		let filter = FilterState {
			bracket: Some(PriceBracket::Under20),
			..FilterState::default()
		};
		let indices = filter_indices(&catalog, &filter);
		assert_eq!(indices, vec![0, 2, 3]);
		assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
	}
}
