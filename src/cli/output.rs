use anyhow::Result;
use serde_json::json;
use shoplight::PaletteOutcome;

/// Print a plain-text representation of the palette outcome.
pub(crate) fn print_plain(outcome: &PaletteOutcome) {
	if outcome.matches.is_empty() {
		println!("No results found.");
		return;
	}

	for product in &outcome.matches {
		println!(
			"{}\t{}\t{:.2}",
			product.title, product.category, product.price
		);
	}
}

/// Format the palette outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PaletteOutcome) -> Result<String> {
	let payload = json!({
		"query": outcome.query,
		"category": outcome.category,
		"price": outcome.bracket.map(|bracket| bracket.label()),
		"matches": outcome.matches,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the palette outcome.
pub(crate) fn print_json(outcome: &PaletteOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use shoplight::{PriceBracket, Product};

	use super::*;

	#[test]
	fn json_format_includes_filters_and_matches() {
		let outcome = PaletteOutcome {
			query: "shirt".into(),
			category: Some("men's clothing".into()),
			bracket: Some(PriceBracket::Under20),
			matches: vec![Product {
				id: 1,
				title: "Red Shirt".into(),
				category: "men's clothing".into(),
				price: 15.0,
			}],
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "shirt");
		assert_eq!(value["price"], "less than $20");
		assert_eq!(value["matches"][0]["title"], "Red Shirt");
	}

	#[test]
	fn json_format_leaves_inactive_filters_null() {
		let outcome = PaletteOutcome {
			query: String::new(),
			category: None,
			bracket: None,
			matches: Vec::new(),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert!(value["category"].is_null());
		assert!(value["price"].is_null());
		assert_eq!(value["matches"].as_array().map(Vec::len), Some(0));
	}
}
