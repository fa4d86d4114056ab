use std::sync::mpsc::{self, Receiver};
use std::thread;

use super::{CatalogError, Product};

/// Outcome of the one-shot catalog request.
pub type FetchResult = Result<Vec<Product>, CatalogError>;

/// Issue the catalog request on a background thread.
///
/// The returned receiver yields exactly one message. There is no retry and no
/// cancellation: if the palette exits before the response arrives, the send
/// fails and the response is discarded along with the channel.
pub fn spawn(url: String) -> Receiver<FetchResult> {
	let (tx, rx) = mpsc::channel();
	thread::spawn(move || {
		let _ = tx.send(fetch_products(&url));
	});
	rx
}

fn fetch_products(url: &str) -> FetchResult {
	let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
	let products = serde_json::from_str(&body)?;
	Ok(products)
}
