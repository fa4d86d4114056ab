//! Terminal front-end for the search palette.
//!
//! The submodules split the usual concerns: [`state`] owns the aggregate
//! [`App`] value, [`actions`] maps key events onto it, [`render`] draws the
//! current snapshot, and [`runtime`] pumps the event loop.

mod actions;
pub mod components;
mod render;
mod runtime;
mod state;
pub mod style;

pub use runtime::run;
pub use state::{App, ModalVisibility, PaletteFocus};

use crate::catalog::Product;
use crate::filter::PriceBracket;

/// Final state reported when the user leaves the palette.
#[derive(Debug, Clone)]
pub struct PaletteOutcome {
	pub query: String,
	pub category: Option<String>,
	pub bracket: Option<PriceBracket>,
	pub matches: Vec<Product>,
}
