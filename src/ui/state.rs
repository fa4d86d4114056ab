//! Core state container for the palette front-end.

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::catalog::{CatalogState, FetchResult};
use crate::filter::{self, CATEGORIES, FilterState, PriceBracket};
use crate::ui::PaletteOutcome;
use crate::ui::components::{QueryInput, SelectField};
use crate::ui::style::Theme;

/// Whether the palette overlay is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalVisibility {
	#[default]
	Closed,
	Open,
}

impl ModalVisibility {
	pub fn is_open(self) -> bool {
		self == Self::Open
	}
}

/// Which palette input currently receives key events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaletteFocus {
	#[default]
	Query,
	Category,
	Price,
}

impl PaletteFocus {
	pub(crate) fn next(self) -> Self {
		match self {
			Self::Query => Self::Category,
			Self::Category => Self::Price,
			Self::Price => Self::Query,
		}
	}

	pub(crate) fn prev(self) -> Self {
		match self {
			Self::Query => Self::Price,
			Self::Category => Self::Query,
			Self::Price => Self::Category,
		}
	}
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the fetched catalog, the live filter inputs, and the modal
/// visibility machine. The filtered list is never stored: it is recomputed
/// from `(catalog, filter)` on every frame, so there is no cache to fall out
/// of sync.
pub struct App {
	pub catalog: CatalogState,
	pub filter: FilterState,
	pub(crate) visibility: ModalVisibility,
	pub(crate) focus: PaletteFocus,
	pub(crate) query_input: QueryInput,
	pub(crate) category_select: SelectField,
	pub(crate) bracket_select: SelectField,
	pub(crate) theme: Theme,
	catalog_updates: Option<Receiver<FetchResult>>,
}

impl Default for App {
	fn default() -> Self {
		Self::new()
	}
}

impl App {
	pub fn new() -> Self {
		Self {
			catalog: CatalogState::default(),
			filter: FilterState::default(),
			visibility: ModalVisibility::default(),
			focus: PaletteFocus::default(),
			query_input: QueryInput::default(),
			category_select: SelectField::new("Category", CATEGORIES),
			bracket_select: SelectField::new(
				"Price",
				PriceBracket::ALL.map(PriceBracket::label),
			),
			theme: Theme::default(),
			catalog_updates: None,
		}
	}

	/// Seed the query input before the palette first opens.
	pub fn set_initial_query(&mut self, query: String) {
		self.query_input = QueryInput::new(query);
		self.sync_filter();
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	/// Attach the channel carrying the one-shot catalog fetch result.
	pub fn set_catalog_updates(&mut self, updates: Receiver<FetchResult>) {
		self.catalog_updates = Some(updates);
	}

	/// Drain the fetch channel without blocking.
	///
	/// The channel yields at most one message; once it is consumed (or the
	/// fetch thread goes away without sending) the receiver is dropped.
	pub fn pump_catalog_update(&mut self) {
		let Some(updates) = &self.catalog_updates else {
			return;
		};
		match updates.try_recv() {
			Ok(result) => {
				self.catalog.apply(result);
				self.catalog_updates = None;
			}
			Err(TryRecvError::Empty) => {}
			Err(TryRecvError::Disconnected) => {
				if matches!(self.catalog, CatalogState::Loading) {
					tracing::error!("catalog fetch thread exited without a result");
					self.catalog = CatalogState::Failed;
				}
				self.catalog_updates = None;
			}
		}
	}

	pub fn is_open(&self) -> bool {
		self.visibility.is_open()
	}

	pub(crate) fn open_palette(&mut self) {
		self.visibility = ModalVisibility::Open;
		self.focus = PaletteFocus::Query;
	}

	pub(crate) fn close_palette(&mut self) {
		self.visibility = ModalVisibility::Closed;
	}

	/// Mirror the input widgets into the canonical [`FilterState`].
	///
	/// Called after every edit; there is no submit step, filtering is live.
	pub(crate) fn sync_filter(&mut self) {
		self.filter.query = self.query_input.text().to_string();
		self.filter.category = self.category_select.value().map(str::to_owned);
		self.filter.bracket = self
			.bracket_select
			.selection()
			.map(|index| PriceBracket::ALL[index]);
	}

	/// Indices of the products passing the current filter, in catalog order.
	pub fn filtered_indices(&self) -> Vec<usize> {
		filter::filter_indices(self.catalog.products(), &self.filter)
	}

	/// Snapshot the palette state for printing after exit.
	pub fn outcome(&self) -> PaletteOutcome {
		let products = self.catalog.products();
		let matches = self
			.filtered_indices()
			.into_iter()
			.map(|index| products[index].clone())
			.collect();
		PaletteOutcome {
			query: self.filter.query.clone(),
			category: self.filter.category.clone(),
			bracket: self.filter.bracket,
			matches,
		}
	}
}
