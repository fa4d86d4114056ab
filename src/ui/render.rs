use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Clear, Paragraph, Row},
};

use super::App;
use super::components::{TableSpec, render_table};
use super::state::PaletteFocus;

const PALETTE_MAX_WIDTH: u16 = 72;
const PALETTE_MAX_HEIGHT: u16 = 20;
const QUERY_PROMPT: &str = "> ";

impl App {
	pub fn draw(&self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(area);

		self.render_trigger(frame, layout[0]);

		if self.is_open() {
			self.render_palette(frame, layout[1]);
		}
	}

	/// The always-visible trigger row with its shortcut hint.
	fn render_trigger(&self, frame: &mut Frame, area: Rect) {
		let style = if self.is_open() {
			self.theme.hint_style()
		} else {
			Style::new().add_modifier(Modifier::BOLD)
		};
		let trigger = Paragraph::new(Line::from(vec![
			Span::styled("Search", style),
			Span::raw("  "),
			Span::styled("products, categories, prices…", self.theme.hint_style()),
		]));
		frame.render_widget(trigger, area);

		let hint = Paragraph::new(Span::styled("[Ctrl+K]", self.theme.hint_style()))
			.alignment(Alignment::Right);
		frame.render_widget(hint, area);
	}

	fn render_palette(&self, frame: &mut Frame, area: Rect) {
		let area = palette_rect(area);
		if area.width < 8 || area.height < 6 {
			return;
		}
		frame.render_widget(Clear, area);

		let block = Block::bordered()
			.title(" Search ")
			.border_style(self.theme.border_style());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(inner);

		self.render_query_row(frame, layout[0]);
		self.render_selector_row(frame, layout[1]);
		self.render_legend(frame, layout[2]);
		self.render_results(frame, layout[3]);
	}

	fn render_query_row(&self, frame: &mut Frame, area: Rect) {
		let prompt_style = if self.focus == PaletteFocus::Query {
			self.theme.focus_style()
		} else {
			self.theme.hint_style()
		};
		let row = Paragraph::new(Line::from(vec![
			Span::styled(QUERY_PROMPT, prompt_style),
			Span::raw(self.query_input.text()),
		]));
		frame.render_widget(row, area);

		let close = Paragraph::new(Span::styled("✕ esc", self.theme.hint_style()))
			.alignment(Alignment::Right);
		frame.render_widget(close, area);

		if self.focus == PaletteFocus::Query {
			let x = area.x + QUERY_PROMPT.len() as u16 + self.query_input.cursor_column();
			if x < area.x + area.width {
				frame.set_cursor_position(Position::new(x, area.y));
			}
		}
	}

	fn render_selector_row(&self, frame: &mut Frame, area: Rect) {
		let field_style = |focus| {
			if self.focus == focus {
				self.theme.focus_style()
			} else {
				Style::new()
			}
		};
		let row = Paragraph::new(Line::from(vec![
			Span::styled("Category: ", self.theme.hint_style()),
			Span::styled(
				self.category_select.display(),
				field_style(PaletteFocus::Category),
			),
			Span::raw("    "),
			Span::styled("Price: ", self.theme.hint_style()),
			Span::styled(
				self.bracket_select.display(),
				field_style(PaletteFocus::Price),
			),
		]));
		frame.render_widget(row, area);
	}

	fn render_legend(&self, frame: &mut Frame, area: Rect) {
		let legend = Paragraph::new(Span::styled(
			"↑ ↓ to navigate  ⏎ to select  esc to close",
			self.theme.hint_style(),
		));
		frame.render_widget(legend, area);
	}

	fn render_results(&self, frame: &mut Frame, area: Rect) {
		let products = self.catalog.products();
		let filtered = self.filtered_indices();

		if filtered.is_empty() {
			let empty = Paragraph::new("No results found.")
				.alignment(Alignment::Center)
				.style(self.theme.empty_style());
			frame.render_widget(empty, area);
			return;
		}

		let rows = filtered
			.into_iter()
			.map(|index| {
				let product = &products[index];
				Row::new(vec![
					product.title.clone(),
					product.category.clone(),
					format!("${:.2}", product.price),
				])
			})
			.collect();

		let spec = TableSpec {
			headers: vec!["Title".into(), "Category".into(), "Price".into()],
			widths: vec![
				Constraint::Fill(2),
				Constraint::Length(16),
				Constraint::Length(10),
			],
			rows,
		};
		render_table(frame, area, spec, &self.theme);
	}
}

/// Center the palette overlay inside the available area.
fn palette_rect(area: Rect) -> Rect {
	let width = area.width.min(PALETTE_MAX_WIDTH);
	let height = area.height.min(PALETTE_MAX_HEIGHT);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 4,
		width,
		height,
	}
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::super::App;
	use crate::catalog::{CatalogState, Product};

	fn sample_products() -> Vec<Product> {
		vec![
			Product {
				id: 1,
				title: "Red Shirt".into(),
				category: "men's clothing".into(),
				price: 15.0,
			},
			Product {
				id: 2,
				title: "Blue Ring".into(),
				category: "jewelery".into(),
				price: 45.0,
			},
		]
	}

	fn render(app: &App) -> String {
		let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		terminal.backend().to_string()
	}

	#[test]
	fn closed_palette_shows_only_the_trigger() {
		let app = App::new();
		let view = render(&app);
		assert!(view.contains("Search"));
		assert!(view.contains("Ctrl+K"));
		assert!(!view.contains("No results found."));
	}

	#[test]
	fn open_palette_lists_every_product_without_filters() {
		let mut app = App::new();
		app.catalog = CatalogState::Loaded(sample_products());
		app.open_palette();

		let view = render(&app);
		assert!(view.contains("Red Shirt"));
		assert!(view.contains("Blue Ring"));
		assert!(view.contains("esc to close"));
	}

	#[test]
	fn query_narrows_the_rendered_rows() {
		let mut app = App::new();
		app.catalog = CatalogState::Loaded(sample_products());
		app.set_initial_query("shirt".to_string());
		app.open_palette();

		let view = render(&app);
		assert!(view.contains("Red Shirt"));
		assert!(!view.contains("Blue Ring"));
	}

	#[test]
	fn failed_fetch_renders_the_same_as_an_empty_catalog() {
		let mut failed = App::new();
		failed.catalog = CatalogState::Failed;
		failed.open_palette();

		let mut empty = App::new();
		empty.catalog = CatalogState::Loaded(Vec::new());
		empty.open_palette();

		let failed_view = render(&failed);
		assert!(failed_view.contains("No results found."));
		assert_eq!(failed_view, render(&empty));
	}

	#[test]
	fn loading_renders_as_no_results() {
		let mut app = App::new();
		app.open_palette();
		assert!(render(&app).contains("No results found."));
	}
}
