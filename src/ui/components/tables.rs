use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::ui::style::Theme;

const TABLE_COLUMN_SPACING: u16 = 1;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
}

/// Render a result table with a themed header and separator line.
///
/// There is no row selection: the palette shows hints for list navigation but
/// does not implement it, so the table is stateless.
pub fn render_table(frame: &mut Frame, area: Rect, spec: TableSpec<'_>, theme: &Theme) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING);
	frame.render_widget(table, area);

	render_header_separator(frame, area, theme, 1);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let sep_y = area.y + header_height;

	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	let base_style = Style::new().bg(theme.header_bg());
	if width <= 2 {
		let line = " ".repeat(width);
		let para = Paragraph::new(line).style(base_style);
		frame.render_widget(para, sep_rect);
		return;
	}

	let middle = "─".repeat(width - 2);
	let middle_style = Style::new().bg(theme.header_bg()).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled(middle, middle_style),
		Span::styled(" ", base_style),
	];
	let para = Paragraph::new(Text::from(Line::from(spans)));
	frame.render_widget(para, sep_rect);
}
