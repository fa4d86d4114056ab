//! Theme definitions and the built-in theme registry.

use ratatui::style::{Color, Modifier, Style};

/// Style bundle consumed by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub header: Style,
	pub border: Style,
	pub focus: Style,
	pub hint: Style,
	pub empty: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	#[must_use]
	pub fn focus_style(&self) -> Style {
		self.focus
	}

	#[must_use]
	pub fn hint_style(&self) -> Style {
		self.hint
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Gray)
		.bg(Color::Indexed(236))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Indexed(244)),
	focus: Style::new()
		.fg(Color::Cyan)
		.add_modifier(Modifier::BOLD),
	hint: Style::new().fg(Color::DarkGray),
	empty: Style::new()
		.fg(Color::DarkGray)
		.add_modifier(Modifier::ITALIC),
};

const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Black)
		.bg(Color::Indexed(253))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Indexed(240)),
	focus: Style::new()
		.fg(Color::Blue)
		.add_modifier(Modifier::BOLD),
	hint: Style::new().fg(Color::Indexed(245)),
	empty: Style::new()
		.fg(Color::Indexed(245))
		.add_modifier(Modifier::ITALIC),
};

const BUILTINS: [ThemeDefinition; 2] = [
	ThemeDefinition {
		name: "slate",
		theme: SLATE,
		aliases: &["dark", "default"],
	},
	ThemeDefinition {
		name: "light",
		theme: LIGHT,
		aliases: &[],
	},
];

/// The theme used when nothing is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Names of the built-in themes, in registry order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|definition| definition.name).collect()
}

/// Look up a theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTINS
		.iter()
		.find(|definition| definition.name == name || definition.aliases.contains(&name))
		.map(|definition| definition.theme)
}
