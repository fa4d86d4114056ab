use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{ModalVisibility, PaletteFocus};
use super::{App, PaletteOutcome};

impl App {
	/// Apply a key press. Returning `Some` ends the session with that outcome.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<PaletteOutcome> {
		if is_ctrl(&key, 'c') {
			return Some(self.outcome());
		}

		// Ctrl+K opens from anywhere while the terminal is held; it is inert
		// once the palette is already showing.
		if is_ctrl(&key, 'k') {
			if !self.is_open() {
				self.open_palette();
			}
			return None;
		}

		match self.visibility {
			ModalVisibility::Closed => self.handle_trigger_key(key),
			ModalVisibility::Open => {
				self.handle_palette_key(key);
				None
			}
		}
	}

	fn handle_trigger_key(&mut self, key: KeyEvent) -> Option<PaletteOutcome> {
		match key.code {
			KeyCode::Enter => {
				self.open_palette();
				None
			}
			KeyCode::Esc | KeyCode::Char('q') => Some(self.outcome()),
			_ => None,
		}
	}

	fn handle_palette_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.close_palette(),
			KeyCode::Tab => self.focus = self.focus.next(),
			KeyCode::BackTab => self.focus = self.focus.prev(),
			_ => match self.focus {
				PaletteFocus::Query => {
					if self.query_input.input(key) {
						self.sync_filter();
					}
				}
				PaletteFocus::Category => {
					if self.cycle_select(key.code, PaletteFocus::Category) {
						self.sync_filter();
					}
				}
				PaletteFocus::Price => {
					if self.cycle_select(key.code, PaletteFocus::Price) {
						self.sync_filter();
					}
				}
			},
		}
	}

	fn cycle_select(&mut self, code: KeyCode, focus: PaletteFocus) -> bool {
		let select = match focus {
			PaletteFocus::Category => &mut self.category_select,
			PaletteFocus::Price => &mut self.bracket_select,
			PaletteFocus::Query => return false,
		};
		match code {
			KeyCode::Down | KeyCode::Right => {
				select.select_next();
				true
			}
			KeyCode::Up | KeyCode::Left => {
				select.select_prev();
				true
			}
			_ => false,
		}
	}
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
	key.modifiers.contains(KeyModifiers::CONTROL)
		&& matches!(key.code, KeyCode::Char(pressed) if pressed.eq_ignore_ascii_case(&c))
}
