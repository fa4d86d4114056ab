use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Single-line text editor backing the query input.
///
/// Tracks the cursor as a byte offset that always sits on a character
/// boundary. Only plain character, backspace, delete, and cursor-movement
/// keys are handled; everything else is left to the caller.
#[derive(Debug, Default)]
pub struct QueryInput {
	text: String,
	cursor: usize,
}

impl QueryInput {
	pub fn new(initial: String) -> Self {
		let cursor = initial.len();
		Self {
			text: initial,
			cursor,
		}
	}

	/// Current text content.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Display width of the text before the cursor.
	pub fn cursor_column(&self) -> u16 {
		self.text[..self.cursor].width() as u16
	}

	/// Apply a key event, returning whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.text.insert(self.cursor, c);
				self.cursor += c.len_utf8();
				true
			}
			KeyCode::Backspace => {
				if let Some((index, _)) = self.text[..self.cursor].char_indices().next_back() {
					self.text.remove(index);
					self.cursor = index;
					true
				} else {
					false
				}
			}
			KeyCode::Delete => {
				if self.cursor < self.text.len() {
					self.text.remove(self.cursor);
					true
				} else {
					false
				}
			}
			KeyCode::Left => {
				if let Some((index, _)) = self.text[..self.cursor].char_indices().next_back() {
					self.cursor = index;
				}
				false
			}
			KeyCode::Right => {
				if let Some(c) = self.text[self.cursor..].chars().next() {
					self.cursor += c.len_utf8();
				}
				false
			}
			KeyCode::Home => {
				self.cursor = 0;
				false
			}
			KeyCode::End => {
				self.cursor = self.text.len();
				false
			}
			_ => false,
		}
	}
}
