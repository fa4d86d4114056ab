/// Single-select control cycling through a fixed option list.
///
/// Index 0 is the unset placeholder ("any"); cycling wraps through it in both
/// directions, so every option is reachable with either arrow key.
#[derive(Debug)]
pub struct SelectField {
	placeholder: &'static str,
	options: Vec<String>,
	selected: usize,
}

impl SelectField {
	pub fn new<I, S>(placeholder: &'static str, options: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			placeholder,
			options: options.into_iter().map(Into::into).collect(),
			selected: 0,
		}
	}

	/// Index into the option list, or `None` when the placeholder is active.
	pub fn selection(&self) -> Option<usize> {
		self.selected.checked_sub(1)
	}

	/// The selected option label, or `None` when the placeholder is active.
	pub fn value(&self) -> Option<&str> {
		self.selection().map(|index| self.options[index].as_str())
	}

	/// Label to display for the current state.
	pub fn display(&self) -> &str {
		self.value().unwrap_or(self.placeholder)
	}

	pub fn select_next(&mut self) {
		self.selected = (self.selected + 1) % (self.options.len() + 1);
	}

	pub fn select_prev(&mut self) {
		self.selected = self
			.selected
			.checked_sub(1)
			.unwrap_or(self.options.len());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field() -> SelectField {
		SelectField::new("Category", ["men's clothing", "jewelery"])
	}

	#[test]
	fn starts_on_the_placeholder() {
		let field = field();
		assert_eq!(field.selection(), None);
		assert_eq!(field.value(), None);
		assert_eq!(field.display(), "Category");
	}

	#[test]
	fn cycles_forward_through_every_option_and_wraps() {
		let mut field = field();
		field.select_next();
		assert_eq!(field.value(), Some("men's clothing"));
		field.select_next();
		assert_eq!(field.value(), Some("jewelery"));
		field.select_next();
		assert_eq!(field.value(), None, "wraps back to the placeholder");
	}

	#[test]
	fn cycles_backward_from_the_placeholder_to_the_last_option() {
		let mut field = field();
		field.select_prev();
		assert_eq!(field.value(), Some("jewelery"));
		field.select_prev();
		assert_eq!(field.value(), Some("men's clothing"));
		field.select_prev();
		assert_eq!(field.value(), None);
	}
}
