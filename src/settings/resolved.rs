/// Validated configuration consumed by the palette workflow.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) catalog_url: String,
	pub(crate) initial_query: String,
	pub(crate) theme: Option<String>,
}

impl ResolvedConfig {
	/// Print a human-readable summary for `--print-config`.
	pub(crate) fn print_summary(&self) {
		println!("catalog.url = {}", self.catalog_url);
		println!(
			"ui.theme = {}",
			self.theme.as_deref().unwrap_or("slate (default)")
		);
		if !self.initial_query.is_empty() {
			println!("ui.initial_query = {:?}", self.initial_query);
		}
	}
}
