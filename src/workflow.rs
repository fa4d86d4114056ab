use anyhow::Result;
use shoplight::ui::style;
use shoplight::{App, PaletteOutcome, catalog};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive palette.
pub(crate) struct PaletteWorkflow {
	app: App,
}

impl PaletteWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			catalog_url,
			initial_query,
			theme,
		} = config;

		let mut app = App::new();
		app.set_initial_query(initial_query);
		if let Some(theme) = theme.as_deref().and_then(style::by_name) {
			app.set_theme(theme);
		}

		// The one catalog fetch of the session starts here; the UI picks the
		// result up from the channel whenever it lands.
		app.set_catalog_updates(catalog::spawn(catalog_url));

		Ok(Self { app })
	}

	pub(crate) fn run(mut self) -> Result<PaletteOutcome> {
		self.app.run()
	}
}
