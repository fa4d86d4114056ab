use anyhow::{Result, ensure};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;
use shoplight::catalog::DEFAULT_CATALOG_URL;
use shoplight::ui::style;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.url.is_some() {
			self.catalog.url = cli.url.clone();
		}
		if cli.theme.is_some() {
			self.ui.theme = cli.theme.clone();
		}
		if cli.initial_query.is_some() {
			self.ui.initial_query = cli.initial_query.clone();
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let catalog_url = self
			.catalog
			.url
			.unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
		ensure!(
			catalog_url.starts_with("http://") || catalog_url.starts_with("https://"),
			"catalog url must be an http(s) endpoint, got {catalog_url:?}"
		);

		if let Some(theme) = &self.ui.theme {
			ensure!(
				style::by_name(theme).is_some(),
				"unknown theme {theme:?}; available: {}",
				style::names().join(", ")
			);
		}

		Ok(ResolvedConfig {
			catalog_url,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme: self.ui.theme,
		})
	}
}
