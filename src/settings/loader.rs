use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;

	use super::*;

	#[test]
	fn explicit_config_file_sets_the_catalog_url() {
		let mut file = tempfile::NamedTempFile::with_suffix(".toml").expect("temp file");
		writeln!(
			file,
			"[catalog]\nurl = \"https://store.example/api/products\"\n\n[ui]\ntheme = \"light\""
		)
		.expect("write config");

		let cli = CliArgs::parse_from([
			"shoplight",
			"--no-config",
			"--config",
			file.path().to_str().expect("utf8 path"),
		]);
		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.catalog_url, "https://store.example/api/products");
		assert_eq!(resolved.theme.as_deref(), Some("light"));
	}

	#[test]
	fn cli_flags_override_config_files() {
		let mut file = tempfile::NamedTempFile::with_suffix(".toml").expect("temp file");
		writeln!(file, "[catalog]\nurl = \"https://store.example/api/products\"")
			.expect("write config");

		let cli = CliArgs::parse_from([
			"shoplight",
			"--no-config",
			"--config",
			file.path().to_str().expect("utf8 path"),
			"--url",
			"https://override.example/products",
		]);
		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.catalog_url, "https://override.example/products");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"shoplight",
			"--no-config",
			"--config",
			"/nonexistent/shoplight.toml",
		]);
		assert!(load(&cli).is_err());
	}
}
