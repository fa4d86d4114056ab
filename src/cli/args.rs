use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, ValueEnum};

/// Command-line arguments accepted by the `shoplight` binary.
#[derive(Parser, Debug)]
#[command(
	name = "shoplight",
	version,
	about = "Terminal search palette over a remote product catalog",
	color = ColorChoice::Auto
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SHOPLIGHT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long = "url",
		value_name = "URL",
		env = "SHOPLIGHT_CATALOG_URL",
		help = "Catalog endpoint to fetch once at startup (default: the public fake store API)"
	)]
	pub(crate) url: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how the final result set is printed (default: plain)"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "list-themes", help = "List the built-in themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration before starting"
	)]
	pub(crate) print_config: bool,
}

/// How the final palette outcome is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Parse the process arguments.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn argument_definitions_are_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn url_and_theme_flags_parse() {
		let cli = CliArgs::parse_from([
			"shoplight",
			"--url",
			"https://example.com/products",
			"--theme",
			"light",
			"-o",
			"json",
		]);
		assert_eq!(cli.url.as_deref(), Some("https://example.com/products"));
		assert_eq!(cli.theme.as_deref(), Some("light"));
		assert_eq!(cli.output, OutputFormat::Json);
	}

	#[test]
	fn config_flag_accumulates() {
		let cli = CliArgs::parse_from(["shoplight", "-c", "a.toml", "-c", "b.toml"]);
		assert_eq!(cli.config.len(), 2);
	}
}
