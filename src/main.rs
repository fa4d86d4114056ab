mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::PaletteWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in shoplight::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	shoplight::logging::init()?;

	run_palette(cli.output, resolved)
}

/// Execute the palette workflow and print output in the chosen format.
fn run_palette(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PaletteWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
