#![warn(clippy::pedantic)]

use std::{fs, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
	/// Google Calendar import CSV
	Csv,
	/// iCalendar
	Ics,
}

/// Converts a saved WebReg page into a calendar file.
#[derive(Parser)]
#[command(name = "webreg2cal", version)]
struct Args {
	/// Saved WebReg page; read from stdin when omitted
	#[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
	path: Option<PathBuf>,
	/// Output file [default: WebRegCalendar.csv or WebRegCalendar.ics]
	#[clap(short, long, value_hint = clap::ValueHint::FilePath, conflicts_with = "stdout")]
	output: Option<PathBuf>,
	/// Print to stdout instead of writing a file
	#[clap(long)]
	stdout: bool,
	#[clap(short, long, value_enum, default_value_t = Format::Csv)]
	format: Format,
	/// Log debug output to stderr
	#[clap(short, long)]
	verbose: bool,
}

fn init_logging(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn main() -> Result<()> {
	let args = Args::parse();

	init_logging(args.verbose);

	let rows = webreg2cal_core::extract::parse_from_file(args.path.as_ref())
		.context("failed to read the WebReg page")?;

	let (contents, default_name) = match args.format {
		Format::Csv => (
			webreg2cal_core::convert(&rows)?,
			webreg2cal_core::csv::FILE_NAME,
		),
		Format::Ics => (
			webreg2cal_core::convert_to_calendar(&rows)?.to_string(),
			webreg2cal_core::ics::FILE_NAME,
		),
	};

	if args.stdout {
		write!(&mut std::io::stdout(), "{contents}")?;
	} else {
		let output = args.output.unwrap_or_else(|| PathBuf::from(default_name));

		fs::write(&output, contents)
			.with_context(|| format!("failed to write {}", output.display()))?;
		info!(path = %output.display(), "wrote calendar");
	}

	Ok(())
}
