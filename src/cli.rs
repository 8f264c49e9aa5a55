use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "loxscan", after_long_help = "Prints the Lox tokens of a file or of each REPL line.")]
pub struct Cli {
	/// Log filter, e.g. `debug` or `loxscan::scanner=trace`. Overrides `RUST_LOG`.
	#[arg(long)]
	pub log:  Option<String>,
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Input file
	File { path: PathBuf },
	/// Input prompt
	Repl,
}
