use std::process::ExitCode;

use loxscan::cli::*;
use palc::Parser;

fn main() -> ExitCode {
	let cli = Cli::parse();
	loxscan::logging::init(cli.log.as_deref());
	let loxer = loxscan::Loxer;

	match cli.mode {
		Mode::File { path } => {
			if let Err(e) = loxer.run_file(&path) {
				eprintln!("Failed run file: {e}");
				return ExitCode::from(e.exit_code());
			}
		}
		Mode::Repl => loxer.run_prompt(),
	}
	ExitCode::SUCCESS
}
