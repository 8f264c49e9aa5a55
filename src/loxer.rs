use std::{
	fs::read_to_string,
	io::{BufRead, Write},
	path::Path,
};

use anyhow::Context;
use tracing::{debug, info};

use crate::{
	LoxError,
	reporter::{ConsoleReporter, Reporter},
	scanner::{Scanner, Token},
};

/// Loxer drives the scanner over files and REPL lines and prints the tokens.
#[derive(Debug, Default)]
pub struct Loxer;

impl Loxer {
	/// Scan a whole source file.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LoxError> {
		let path = path.as_ref();
		info!(target: "loxscan::loxer", path = %path.display(), "run file");
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		self.run(&source)
	}

	/// Run the REPL prompt, one scan pass per line.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		let mut stdin = stdin.lock();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited loxscan repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			if let Err(e) = self.run(input.trim_end_matches(['\n', '\r'])) {
				eprintln!("Failed run prompt: {e}");
			}
		}
	}

	/// Scan `source` and print every token on its own line.
	pub fn run(&self, source: &str) -> Result<(), LoxError> {
		let mut reporter = ConsoleReporter::new();
		let tokens = self.scan(source, &mut reporter);
		let mut stdout = std::io::stdout().lock();
		for token in &tokens {
			writeln!(stdout, "{token}").context("Failed write token")?;
		}
		if reporter.had_error() {
			return Err(LoxError::ScannerErrors(reporter.error_count()));
		}

		Ok(())
	}

	/// Scan `source`, sending diagnostics to `reporter`.
	pub fn scan<'a, R: Reporter>(&self, source: &'a str, reporter: R) -> Vec<Token<'a>> {
		debug!(target: "loxscan::loxer", bytes = source.len(), "scan");
		Scanner::new(source).scan_tokens(reporter)
	}
}
