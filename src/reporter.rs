//! Diagnostic sinks.
//!
//! The scanner never prints or aborts on a lexical error. It hands a
//! [`Diagnostic`] to whatever [`Reporter`] the caller passed in and keeps
//! scanning, so two scans with two reporters never share any state. Deciding
//! whether to go on to later stages is up to whoever owns the reporter.

use std::{fmt, io::Write};

use crate::ScanError;

/// A human readable diagnostic tagged with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub line:    usize,
	/// Short context label, may be empty.
	pub r#where: String,
	pub message: String,
}

impl Diagnostic {
	pub fn new(line: usize, r#where: impl Into<String>, message: impl Into<String>) -> Self {
		Self { line, r#where: r#where.into(), message: message.into() }
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[line {}] Error {}: {}", self.line, self.r#where, self.message)
	}
}

impl From<&ScanError> for Diagnostic {
	fn from(error: &ScanError) -> Self { Self::new(error.line(), "", error.to_string()) }
}

/// Receives diagnostics as they are raised.
pub trait Reporter {
	fn report(&mut self, diagnostic: Diagnostic);

	/// Report a message with no context label.
	fn error(&mut self, line: usize, message: &str) { self.report(Diagnostic::new(line, "", message)) }
}

impl Reporter for Vec<Diagnostic> {
	fn report(&mut self, diagnostic: Diagnostic) { self.push(diagnostic) }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
	fn report(&mut self, diagnostic: Diagnostic) { (**self).report(diagnostic) }
}

/// Writes every diagnostic to stderr and counts them.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
	count: usize,
}

impl ConsoleReporter {
	pub fn new() -> Self { Self::default() }

	pub fn had_error(&self) -> bool { self.count != 0 }

	pub fn error_count(&self) -> usize { self.count }

	/// Forget earlier diagnostics, e.g. between REPL lines.
	pub fn reset(&mut self) { self.count = 0 }
}

impl Reporter for ConsoleReporter {
	fn report(&mut self, diagnostic: Diagnostic) {
		self.count += 1;
		if let Err(e) = writeln!(std::io::stderr(), "{diagnostic}") {
			tracing::error!(target: "loxscan::reporter", "Failed write diagnostic: {e}");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ScanErrorType;

	#[test]
	fn diagnostic_format() {
		let diagnostic = Diagnostic::new(3, "at 'x'", "Unexpected character.");
		assert_eq!(diagnostic.to_string(), "[line 3] Error at 'x': Unexpected character.");
	}

	#[test]
	fn empty_where_renders_blank_segment() {
		let diagnostic = Diagnostic::from(&ScanError::new(7, ScanErrorType::UnterminatedString));
		assert_eq!(diagnostic.to_string(), "[line 7] Error : Unterminated string.");
	}

	#[test]
	fn vec_collects() {
		let mut diagnostics: Vec<Diagnostic> = Vec::new();
		diagnostics.error(1, "first");
		diagnostics.report(Diagnostic::new(2, "here", "second"));
		assert_eq!(diagnostics.len(), 2);
		assert_eq!(diagnostics[1].r#where, "here");
	}

	#[test]
	fn console_counts() {
		let mut reporter = ConsoleReporter::new();
		assert!(!reporter.had_error());
		reporter.error(1, "boom");
		assert!(reporter.had_error());
		assert_eq!(reporter.error_count(), 1);
		reporter.reset();
		assert!(!reporter.had_error());
	}
}
