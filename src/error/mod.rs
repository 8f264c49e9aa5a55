pub mod scanner;

/// LoxError is the top-level error type for the scanner driver.
#[derive(thiserror::Error, Debug)]
pub enum LoxError {
	/// Internal or I/O failure outside the scan pass itself
	#[error("CompilerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Diagnostics reported during scanning
	#[error("Generated {0} scanner errors")]
	ScannerErrors(usize),
}

impl LoxError {
	/// Process exit status for this error, following `sysexits.h`.
	pub fn exit_code(&self) -> u8 {
		match self {
			LoxError::InternalError(_) => 74,
			LoxError::ScannerErrors(_) => 65,
		}
	}
}
