/// A specific scanning error with line number and type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{type}")]
pub struct ScanError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of scanning error.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, r#type: ScanErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn r#type(&self) -> &ScanErrorType { &self.r#type }
}

/// Types of scanning errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorType {
	/// Error for unexpected characters.
	UnexpectedCharacter(char),
	/// Error for unterminated strings.
	UnterminatedString,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character '{c}'.")
			}
			UnterminatedString => {
				write!(f, "Unterminated string.")
			}
		}
	}
}
