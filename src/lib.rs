//! # Scanning Lox source
//!
//! User's source code: `var average = (min + max) / 2;`
//!
//! Scanning, also known as `lexing` or `lexical analysis`, takes in the
//! characters and converts them into tokens. Single characters `(`, `,`, `.`,
//! numbers `123`, string literals `"hi!"`, identifiers `min` are all tokens.
//!
//! Whitespaces and comments are ignored. So the tokens are
//! `["var", "average", "=", "(", "min", "+", "max", ")", "/", "2", ";"]`,
//! followed by an end-of-input marker.
//!
//! A lexical error never stops a scan pass. It is handed to a [`Reporter`]
//! and the scanner moves on, so the caller always gets a complete token list
//! and decides for itself whether the input is good enough for a parser.
//!
//! ```
//! use loxscan::{Diagnostic, Scanner, TokenType};
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let tokens = Scanner::new("print 1 != 2;").scan_tokens(&mut diagnostics);
//! assert!(diagnostics.is_empty());
//! assert_eq!(tokens[2].r#type(), TokenType::BangEqual);
//! assert_eq!(tokens.last().unwrap().r#type(), TokenType::Eof);
//! ```

pub mod cli;
mod error;
pub mod logging;
mod loxer;
pub mod reporter;
mod scanner;

pub use error::{
	LoxError,
	scanner::{ScanError, ScanErrorType},
};
pub use loxer::Loxer;
pub use reporter::{ConsoleReporter, Diagnostic, Reporter};
pub use scanner::{Scanner, Token, TokenType};
