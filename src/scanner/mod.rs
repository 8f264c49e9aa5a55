//! Turns Lox source text into a flat sequence of tokens.
//!
//! Keywords are part of the shape of the language's grammar, so the parser
//! wants to know not just that it has a lexeme for some identifier, but that
//! it has a reserved word, and which keyword it is. At the point we recognize
//! a lexeme we also remember which kind of lexeme it represents.
//!
//! The rules that determine how a particular language groups characters into
//! lexemes are called its `lexical grammar`.
//!
//! We can't easily detect a `reserved word` until we've reached the end of
//! what might instead be an identifier, this is `maximal munch`. The same rule
//! makes `!=` a single token rather than `!` followed by `=`.
//!
//! Literals are kept as their source text. Turning `"123.0"` into a number is
//! left to whoever consumes the tokens.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;
use tracing::{debug, trace};

use crate::{
	ScanError, ScanErrorType,
	reporter::{Diagnostic, Reporter},
};

/// A scanner for Lox source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the last consumed character
	cursor:      usize,
	/// Tracks what source line `cursor` is on so we can produce tokens that
	/// know their location.
	line:        usize,
	/// Lexed tokens
	tokens:      Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, tokens: Vec::new() }
	}

	/// Scan all tokens from the source code.
	///
	/// Lexical errors go to `reporter` and scanning carries on with the next
	/// character, so the result always ends with exactly one [`TokenType::Eof`].
	pub fn scan_tokens<R: Reporter>(mut self, mut reporter: R) -> Vec<Token<'a>> {
		let mut error_count = 0;
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			match self.scan_token() {
				Ok(Some(token)) => {
					trace!(target: "loxscan::scanner", %token, "emit");
					self.tokens.push(token);
				}
				Ok(None) => {}
				Err(e) => {
					debug!(target: "loxscan::scanner", line = e.line(), "{e}");
					error_count += 1;
					reporter.report(Diagnostic::from(&e));
				}
			}
		}
		self.tokens.push(Token::new(Eof, "", self.line));
		debug!(
			target: "loxscan::scanner",
			tokens = self.tokens.len(),
			errors = error_count,
			lines = self.line,
			"scan finished"
		);
		self.tokens
	}

	/// Scan a single lexeme. `Ok(None)` means it was discarded.
	fn scan_token(&mut self) -> Result<Option<Token<'a>>, ScanError> {
		let Some(next_char) = self.advance() else { return Ok(None) };
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'.' => Dot,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'/' => if self.match_next('/') {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				return Ok(None);
			} else { Slash },
			' ' | '\r' | '\t' => return Ok(None),
			'\n' => { self.line += 1; return Ok(None) }
			'"' => return self.string().map(Some),
			c if c.is_ascii_digit() => self.number(),
			c if is_identifier_start(c) => self.identifier(),
			c => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(c))),
		};

		Ok(Some(self.make_token(r#type)))
	}

	/// Build a token from the current lexeme span.
	fn make_token(&self, r#type: TokenType) -> Token<'a> {
		Token::new(r#type, &self.source[self.start..self.cursor], self.line)
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the character after the current one
	fn peek_next(&self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Scan a string literal. The token keeps the line of its opening quote.
	fn string(&mut self) -> Result<Token<'a>, ScanError> {
		let line = self.line;
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1
			}
			self.advance();
		}

		if !self.match_next('"') {
			return Err(ScanError::new(self.line, ScanErrorType::UnterminatedString));
		}
		let value = &self.source[self.start + 1..self.cursor - 1];
		Ok(Token::new(String, value, line))
	}

	/// Scan a number literal
	fn number(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// Look for a fractional part.
		if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		Number
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(is_identifier_part) {
			self.advance();
		}
		TokenType::keyword_or_identifier(&self.source[self.start..self.cursor])
	}
}

fn is_identifier_start(c: char) -> bool { c.is_ascii_alphabetic() || c == '_' }

fn is_identifier_part(c: char) -> bool { c.is_ascii_alphanumeric() || c == '_' }
