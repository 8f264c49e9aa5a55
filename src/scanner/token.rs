use std::fmt;

/// A token produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
	r#type: TokenType,
	lexeme: &'a str,
	line:   usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType, lexeme: &'a str, line: usize) -> Self { Self { r#type, lexeme, line } }

	/// The category of this token.
	pub fn r#type(&self) -> TokenType { self.r#type }

	/// The exact source text of this token, quotes excluded for strings.
	pub fn lexeme(&self) -> &'a str { self.lexeme }

	/// 1-based line of the token's first character.
	pub fn line(&self) -> usize { self.line }
}

impl fmt::Display for Token<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.r#type, self.lexeme, self.line)
	}
}

/// The different types of tokens in Lox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Comma `,`.
	Comma,
	/// Dot `.`.
	Dot,
	/// Minus `-`.
	Minus,
	/// Plus `+`.
	Plus,
	/// Semicolon `;`.
	Semicolon,
	/// Slash `/`.
	Slash,
	/// Asterisk `*`.
	Star,
	/// Bang `!`.
	Bang,
	/// Bang equal `!=`.
	BangEqual,
	/// Equal `=`.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Identifier, e.g. variable or function name.
	Identifier,
	/// String literal, e.g. `"hello"`.
	String,
	/// Number literal, e.g. `123.45`.
	Number,
	And,
	Class,
	Else,
	False,
	Fun,
	For,
	If,
	Nil,
	Or,
	Print,
	Return,
	Super,
	This,
	True,
	Var,
	While,
	/// End of file/input.
	Eof,
}

impl TokenType {
	/// Look up a reserved word. Matching is exact and case-sensitive.
	pub fn keyword(text: &str) -> Option<Self> {
		let r#type = match text {
			"and" => TokenType::And,
			"class" => TokenType::Class,
			"else" => TokenType::Else,
			"false" => TokenType::False,
			"for" => TokenType::For,
			"fun" => TokenType::Fun,
			"if" => TokenType::If,
			"nil" => TokenType::Nil,
			"or" => TokenType::Or,
			"print" => TokenType::Print,
			"return" => TokenType::Return,
			"super" => TokenType::Super,
			"this" => TokenType::This,
			"true" => TokenType::True,
			"var" => TokenType::Var,
			"while" => TokenType::While,
			_ => return None,
		};
		Some(r#type)
	}

	pub fn keyword_or_identifier(text: &str) -> Self { Self::keyword(text).unwrap_or(TokenType::Identifier) }

	pub fn is_keyword(&self) -> bool {
		use TokenType::*;
		matches!(
			self,
			And | Class | Else | False | Fun | For | If | Nil | Or | Print | Return | Super | This | True | Var | While
		)
	}

	/// Upper-snake name of the kind, e.g. `LEFT_PAREN`.
	pub fn name(&self) -> &'static str {
		use TokenType::*;
		match self {
			LeftParen => "LEFT_PAREN",
			RightParen => "RIGHT_PAREN",
			LeftBrace => "LEFT_BRACE",
			RightBrace => "RIGHT_BRACE",
			Comma => "COMMA",
			Dot => "DOT",
			Minus => "MINUS",
			Plus => "PLUS",
			Semicolon => "SEMICOLON",
			Slash => "SLASH",
			Star => "STAR",
			Bang => "BANG",
			BangEqual => "BANG_EQUAL",
			Equal => "EQUAL",
			EqualEqual => "EQUAL_EQUAL",
			Greater => "GREATER",
			GreaterEqual => "GREATER_EQUAL",
			Less => "LESS",
			LessEqual => "LESS_EQUAL",
			Identifier => "IDENTIFIER",
			String => "STRING",
			Number => "NUMBER",
			And => "AND",
			Class => "CLASS",
			Else => "ELSE",
			False => "FALSE",
			Fun => "FUN",
			For => "FOR",
			If => "IF",
			Nil => "NIL",
			Or => "OR",
			Print => "PRINT",
			Return => "RETURN",
			Super => "SUPER",
			This => "THIS",
			True => "TRUE",
			Var => "VAR",
			While => "WHILE",
			Eof => "EOF",
		}
	}
}

impl fmt::Display for TokenType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keywords_are_case_sensitive() {
		assert_eq!(TokenType::keyword("and"), Some(TokenType::And));
		assert_eq!(TokenType::keyword("AND"), None);
		assert_eq!(TokenType::keyword_or_identifier("And"), TokenType::Identifier);
		assert_eq!(TokenType::keyword_or_identifier("while"), TokenType::While);
	}

	#[test]
	fn every_keyword_round_trips_through_the_table() {
		for word in [
			"and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return", "super", "this", "true",
			"var", "while",
		] {
			let r#type = TokenType::keyword(word).unwrap();
			assert!(r#type.is_keyword());
			assert_eq!(r#type.name(), word.to_uppercase());
		}
		assert!(!TokenType::Identifier.is_keyword());
	}

	#[test]
	fn display_token() {
		assert_eq!(Token::new(TokenType::Number, "123.0", 1).to_string(), "NUMBER 123.0 1");
		assert_eq!(Token::new(TokenType::BangEqual, "!=", 3).to_string(), "BANG_EQUAL != 3");
		assert_eq!(Token::new(TokenType::Eof, "", 2).to_string(), "EOF  2");
	}
}
