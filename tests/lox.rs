use std::path::PathBuf;

use loxscan::{Diagnostic, LoxError, Loxer, Scanner, TokenType};

fn fixture(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name) }

#[test]
fn test_lox_file() {
	let loxer = Loxer;
	let result = loxer.run_file(fixture("test.lox"));
	assert!(result.is_ok());
}

#[test]
fn fixture_covers_every_token_type() {
	let source = std::fs::read_to_string(fixture("test.lox")).unwrap();
	let mut diagnostics: Vec<Diagnostic> = Vec::new();
	let tokens = Scanner::new(&source).scan_tokens(&mut diagnostics);
	assert!(diagnostics.is_empty());

	use TokenType::*;
	for r#type in [
		LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus, Semicolon, Slash, Star, Bang, BangEqual,
		Equal, EqualEqual, Greater, GreaterEqual, Less, LessEqual, Identifier, String, Number, And, Class, Else, False,
		Fun, For, If, Nil, Or, Print, Return, Super, This, True, Var, While, Eof,
	] {
		assert!(tokens.iter().any(|t| t.r#type() == r#type), "missing {}", r#type);
	}

	let last = tokens.last().unwrap();
	assert_eq!(last.r#type(), Eof);
	assert_eq!(last.line(), source.matches('\n').count() + 1);

	let greeting = tokens.iter().find(|t| t.lexeme() == "multi\nline").unwrap();
	assert_eq!(greeting.line(), 17);
}

#[test]
fn scan_errors_fail_the_run() {
	let err = Loxer.run("var @ = \"open").unwrap_err();
	assert!(matches!(err, LoxError::ScannerErrors(2)));
	assert_eq!(err.exit_code(), 65);
}

#[test]
fn independent_scans_in_parallel() {
	let handles: Vec<_> = (0..4)
		.map(|i| {
			std::thread::spawn(move || {
				let source = format!("var x{i} = {i};\n@");
				let mut diagnostics: Vec<Diagnostic> = Vec::new();
				let count = Scanner::new(&source).scan_tokens(&mut diagnostics).len();
				(count, diagnostics)
			})
		})
		.collect();
	for handle in handles {
		let (count, diagnostics) = handle.join().unwrap();
		assert_eq!(count, 6);
		assert_eq!(diagnostics, vec![Diagnostic::new(2, "", "Unexpected character '@'.")]);
	}
}
