//! Integration tests for scanning whole programs.
//!
//! These drive the scanner through its public API the way a consumer does:
//! prime the cursor, then alternate `next_token` and `advance` until
//! `EndOfInput`.

use teenytiny::{
    errors::errors::ErrorImpl,
    get_line_at_position,
    lexer::{
        scanner::{tokenize, Scanner},
        tokens::{Token, TokenKind},
    },
};

fn drive(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source, Some("program.teeny".to_string()));
    let mut tokens = vec![];

    scanner.advance();
    let mut token = scanner.next_token().unwrap();
    while token.kind != TokenKind::EndOfInput {
        tokens.push(token);
        scanner.advance();
        token = scanner.next_token().unwrap();
    }

    tokens
}

#[test]
fn test_scan_program() {
    let source = "\
// fibonacci
print 'how many?'
input nums
let a = 0
let b = 1
while nums > 0 repeat
    print a
    let c = a + b
    let a = b
    let b = c
    let nums = nums - 1
endwhile";

    let tokens = drive(source);
    let lines = tokens.iter().filter(|token| token.kind == TokenKind::NewLine).count();

    // Comment line plus eleven statements, the last ended by the appended newline.
    assert_eq!(lines, 12);
    assert_eq!(tokens[0].kind, TokenKind::NewLine);
    assert_eq!(tokens[1].kind, TokenKind::Print);
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].text, "how many?");
    assert_eq!(tokens[4].kind, TokenKind::Input);
    assert_eq!(tokens[5].text, "nums");

    let keywords: Vec<TokenKind> = tokens
        .iter()
        .map(|token| token.kind)
        .filter(|kind| kind.is_keyword())
        .collect();
    assert_eq!(keywords.first(), Some(&TokenKind::Print));
    assert_eq!(keywords.last(), Some(&TokenKind::EndWhile));
    assert!(keywords.contains(&TokenKind::Repeat));
}

#[test]
fn test_scan_conditionals() {
    let source = "if x >= 10.5 then\nlabel done\ngoto done\nendif";
    let kinds: Vec<TokenKind> = drive(source).iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::If,
            TokenKind::Identifier,
            TokenKind::GreaterEqual,
            TokenKind::Number,
            TokenKind::Then,
            TokenKind::NewLine,
            TokenKind::Label,
            TokenKind::Identifier,
            TokenKind::NewLine,
            TokenKind::Goto,
            TokenKind::Identifier,
            TokenKind::NewLine,
            TokenKind::EndIf,
            TokenKind::NewLine,
        ]
    );
}

#[test]
fn test_drive_matches_tokenize() {
    let source = "let total = total * 2 / 4 - 1\nif total != 0 then\nprint total\nendif";
    let driven = drive(source);
    let tokenized = tokenize(source, Some("program.teeny".to_string())).unwrap();

    assert_eq!(driven.len() + 1, tokenized.len());
    for (left, right) in driven.iter().zip(tokenized.iter()) {
        assert_eq!(left.kind, right.kind);
        assert_eq!(left.text, right.text);
        assert_eq!(left.span, right.span);
    }
    assert_eq!(tokenized.last().unwrap().kind, TokenKind::EndOfInput);
}

#[test]
fn test_error_stops_scan() {
    let source = "let a = 1\nlet b = a % 2\nprint b";
    let error = tokenize(source, Some("program.teeny".to_string())).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnrecognisedCharacter { character: '%' });

    let (line, text, column) = get_line_at_position(source, error.get_position().0);
    assert_eq!(line, 2);
    assert_eq!(text, "let b = a % 2\n");
    assert_eq!(column, 10);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("print 'kept'", None).unwrap();

    assert_eq!(tokens[1].text, "kept");
    assert_eq!(tokens[1].to_string(), "Token {\nkind: String,\ntext: \"kept\"}");
}
