use std::rc::Rc;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_PAIR_TOKEN, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Returned by the cursor anywhere outside the buffer.
pub const SENTINEL: char = '\0';

/// Character cursor over a single source text.
///
/// The scanner is driven in two steps: `advance` moves the cursor by one
/// character, `next_token` classifies from the current character and leaves
/// the cursor on the last character it consumed. A caller primes the cursor
/// with one `advance`, then alternates `next_token` and `advance` until an
/// `EndOfInput` token comes back.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: String,
    pos: i32,
    current: char,
    file: Rc<String>,
}

impl Scanner {
    pub fn new(source: &str, file: Option<String>) -> Scanner {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut buffer = String::with_capacity(source.len() + 1);
        buffer.push_str(source);
        buffer.push('\n');

        Scanner {
            source: buffer,
            pos: -1,
            current: SENTINEL,
            file: file_name,
        }
    }

    /// The scanned text, including the appended newline.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn position(&self) -> i32 {
        self.pos
    }

    pub fn current(&self) -> char {
        self.current
    }

    pub fn advance(&mut self) {
        self.pos = self.pos.saturating_add(1);
        self.current = self.char_at(self.pos);
    }

    pub fn peek(&self) -> char {
        self.char_at(self.pos.saturating_add(1))
    }

    fn char_at(&self, pos: i32) -> char {
        if pos < 0 {
            return SENTINEL;
        }

        self.source
            .as_bytes()
            .get(pos as usize)
            .map_or(SENTINEL, |byte| *byte as char)
    }

    /// True when the cursor is outside the buffer. A NUL byte inside the
    /// source is not the end of input.
    fn at_end(&self) -> bool {
        self.pos < 0 || self.pos as usize >= self.source.len()
    }

    /// The full character at the cursor, for diagnostics on non-ASCII input.
    fn char_under_cursor(&self) -> char {
        self.source
            .get(self.pos as usize..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(self.current)
    }

    fn skip_whitespace(&mut self) {
        // Tabs are not whitespace in this language.
        while self.current == ' ' {
            self.advance();
        }
    }

    fn skip_comment(&mut self) {
        if self.current == '/' && self.peek() == '/' {
            while self.current != '\n' && !self.at_end() {
                self.advance();
            }
        }
    }

    fn position_at(&self, offset: i32) -> Position {
        let clamped = offset.clamp(0, self.source.len() as i32);
        Position(clamped as u32, Rc::clone(&self.file))
    }

    /// Text from `start` through the cursor, inclusive.
    fn lexeme(&self, start: i32) -> String {
        String::from(&self.source[start as usize..=self.pos as usize])
    }

    fn span(&self, start: i32) -> Span {
        Span {
            start: self.position_at(start),
            end: self.position_at(self.pos + 1),
        }
    }

    fn abort(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.position_at(self.pos))
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();
        self.skip_comment();

        if self.at_end() {
            let end = self.position_at(self.pos);
            return Ok(MK_TOKEN!(TokenKind::EndOfInput, String::new(), Span { start: end.clone(), end }));
        }

        let token = match self.current {
            '+' => MK_TOKEN!(TokenKind::Plus, self.lexeme(self.pos), self.span(self.pos)),
            '-' => MK_TOKEN!(TokenKind::Minus, self.lexeme(self.pos), self.span(self.pos)),
            '*' => MK_TOKEN!(TokenKind::Asterisk, self.lexeme(self.pos), self.span(self.pos)),
            '/' => MK_TOKEN!(TokenKind::Slash, self.lexeme(self.pos), self.span(self.pos)),
            '=' => MK_PAIR_TOKEN!(self, TokenKind::EqualEqual, TokenKind::Equal),
            '>' => MK_PAIR_TOKEN!(self, TokenKind::GreaterEqual, TokenKind::Greater),
            '<' => MK_PAIR_TOKEN!(self, TokenKind::LessEqual, TokenKind::Less),
            '!' => MK_PAIR_TOKEN!(self, TokenKind::NotEqual, TokenKind::Not),
            '\n' => MK_TOKEN!(TokenKind::NewLine, String::from("\n"), self.span(self.pos)),
            '\'' => self.string_literal()?,
            '0'..='9' => self.number_literal()?,
            'a'..='z' => self.symbol(),
            _ => {
                return Err(self.abort(ErrorImpl::UnrecognisedCharacter {
                    character: self.char_under_cursor(),
                }));
            }
        };

        Ok(token)
    }

    fn string_literal(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        self.advance();

        while self.current != '\'' {
            if self.current == '\n' || self.at_end() {
                return Err(Error::new(
                    ErrorImpl::UnterminatedString {
                        text: String::from(&self.source[(start + 1) as usize..self.pos as usize]),
                    },
                    self.position_at(start),
                ));
            }
            self.advance();
        }

        let text = String::from(&self.source[(start + 1) as usize..self.pos as usize]);
        Ok(MK_TOKEN!(TokenKind::String, text, self.span(start)))
    }

    fn number_literal(&mut self) -> Result<Token, Error> {
        let start = self.pos;

        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' {
            self.advance();

            if !self.peek().is_ascii_digit() {
                return Err(self.abort(ErrorImpl::MalformedNumber { text: self.lexeme(start) }));
            }

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        Ok(MK_TOKEN!(TokenKind::Number, self.lexeme(start), self.span(start)))
    }

    fn symbol(&mut self) -> Token {
        let start = self.pos;

        while matches!(self.peek(), 'a'..='z' | '0'..='9') {
            self.advance();
        }

        let text = self.lexeme(start);
        let kind = Token::check_keyword(&text.to_ascii_uppercase()).unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, text, self.span(start))
    }
}

/// Runs the advance/next_token protocol over `source` to completion.
///
/// The returned tokens always end with `EndOfInput`; the first lexical error
/// stops the scan.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(source, file);
    let mut tokens = vec![];

    scanner.advance();
    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            break;
        }
        scanner.advance();
    }

    Ok(tokens)
}
