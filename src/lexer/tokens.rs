use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Every kind by its uppercase spelling. Only the keyword band is ever
    /// handed out by `Token::check_keyword`.
    pub static ref KIND_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("EOF", TokenKind::EndOfInput);
        map.insert("NEWLINE", TokenKind::NewLine);
        map.insert("NUMBER", TokenKind::Number);
        map.insert("IDENT", TokenKind::Identifier);
        map.insert("STRING", TokenKind::String);

        map.insert("LABEL", TokenKind::Label);
        map.insert("GOTO", TokenKind::Goto);
        map.insert("PRINT", TokenKind::Print);
        map.insert("INPUT", TokenKind::Input);
        map.insert("LET", TokenKind::Let);
        map.insert("IF", TokenKind::If);
        map.insert("THEN", TokenKind::Then);
        map.insert("ENDIF", TokenKind::EndIf);
        map.insert("WHILE", TokenKind::While);
        map.insert("REPEAT", TokenKind::Repeat);
        map.insert("ENDWHILE", TokenKind::EndWhile);

        map.insert("EQ", TokenKind::Equal);
        map.insert("PLUS", TokenKind::Plus);
        map.insert("MINUS", TokenKind::Minus);
        map.insert("ASTERISK", TokenKind::Asterisk);
        map.insert("SLASH", TokenKind::Slash);
        map.insert("EQEQ", TokenKind::EqualEqual);
        map.insert("NOTEQ", TokenKind::NotEqual);
        map.insert("LT", TokenKind::Less);
        map.insert("LTEQ", TokenKind::LessEqual);
        map.insert("GT", TokenKind::Greater);
        map.insert("GTEQ", TokenKind::GreaterEqual);
        map.insert("NOT", TokenKind::Not);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(i32)]
pub enum TokenKind {
    EndOfInput = -1,
    NewLine = 0,
    Number = 1,
    Identifier = 2,
    String = 3,

    // Keywords
    Label = 101,
    Goto = 102,
    Print = 103,
    Input = 104,
    Let = 105,
    If = 106,
    Then = 107,
    EndIf = 108,
    While = 109,
    Repeat = 110,
    EndWhile = 111,

    // Operators
    Equal = 201,        // =
    Plus = 202,         // +
    Minus = 203,        // -
    Asterisk = 204,     // *
    Slash = 205,        // /
    EqualEqual = 206,   // ==
    NotEqual = 207,     // !=
    Less = 208,         // <
    LessEqual = 209,    // <=
    Greater = 210,      // >
    GreaterEqual = 211, // >=
    Not = 212,          // !
}

impl TokenKind {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_keyword(self) -> bool {
        (101..200).contains(&self.code())
    }

    pub fn is_operator(self) -> bool {
        (201..300).contains(&self.code())
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\ntext: {:?}}}", self.kind, self.text)
    }
}

impl Token {
    pub fn new(text: String, kind: TokenKind, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// Looks up an already uppercased spelling in the keyword band.
    pub fn check_keyword(text: &str) -> Option<TokenKind> {
        KIND_LOOKUP
            .get(text)
            .copied()
            .filter(|kind| kind.is_keyword())
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
        ]) || self.kind.is_operator()
        {
            println!("{} ({})", self.kind, self.text);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
