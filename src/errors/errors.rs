use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical error together with where it happened.
#[derive(Error, Debug, Clone)]
#[error("{internal_error} at position {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => match character {
                'A'..='Z' => ErrorTip::Suggestion(format!(
                    "Unexpected character `{}`, names and keywords are written in lowercase",
                    character
                )),
                '\t' => ErrorTip::Suggestion(String::from(
                    "Tabs are not whitespace, indent with spaces",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::MalformedNumber { text } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a decimal point must be followed by a digit",
                text
            )),
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "Strings must be closed with `'` on the same line",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("illegal character in number: {text:?}")]
    MalformedNumber { text: String },
    #[error("unterminated string: {text:?}")]
    UnterminatedString { text: String },
}
