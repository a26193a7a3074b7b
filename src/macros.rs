//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PAIR_TOKEN!` - Scans an operator that may be followed by `=`
//!
//! These macros reduce boilerplate in the scanner's classification table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's lexeme
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: $text,
            span: $span,
        }
    };
}

/// Scans one of `= < > !`, taking a following `=` as part of the token.
///
/// Leaves the scanner on the last character consumed. Only usable inside
/// the scanner, since it reaches into the cursor.
///
/// # Example
///
/// ```ignore
/// '=' => MK_PAIR_TOKEN!(self, TokenKind::EqualEqual, TokenKind::Equal),
/// ```
#[macro_export]
macro_rules! MK_PAIR_TOKEN {
    ($scanner:expr, $pair:expr, $single:expr) => {{
        let start = $scanner.pos;
        let kind = if $scanner.peek() == '=' {
            $scanner.advance();
            $pair
        } else {
            $single
        };

        $crate::MK_TOKEN!(kind, $scanner.lexeme(start), $scanner.span(start))
    }};
}
