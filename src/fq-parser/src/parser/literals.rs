//! Literal value conversion
//!
//! Turns the text of literal tokens into typed [`Literal`] values. The
//! lexer has already checked the shape of every token handed in here.

use chrono::{Duration, NaiveDate};

use crate::ast::Literal;
use crate::error::{ParseError, Result};
use crate::token::{Token, TokenKind};

/// Convert a literal token into a typed value
pub(crate) fn literal_value(token: &Token) -> Result<Literal> {
    match token.kind {
        TokenKind::True => Ok(Literal::Bool(true)),
        TokenKind::False => Ok(Literal::Bool(false)),
        TokenKind::DecimalLiteral => parse_integer(token).map(Literal::Int),
        TokenKind::FloatingPointLiteral => parse_float(token).map(Literal::Float),
        TokenKind::DateLiteral => parse_date(token).map(Literal::Date),
        TokenKind::StringLiteral => Ok(Literal::String(string_value(&token.text))),
        _ => Err(ParseError::syntax("a literal", token.to_string(), token.position)),
    }
}

/// Parse a decimal literal into a 64-bit integer
pub(crate) fn parse_integer(token: &Token) -> Result<i64> {
    token.text.parse::<i64>().map_err(|_| {
        ParseError::lexical(
            &token.text,
            "integer literal out of 64-bit range",
            token.position,
        )
    })
}

/// Parse a floating point literal, rejecting values that overflow to infinity
pub(crate) fn parse_float(token: &Token) -> Result<f64> {
    token
        .text
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            ParseError::lexical(
                &token.text,
                "floating point literal out of 64-bit range",
                token.position,
            )
        })
}

/// Parse `'YYYYMMDD'` into a calendar date.
///
/// Days past the end of the month roll over into the next month, so
/// `'20230230'` is 2023-03-02.
pub(crate) fn parse_date(token: &Token) -> Result<NaiveDate> {
    let invalid = || ParseError::lexical(&token.text, "invalid date literal", token.position);

    let digits = token.text.trim_matches('\'');
    if digits.len() != 8 {
        return Err(invalid());
    }
    let year: i32 = digits[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = digits[4..6].parse().map_err(|_| invalid())?;
    let day: i64 = digits[6..8].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_signed(Duration::days(day - 1)))
        .ok_or_else(invalid)
}

/// Strip the quotes of a string literal and resolve `\'` and `\\`.
///
/// Any other backslash pair is kept as written.
pub(crate) fn string_value(text: &str) -> String {
    let inner = text
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(text);

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some(esc @ ('\'' | '\\')) => result.push(esc),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text, 0)
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(string_value(r"'home \'rug\''"), "home 'rug'");
        assert_eq!(string_value(r"'a\\b'"), r"a\b");
        assert_eq!(string_value(r"'a\nb'"), r"a\nb");
        assert_eq!(string_value("''"), "");
    }

    #[test]
    fn test_date() {
        let date = parse_date(&token(TokenKind::DateLiteral, "'20230115'")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    }

    #[test]
    fn test_date_rolls_over() {
        let date = parse_date(&token(TokenKind::DateLiteral, "'20230230'")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 2).unwrap());

        let date = parse_date(&token(TokenKind::DateLiteral, "'20240231'")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(
            parse_integer(&token(TokenKind::DecimalLiteral, "9223372036854775807")).unwrap(),
            i64::MAX
        );
        let err = parse_integer(&token(TokenKind::DecimalLiteral, "9223372036854775808")).unwrap_err();
        assert!(err.is_lexical());
    }

    #[test]
    fn test_float_range() {
        let huge = format!("1{}.0", "0".repeat(400));
        let err = parse_float(&token(TokenKind::FloatingPointLiteral, &huge)).unwrap_err();
        assert_eq!(
            err,
            ParseError::Lexical {
                text: huge,
                message: "floating point literal out of 64-bit range".to_string(),
                position: 0,
            }
        );
        assert_eq!(
            parse_float(&token(TokenKind::FloatingPointLiteral, "0.000001")).unwrap(),
            0.000001
        );
    }

    #[test]
    fn test_literal_values() {
        assert_eq!(
            literal_value(&token(TokenKind::True, "true")).unwrap(),
            Literal::Bool(true)
        );
        assert_eq!(
            literal_value(&token(TokenKind::FloatingPointLiteral, "2.50")).unwrap(),
            Literal::Float(2.5)
        );
        assert_eq!(
            literal_value(&token(TokenKind::StringLiteral, "'x'")).unwrap(),
            Literal::String("x".to_string())
        );
        assert!(literal_value(&token(TokenKind::Identifier, "x"))
            .unwrap_err()
            .is_syntax());
    }
}
