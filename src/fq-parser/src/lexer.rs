//! Lexer for canonical filter text
//!
//! Token rules are nom parsers tried in order on the remaining input. The
//! driver loop skips whitespace, records byte offsets and turns a failed
//! match into a [`ParseError::Lexical`].

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while_m_n},
    character::complete::{char, digit1},
    combinator::{map, recognize, value, verify},
    sequence::delimited,
    IResult, Parser,
};

use crate::error::{ParseError, Result};
use crate::token::{Token, TokenKind};

/// Split canonical filter text into tokens, skipping whitespace.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        rest = skip_whitespace(rest);
        if rest.is_empty() {
            break;
        }
        let position = input.len() - rest.len();
        match next_token(rest) {
            Ok((remaining, kind)) => {
                let text = &rest[..rest.len() - remaining.len()];
                tokens.push(Token::new(kind, text, position));
                rest = remaining;
            }
            Err(_) => return Err(diagnose(rest, position)),
        }
    }

    log::trace!("lexed {} tokens from {} bytes", tokens.len(), input.len());
    Ok(tokens)
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{000C}')
}

fn skip_whitespace(input: &str) -> &str {
    input.trim_start_matches(is_whitespace)
}

/// Try each token rule; the first match wins
fn next_token(input: &str) -> IResult<&str, TokenKind> {
    alt((
        value(TokenKind::LeftParen, char('(')),
        value(TokenKind::RightParen, char(')')),
        value(TokenKind::Dot, char('.')),
        parse_word,
        value(TokenKind::DateLiteral, parse_date_literal),
        value(TokenKind::StringLiteral, parse_string_literal),
        value(TokenKind::FloatingPointLiteral, parse_float_literal),
        value(TokenKind::DecimalLiteral, digit1),
    ))
    .parse(input)
}

/// Parse a keyword or an identifier.
///
/// The whole word is consumed before the keyword table is consulted, so
/// `isNotEmpty` never splits and `eqX` is an identifier.
fn parse_word(input: &str) -> IResult<&str, TokenKind> {
    map(
        recognize((
            take_while_m_n(1, 1, |c: char| c.is_alphabetic() || c == '_'),
            take_while(|c: char| c.is_alphanumeric() || c == '_'),
        )),
        |word: &str| TokenKind::keyword(word).unwrap_or(TokenKind::Identifier),
    )
    .parse(input)
}

fn two_digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(2, 2, |c: char| c.is_ascii_digit()).parse(input)
}

fn in_range(digits: &str, lo: u32, hi: u32) -> bool {
    digits.parse::<u32>().is_ok_and(|n| (lo..=hi).contains(&n))
}

fn parse_month(input: &str) -> IResult<&str, &str> {
    verify(two_digits, |m: &str| in_range(m, 1, 12)).parse(input)
}

fn parse_day(input: &str) -> IResult<&str, &str> {
    verify(two_digits, |d: &str| in_range(d, 1, 31)).parse(input)
}

/// Parse `'YYYYMMDD'` with month 01-12 and day 01-31
fn parse_date_literal(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('\''),
        (
            take_while_m_n(4, 4, |c: char| c.is_ascii_digit()),
            parse_month,
            parse_day,
        ),
        char('\''),
    ))
    .parse(input)
}

/// Scan string content up to the first unescaped quote.
///
/// A backslash escapes whatever character follows it.
fn parse_string_content(input: &str) -> IResult<&str, &str> {
    let mut chars = input.char_indices();
    while let Some((i, ch)) = chars.next() {
        if ch == '\'' {
            return Ok((&input[i..], &input[..i]));
        } else if ch == '\\' && chars.next().is_none() {
            break;
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Eof,
    )))
}

/// Eight quoted digits are reserved for dates, valid or not
fn looks_like_date(content: &str) -> bool {
    content.len() == 8 && content.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a single-quoted string literal, quotes included
fn parse_string_literal(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('\''),
        verify(parse_string_content, |content: &str| !looks_like_date(content)),
        char('\''),
    ))
    .parse(input)
}

/// Parse `digits.digits`
fn parse_float_literal(input: &str) -> IResult<&str, &str> {
    recognize((digit1, char('.'), digit1)).parse(input)
}

/// Work out why no token rule matched at `position`
fn diagnose(rest: &str, position: usize) -> ParseError {
    if rest.starts_with('\'') {
        return match parse_string_content(&rest[1..]) {
            Err(_) => ParseError::lexical(rest, "unterminated string literal", position),
            Ok((_, content)) => ParseError::lexical(
                format!("'{}'", content),
                "invalid date literal, expected 'YYYYMMDD'",
                position,
            ),
        };
    }

    let offending = rest.chars().next().map(String::from).unwrap_or_default();
    log::debug!("no token rule matches '{}' at {}", offending, position);
    ParseError::lexical(offending, "unexpected character", position)
}
