//! Parser implementation for filter expressions
//!
//! A recursive-descent parser over the token stream that builds the
//! [`Predicate`] tree directly, one node per grammar production:
//!
//! ```text
//! expression := and ('or' and)*
//! and        := not ('and' not)*
//! not        := 'not' not | primary
//! primary    := '(' expression ')' | property operator [operand]
//! property   := Identifier ('.' Identifier)*
//! ```
//!
//! `and` binds tighter than `or`, both fold to the left. The first error
//! aborts the parse.
//!
//! Two bounds keep hostile input from exhausting the stack. `max_depth`
//! limits parser recursion through groups and `not`. `max_height` limits
//! the height of the tree being built, since a flat `and` chain folds into
//! a tree as tall as it is long and every later walk of it recurses.

use crate::ast::Predicate;
use crate::config::ParserConfig;
use crate::error::{ParseError, Result};
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};
use crate::unescape::unescape;

mod literals;
mod operators;

use literals::{literal_value, parse_integer, string_value};
use operators::{classify, Operator, UnaryCheck, EXPECTED_OPERATOR};

/// Main parser for filter expressions
#[derive(Debug, Clone, Default)]
pub struct FilterParser {
    config: ParserConfig,
}

impl FilterParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Compile filter text into a predicate tree
    pub fn parse(&self, input: &str) -> Result<Predicate> {
        let canonical = if self.config.decode_dashes {
            unescape(input)
        } else {
            input.to_string()
        };

        let tokens = tokenize(&canonical).inspect_err(|e| log::debug!("rejected filter: {}", e))?;
        let mut state = ParseState::new(&tokens, canonical.len(), &self.config);
        let (predicate, _) = state
            .parse_init()
            .inspect_err(|e| log::debug!("rejected filter: {}", e))?;

        log::trace!("compiled filter: {}", predicate);
        Ok(predicate)
    }
}

/// Cursor over the token stream for a single parse
struct ParseState<'a> {
    tokens: &'a [Token],
    pos: usize,
    end: usize,
    depth: usize,
    max_depth: usize,
    max_height: usize,
}

/// A parsed predicate with the height of its tree
type Parsed = (Predicate, usize);

impl<'a> ParseState<'a> {
    fn new(tokens: &'a [Token], end: usize, config: &ParserConfig) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            depth: 0,
            max_depth: config.max_depth,
            max_height: config.max_height,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Syntax error describing the token at the cursor
    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::syntax(expected, token.to_string(), token.position),
            None => ParseError::syntax(expected, "end of input", self.end),
        }
    }

    /// Consume a token of the given kind or fail
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn descend(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            let message = format!("at most {} nested groups or negations", self.max_depth);
            return Err(self.unexpected(&message));
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Height of a new node over children of the given height, checked
    /// against the bound at the operator that creates it
    fn grow(&self, child_height: usize, operator: &Token) -> Result<usize> {
        let height = child_height + 1;
        if height > self.max_height {
            return Err(ParseError::syntax(
                format!("a predicate at most {} levels tall", self.max_height),
                operator.to_string(),
                operator.position,
            ));
        }
        Ok(height)
    }

    /// `init := expression EOF`
    fn parse_init(&mut self) -> Result<Parsed> {
        let parsed = self.parse_expression()?;
        if self.peek().is_some() {
            return Err(self.unexpected("'and', 'or' or end of input"));
        }
        Ok(parsed)
    }

    /// Parse logical OR expressions
    fn parse_expression(&mut self) -> Result<Parsed> {
        let (mut left, mut height) = self.parse_and()?;
        while let Some(operator) = self.peek().filter(|t| t.kind == TokenKind::Or) {
            self.advance();
            let (right, right_height) = self.parse_and()?;
            height = self.grow(height.max(right_height), operator)?;
            left = Predicate::or(left, right);
        }
        Ok((left, height))
    }

    /// Parse logical AND expressions
    fn parse_and(&mut self) -> Result<Parsed> {
        let (mut left, mut height) = self.parse_not()?;
        while let Some(operator) = self.peek().filter(|t| t.kind == TokenKind::And) {
            self.advance();
            let (right, right_height) = self.parse_not()?;
            height = self.grow(height.max(right_height), operator)?;
            left = Predicate::and(left, right);
        }
        Ok((left, height))
    }

    /// Parse prefix negation
    fn parse_not(&mut self) -> Result<Parsed> {
        let Some(operator) = self.peek().filter(|t| t.kind == TokenKind::Not) else {
            return self.parse_primary();
        };
        self.advance();
        self.descend()?;
        let (operand, operand_height) = self.parse_not()?;
        self.ascend();
        let height = self.grow(operand_height, operator)?;
        Ok((Predicate::negate(operand), height))
    }

    /// Parse a group or a property test
    fn parse_primary(&mut self) -> Result<Parsed> {
        match self.peek_kind() {
            Some(TokenKind::LeftParen) => {
                self.advance();
                self.descend()?;
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RightParen, "')'")?;
                self.ascend();
                Ok(inner)
            }
            Some(TokenKind::Identifier) => Ok((self.parse_property_test()?, 1)),
            _ => Err(self.unexpected("'(', 'not' or a property name")),
        }
    }

    /// Parse `property ('.' Identifier)*`
    fn parse_property(&mut self) -> Result<String> {
        let first = self.expect(TokenKind::Identifier, "a property name")?;
        let mut path = first.text.clone();
        while self.peek_kind() == Some(TokenKind::Dot) {
            self.advance();
            let segment = self.expect(TokenKind::Identifier, "a property name after '.'")?;
            path.push('.');
            path.push_str(&segment.text);
        }
        Ok(path)
    }

    /// Parse `property operator [operand]`
    fn parse_property_test(&mut self) -> Result<Predicate> {
        let property = self.parse_property()?;

        let operator = match self.peek().and_then(|t| classify(t.kind)) {
            Some(operator) => operator,
            None => return Err(self.unexpected(EXPECTED_OPERATOR)),
        };
        self.advance();

        match operator {
            Operator::Compare(op) => {
                let value = match self.peek() {
                    Some(token) if token.kind.is_literal() => literal_value(token)?,
                    _ => return Err(self.unexpected("a literal")),
                };
                self.advance();
                Ok(Predicate::Compare {
                    property,
                    op,
                    value,
                })
            }
            Operator::PropertyCompare(op) => {
                let other_property = self.parse_property()?;
                Ok(Predicate::PropertyCompare {
                    property,
                    op,
                    other_property,
                })
            }
            Operator::SizeCompare(op) => {
                let token = self.expect(TokenKind::DecimalLiteral, "a decimal literal")?;
                let size = parse_integer(token)?;
                Ok(Predicate::SizeCompare { property, op, size })
            }
            Operator::Like { case_insensitive } => {
                let token = self.expect(TokenKind::StringLiteral, "a string literal")?;
                Ok(Predicate::Like {
                    property,
                    pattern: string_value(&token.text),
                    case_insensitive,
                })
            }
            Operator::Unary(check) => Ok(match check {
                UnaryCheck::IsEmpty => Predicate::IsEmpty(property),
                UnaryCheck::IsNotEmpty => Predicate::IsNotEmpty(property),
                UnaryCheck::IsNull => Predicate::IsNull(property),
                UnaryCheck::IsNotNull => Predicate::IsNotNull(property),
            }),
        }
    }
}
