//! fq-parser: compiler for URL-safe filter and order expressions
//!
//! This crate turns a compact, query-string friendly filter language into a
//! backend-neutral [`Predicate`] tree, and a dash-joined sort expression
//! into an ordered list of [`OrderBy`] entries. Executing either against a
//! store is left to the caller, typically through a [`CriteriaBuilder`].
//!
//! # Quick Start
//!
//! ```rust
//! use fq_parser::{compile_filter, compile_order, CompareOp, OrderBy, Predicate};
//!
//! let predicate = compile_filter("price-ge-10-and-tags-isNotEmpty")?;
//! assert_eq!(
//!     predicate,
//!     Predicate::and(
//!         Predicate::compare("price", CompareOp::Ge, 10_i64),
//!         Predicate::IsNotEmpty("tags".to_string()),
//!     )
//! );
//!
//! let order = compile_order(Some("Dprice-Aname"))?;
//! assert_eq!(order, vec![OrderBy::desc("price"), OrderBy::asc("name")]);
//! # Ok::<(), fq_parser::ParseError>(())
//! ```
//!
//! # Surface Syntax
//!
//! In URLs a dash separates words and a doubled dash is a literal dash:
//!
//! ```text
//! (columnCount-eq-21-and-rowCount-eq-21)-and-not-published-isNull-and-(title-like-'space--rug'-or-title-like-'home-\'rug\'')
//! ```
//!
//! - **Junctions**: `and`, `or`, prefix `not`, parentheses
//! - **Comparisons**: `eq`, `ge`, `gt`, `le`, `lt`, `ne` against a literal
//! - **Property comparisons**: `eqP`, `geP`, ... against another property
//! - **Size comparisons**: `sizeEq`, `sizeGe`, ... against an integer
//! - **Patterns**: `like`, `ilike` against a string literal
//! - **Checks**: `isEmpty`, `isNotEmpty`, `isNull`, `isNotNull`
//! - **Literals**: `true`, `false`, `42`, `4.2`, `'20230115'`, `'text'`
//!
//! # Error Handling
//!
//! Every failure is a [`ParseError`] carrying the offending text and, for
//! filters, its position:
//!
//! ```rust
//! use fq_parser::{compile_filter, ParseError};
//!
//! match compile_filter("a-foo-1") {
//!     Err(ParseError::Syntax { found, position, .. }) => {
//!         assert_eq!(found, "'foo'");
//!         assert_eq!(position, 2);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_lines
)]

pub mod ast;
pub mod builder;
pub mod config;
pub mod error;
pub mod lexer;
pub mod order;
mod parser;
pub mod token;
pub mod unescape;

pub use ast::*;
pub use builder::CriteriaBuilder;
pub use config::{ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT};
pub use error::*;
pub use lexer::tokenize;
pub use order::{compile_order, format_order};
pub use parser::FilterParser;
pub use token::{Token, TokenKind};
pub use unescape::{escape, unescape};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compile dash-encoded filter text with the default configuration
pub fn compile_filter(text: &str) -> Result<Predicate> {
    FilterParser::new().parse(text)
}
