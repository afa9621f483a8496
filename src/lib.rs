//! filterq: URL-safe filter and order expressions
//!
//! This crate re-exports [`fq_parser`], which compiles the dash-encoded
//! filter language carried in query strings into a backend-neutral
//! [`Predicate`] tree and parses `Dprice-Aname` style order expressions.
//! The `fq` binary in the `fq-cli` workspace member prints what a given
//! expression compiles to.
//!
//! ```rust
//! use filterq::{compile_filter, CompareOp, Predicate};
//!
//! let predicate = compile_filter("not-published-isNull-and-rowCount-ge-21")?;
//! assert_eq!(
//!     predicate,
//!     Predicate::and(
//!         Predicate::negate(Predicate::IsNull("published".to_string())),
//!         Predicate::compare("rowCount", CompareOp::Ge, 21_i64),
//!     )
//! );
//! # Ok::<(), filterq::ParseError>(())
//! ```

pub use fq_parser::*;
