//! Backend predicate construction
//!
//! The compiled tree is backend-neutral. A storage layer implements
//! [`CriteriaBuilder`] to map each node kind onto its native comparison and
//! junction constructs, then folds a tree with [`Predicate::build`].

use crate::ast::{CompareOp, Literal, Predicate};

/// Constructs a backend's native criterion, one method per node kind.
///
/// Junction methods receive operands that were already built, so
/// implementations never recurse themselves.
pub trait CriteriaBuilder {
    /// The backend criterion type
    type Criterion;

    /// Both criteria hold
    fn and(&mut self, left: Self::Criterion, right: Self::Criterion) -> Self::Criterion;

    /// Either criterion holds
    fn or(&mut self, left: Self::Criterion, right: Self::Criterion) -> Self::Criterion;

    /// Negated criterion
    fn not(&mut self, operand: Self::Criterion) -> Self::Criterion;

    /// Property against a literal
    fn compare(&mut self, property: &str, op: CompareOp, value: &Literal) -> Self::Criterion;

    /// Property against another property
    fn property_compare(&mut self, property: &str, op: CompareOp, other: &str) -> Self::Criterion;

    /// Collection size against an integer
    fn size_compare(&mut self, property: &str, op: CompareOp, size: i64) -> Self::Criterion;

    /// Pattern match
    fn like(&mut self, property: &str, pattern: &str, case_insensitive: bool) -> Self::Criterion;

    /// Collection is empty
    fn is_empty(&mut self, property: &str) -> Self::Criterion;

    /// Collection is not empty
    fn is_not_empty(&mut self, property: &str) -> Self::Criterion;

    /// Property is null
    fn is_null(&mut self, property: &str) -> Self::Criterion;

    /// Property is not null
    fn is_not_null(&mut self, property: &str) -> Self::Criterion;
}

impl Predicate {
    /// Fold this tree bottom-up into a backend criterion
    pub fn build<B: CriteriaBuilder>(&self, builder: &mut B) -> B::Criterion {
        match self {
            Predicate::And { left, right } => {
                let left = left.build(builder);
                let right = right.build(builder);
                builder.and(left, right)
            }
            Predicate::Or { left, right } => {
                let left = left.build(builder);
                let right = right.build(builder);
                builder.or(left, right)
            }
            Predicate::Not(operand) => {
                let operand = operand.build(builder);
                builder.not(operand)
            }
            Predicate::Compare {
                property,
                op,
                value,
            } => builder.compare(property, *op, value),
            Predicate::PropertyCompare {
                property,
                op,
                other_property,
            } => builder.property_compare(property, *op, other_property),
            Predicate::SizeCompare { property, op, size } => {
                builder.size_compare(property, *op, *size)
            }
            Predicate::Like {
                property,
                pattern,
                case_insensitive,
            } => builder.like(property, pattern, *case_insensitive),
            Predicate::IsEmpty(property) => builder.is_empty(property),
            Predicate::IsNotEmpty(property) => builder.is_not_empty(property),
            Predicate::IsNull(property) => builder.is_null(property),
            Predicate::IsNotNull(property) => builder.is_not_null(property),
        }
    }
}
