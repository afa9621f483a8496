//! Operator classification
//!
//! Maps operator tokens onto the form of operand they take and the
//! [`CompareOp`] they stand for. The `P` suffix only decides the operand
//! form; `eq` and `eqP` both map to [`CompareOp::Eq`].

use crate::ast::CompareOp;
use crate::token::TokenKind;

/// What follows a property name in a primary expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    /// Takes a literal operand
    Compare(CompareOp),
    /// Takes another property as operand
    PropertyCompare(CompareOp),
    /// Takes a decimal literal operand
    SizeCompare(CompareOp),
    /// Takes a string literal operand
    Like {
        /// `ilike`
        case_insensitive: bool,
    },
    /// Takes no operand
    Unary(UnaryCheck),
}

/// Operand-less checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnaryCheck {
    IsEmpty,
    IsNotEmpty,
    IsNull,
    IsNotNull,
}

/// Description used in syntax errors when no operator is found
pub(crate) const EXPECTED_OPERATOR: &str =
    "an operator (eq, eqP, ge, geP, gt, gtP, le, leP, lt, ltP, ne, neP, like, ilike, \
     sizeEq, sizeGe, sizeGt, sizeLe, sizeLt, sizeNe, isEmpty, isNotEmpty, isNull, isNotNull)";

/// Classify an operator token, or `None` if the kind is not an operator
pub(crate) fn classify(kind: TokenKind) -> Option<Operator> {
    let op = match kind {
        TokenKind::Eq => Operator::Compare(CompareOp::Eq),
        TokenKind::Ge => Operator::Compare(CompareOp::Ge),
        TokenKind::Gt => Operator::Compare(CompareOp::Gt),
        TokenKind::Le => Operator::Compare(CompareOp::Le),
        TokenKind::Lt => Operator::Compare(CompareOp::Lt),
        TokenKind::Ne => Operator::Compare(CompareOp::Ne),

        TokenKind::EqP => Operator::PropertyCompare(CompareOp::Eq),
        TokenKind::GeP => Operator::PropertyCompare(CompareOp::Ge),
        TokenKind::GtP => Operator::PropertyCompare(CompareOp::Gt),
        TokenKind::LeP => Operator::PropertyCompare(CompareOp::Le),
        TokenKind::LtP => Operator::PropertyCompare(CompareOp::Lt),
        TokenKind::NeP => Operator::PropertyCompare(CompareOp::Ne),

        TokenKind::SizeEq => Operator::SizeCompare(CompareOp::Eq),
        TokenKind::SizeGe => Operator::SizeCompare(CompareOp::Ge),
        TokenKind::SizeGt => Operator::SizeCompare(CompareOp::Gt),
        TokenKind::SizeLe => Operator::SizeCompare(CompareOp::Le),
        TokenKind::SizeLt => Operator::SizeCompare(CompareOp::Lt),
        TokenKind::SizeNe => Operator::SizeCompare(CompareOp::Ne),

        TokenKind::Like => Operator::Like {
            case_insensitive: false,
        },
        TokenKind::ILike => Operator::Like {
            case_insensitive: true,
        },

        TokenKind::IsEmpty => Operator::Unary(UnaryCheck::IsEmpty),
        TokenKind::IsNotEmpty => Operator::Unary(UnaryCheck::IsNotEmpty),
        TokenKind::IsNull => Operator::Unary(UnaryCheck::IsNull),
        TokenKind::IsNotNull => Operator::Unary(UnaryCheck::IsNotNull),

        _ => return None,
    };
    Some(op)
}
