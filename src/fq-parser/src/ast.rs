//! Abstract Syntax Tree (AST) definitions for filter and order expressions
//!
//! A compiled filter is a single [`Predicate`] tree. Nodes are built once by
//! the parser and never re-typed afterwards. `And`/`Or` stay binary; a chain
//! such as `a and b and c` is nested, never flattened.
//!
//! `Display` renders canonical (space-separated) filter text that parses back
//! into an equal tree.

use std::fmt;

use chrono::NaiveDate;

/// Predicate tree produced by compiling a filter expression
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Predicate {
    /// Both operands hold (`left and right`)
    And {
        /// Left operand
        left: Box<Predicate>,
        /// Right operand
        right: Box<Predicate>,
    },

    /// Either operand holds (`left or right`)
    Or {
        /// Left operand
        left: Box<Predicate>,
        /// Right operand
        right: Box<Predicate>,
    },

    /// Negation (`not operand`)
    Not(Box<Predicate>),

    /// Property against a literal value (`price ge 10`)
    Compare {
        /// Property path
        property: String,
        /// Comparison operator
        op: CompareOp,
        /// Literal operand
        value: Literal,
    },

    /// Property against another property of the same entity (`price geP cost`)
    PropertyCompare {
        /// Property path
        property: String,
        /// Comparison operator
        op: CompareOp,
        /// The other property path
        other_property: String,
    },

    /// Cardinality of a collection property against an integer (`tags sizeGt 2`)
    SizeCompare {
        /// Collection property path
        property: String,
        /// Comparison operator
        op: CompareOp,
        /// Size to compare against
        size: i64,
    },

    /// Pattern match against a string literal (`like` / `ilike`)
    Like {
        /// Property path
        property: String,
        /// Pattern text, escapes resolved
        pattern: String,
        /// `true` for `ilike`
        case_insensitive: bool,
    },

    /// Collection property has no elements
    IsEmpty(String),

    /// Collection property has at least one element
    IsNotEmpty(String),

    /// Property is null
    IsNull(String),

    /// Property is not null
    IsNotNull(String),
}

/// Comparison operators shared by plain, property and size comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum CompareOp {
    /// Equal
    Eq,
    /// Greater than or equal
    Ge,
    /// Greater than
    Gt,
    /// Less than or equal
    Le,
    /// Less than
    Lt,
    /// Not equal
    Ne,
}

/// Literal values, typed purely by their lexical shape
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Literal {
    /// `true` / `false`
    Bool(bool),
    /// Unsigned digit sequence
    Int(i64),
    /// `digits.digits`
    Float(f64),
    /// `'YYYYMMDD'`
    Date(NaiveDate),
    /// Quoted text with escapes resolved
    String(String),
}

/// Sort direction of an order entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum OrderDirection {
    /// Ascending order (`A` prefix)
    Asc,
    /// Descending order (`D` prefix)
    Desc,
}

/// One entry of a compiled order expression
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OrderBy {
    /// Property to order by, taken verbatim
    pub property: String,
    /// Sort direction
    pub direction: OrderDirection,
}

impl Predicate {
    /// `left and right`
    pub fn and(left: Predicate, right: Predicate) -> Self {
        Predicate::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `left or right`
    pub fn or(left: Predicate, right: Predicate) -> Self {
        Predicate::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `not operand`
    pub fn negate(operand: Predicate) -> Self {
        Predicate::Not(Box::new(operand))
    }

    /// `property op value`
    pub fn compare(property: impl Into<String>, op: CompareOp, value: impl Into<Literal>) -> Self {
        Predicate::Compare {
            property: property.into(),
            op,
            value: value.into(),
        }
    }

    /// `property opP other_property`
    pub fn property_compare(
        property: impl Into<String>,
        op: CompareOp,
        other_property: impl Into<String>,
    ) -> Self {
        Predicate::PropertyCompare {
            property: property.into(),
            op,
            other_property: other_property.into(),
        }
    }

    /// `property sizeOp size`
    pub fn size_compare(property: impl Into<String>, op: CompareOp, size: i64) -> Self {
        Predicate::SizeCompare {
            property: property.into(),
            op,
            size,
        }
    }

    /// `property like pattern` or `property ilike pattern`
    pub fn like(property: impl Into<String>, pattern: impl Into<String>, case_insensitive: bool) -> Self {
        Predicate::Like {
            property: property.into(),
            pattern: pattern.into(),
            case_insensitive,
        }
    }

    /// Property paths referenced by this predicate, in source order.
    ///
    /// Duplicates are kept; callers checking names against a schema can
    /// dedupe as they see fit.
    pub fn properties(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_properties(&mut out);
        out
    }

    fn collect_properties<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Predicate::And { left, right } | Predicate::Or { left, right } => {
                left.collect_properties(out);
                right.collect_properties(out);
            }
            Predicate::Not(operand) => operand.collect_properties(out),
            Predicate::PropertyCompare {
                property,
                other_property,
                ..
            } => {
                out.push(property);
                out.push(other_property);
            }
            Predicate::Compare { property, .. }
            | Predicate::SizeCompare { property, .. }
            | Predicate::Like { property, .. }
            | Predicate::IsEmpty(property)
            | Predicate::IsNotEmpty(property)
            | Predicate::IsNull(property)
            | Predicate::IsNotNull(property) => out.push(property),
        }
    }

    fn is_junction(&self) -> bool {
        matches!(self, Predicate::And { .. } | Predicate::Or { .. })
    }
}

impl CompareOp {
    /// Keyword for plain comparisons (`eq`, `ge`, ...)
    pub fn keyword(self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Ge => "ge",
            CompareOp::Gt => "gt",
            CompareOp::Le => "le",
            CompareOp::Lt => "lt",
            CompareOp::Ne => "ne",
        }
    }

    /// Keyword for size comparisons (`sizeEq`, `sizeGe`, ...)
    pub fn size_keyword(self) -> &'static str {
        match self {
            CompareOp::Eq => "sizeEq",
            CompareOp::Ge => "sizeGe",
            CompareOp::Gt => "sizeGt",
            CompareOp::Le => "sizeLe",
            CompareOp::Lt => "sizeLt",
            CompareOp::Ne => "sizeNe",
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<NaiveDate> for Literal {
    fn from(value: NaiveDate) -> Self {
        Literal::Date(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl OrderBy {
    /// Ascending entry
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: OrderDirection::Asc,
        }
    }

    /// Descending entry
    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: OrderDirection::Desc,
        }
    }
}

/// Write a string literal, re-escaping quotes and backslashes
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("'")?;
    for ch in text.chars() {
        if ch == '\'' || ch == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{}", ch)?;
    }
    f.write_str("'")
}

/// Write a junction operand, parenthesized when it is itself a junction
fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Predicate) -> fmt::Result {
    if operand.is_junction() {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::And { left, right } => {
                write_operand(f, left)?;
                f.write_str(" and ")?;
                write_operand(f, right)
            }
            Predicate::Or { left, right } => {
                write_operand(f, left)?;
                f.write_str(" or ")?;
                write_operand(f, right)
            }
            Predicate::Not(operand) => {
                f.write_str("not ")?;
                write_operand(f, operand)
            }
            Predicate::Compare {
                property,
                op,
                value,
            } => write!(f, "{} {} {}", property, op, value),
            Predicate::PropertyCompare {
                property,
                op,
                other_property,
            } => write!(f, "{} {}P {}", property, op, other_property),
            Predicate::SizeCompare { property, op, size } => {
                write!(f, "{} {} {}", property, op.size_keyword(), size)
            }
            Predicate::Like {
                property,
                pattern,
                case_insensitive,
            } => {
                let keyword = if *case_insensitive { "ilike" } else { "like" };
                write!(f, "{} {} ", property, keyword)?;
                write_quoted(f, pattern)
            }
            Predicate::IsEmpty(property) => write!(f, "{} isEmpty", property),
            Predicate::IsNotEmpty(property) => write!(f, "{} isNotEmpty", property),
            Predicate::IsNull(property) => write!(f, "{} isNull", property),
            Predicate::IsNotNull(property) => write!(f, "{} isNotNull", property),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(x) => {
                let text = x.to_string();
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
            Literal::Date(date) => write!(f, "'{}'", date.format("%Y%m%d")),
            Literal::String(s) => write_quoted(f, s),
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => f.write_str("A"),
            OrderDirection::Desc => f.write_str("D"),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.property)
    }
}
