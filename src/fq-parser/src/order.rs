//! Order expression parsing
//!
//! An order expression is a dash-joined list of `A<property>` (ascending)
//! and `D<property>` (descending) parts, e.g. `Dprice-Aname`. There is no
//! escaping: every dash separates two parts.

use crate::ast::{OrderBy, OrderDirection};
use crate::error::{ParseError, Result};

/// Compile an order expression into sort entries, preserving their order.
///
/// `None` yields no entries. An empty string is an error, as is any part
/// shorter than two characters or not starting with `A` or `D`. Trailing
/// dashes are ignored.
pub fn compile_order(text: Option<&str>) -> Result<Vec<OrderBy>> {
    let Some(text) = text else {
        return Ok(Vec::new());
    };
    if text.is_empty() {
        return Err(ParseError::order(text, "order expression is empty"));
    }

    // trailing empty parts are dropped, so `Aname-` is `Aname` and `-` is empty
    let trimmed = text.trim_end_matches('-');
    if trimmed.is_empty() {
        log::trace!("order expression has no parts");
        return Ok(Vec::new());
    }

    let entries = trimmed
        .split('-')
        .map(parse_order_part)
        .collect::<Result<Vec<_>>>()
        .inspect_err(|e| log::debug!("rejected order: {}", e))?;

    log::trace!("compiled order with {} entries", entries.len());
    Ok(entries)
}

fn parse_order_part(part: &str) -> Result<OrderBy> {
    let mut chars = part.chars();
    let (Some(prefix), Some(_)) = (chars.next(), chars.clone().next()) else {
        return Err(ParseError::order(part, "order expression part too short"));
    };

    let direction = match prefix {
        'A' => OrderDirection::Asc,
        'D' => OrderDirection::Desc,
        _ => {
            return Err(ParseError::order(
                part,
                "order expression parts should start with D or A",
            ))
        }
    };

    Ok(OrderBy {
        property: chars.as_str().to_string(),
        direction,
    })
}

/// Render sort entries back into an order expression
pub fn format_order(entries: &[OrderBy]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("-")
}
