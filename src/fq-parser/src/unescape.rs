//! Dash encoding of the URL surface syntax
//!
//! In URLs a dash stands for a space, and a doubled dash stands for a
//! literal dash:
//!
//! ```text
//! (columnCount-eq-21)-and-(title-like-'space--rug')
//! (columnCount eq 21) and (title like 'space-rug')
//! ```

/// Decode dash-encoded text into canonical whitespace-separated text.
///
/// `--` becomes `-` and every remaining `-` becomes a space. Pairs are
/// matched left to right, so `---` decodes to `"- "`.
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '-' {
            if chars.peek() == Some(&'-') {
                chars.next();
                result.push('-');
            } else {
                result.push(' ');
            }
        } else {
            result.push(ch);
        }
    }
    result
}

/// Encode canonical text into the dash surface syntax.
///
/// A space directly followed by a dash has no unambiguous encoding:
/// `" -"` encodes to `---`, which decodes as `"- "`.
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        match ch {
            '-' => result.push_str("--"),
            ' ' => result.push('-'),
            other => result.push(other),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unescape_examples() {
        assert_eq!(unescape("a--b"), "a-b");
        assert_eq!(unescape("a-b"), "a b");
        assert_eq!(unescape("a--b-c"), "a-b c");
        assert_eq!(unescape(""), "");
        assert_eq!(unescape("---"), "- ");
        assert_eq!(unescape("----"), "--");
    }

    #[test]
    fn test_unescape_keeps_tabs() {
        assert_eq!(unescape("a\t--b"), "a\t-b");
    }

    #[test]
    fn test_unescape_url_example() {
        let encoded = "(columnCount-eq-21-and-rowCount-eq-21)-and-not-published-isNull-and-(title-like-'space--rug'-or-title-like-'home-\\'rug\\'')";
        assert_eq!(
            unescape(encoded),
            "(columnCount eq 21 and rowCount eq 21) and not published isNull and (title like 'space-rug' or title like 'home \\'rug\\'')"
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("title like 'space-rug'"), "title-like-'space--rug'");
        assert_eq!(escape(""), "");
    }

    proptest! {
        #[test]
        fn unescape_never_emits_more_chars(s in ".*") {
            prop_assert!(unescape(&s).chars().count() <= s.chars().count());
        }

        #[test]
        fn escape_then_unescape_is_identity(s in "[a-z' -]*") {
            prop_assume!(!s.contains(" -"));
            prop_assert_eq!(unescape(&escape(&s)), s);
        }
    }
}
