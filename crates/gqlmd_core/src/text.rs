//! Text transforms for MDX output.

use heck::ToKebabCase;
use std::borrow::Cow;

/// Returns true if the character must be written as a character reference.
///
/// Braces and angle brackets are expression/JSX delimiters in MDX. Control
/// characters other than line breaks and tabs are never valid in page text.
#[inline]
fn needs_escape(c: char) -> bool {
    matches!(c, '{' | '}' | '<' | '>') || (c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
}

/// Escapes free text for interpolation into MDX.
///
/// Every markup-significant character is replaced by its hexadecimal numeric
/// character reference, e.g. `{` becomes `&#x007B;`.
#[must_use]
pub fn escape_mdx(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        if needs_escape(c) {
            escaped.push_str(&format!("&#x{:04X};", u32::from(c)));
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

/// Converts a label into a URL-safe slug fragment (kebab case).
#[must_use]
pub fn slugify(label: &str) -> String {
    label.to_kebab_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_braces() {
        assert_eq!(escape_mdx("{ Foobar }"), "&#x007B; Foobar &#x007D;");
    }

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(escape_mdx("a <b> c"), "a &#x003C;b&#x003E; c");
    }

    #[test]
    fn test_escape_keeps_line_breaks() {
        let text = "Lorem ipsum, \nconsectetur\r\n\tadipiscing";
        assert!(matches!(escape_mdx(text), Cow::Borrowed(_)));
        assert_eq!(escape_mdx(text), text);
    }

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(escape_mdx("a\u{0007}b"), "a&#x0007;b");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("EntityTypeName"), "entity-type-name");
        assert_eq!(slugify("NonNullableObjectType"), "non-nullable-object-type");
        assert_eq!(slugify("String"), "string");
        assert_eq!(slugify("ID"), "id");
    }
}
