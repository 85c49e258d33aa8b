//! Single-statement formatting.

use crate::kconfig::{ConfigOption, ValueKind};
use std::borrow::Cow;

/// Attribute name as it must appear on the left of `=`.
///
/// Names starting with a digit or holding anything other than ASCII letters,
/// digits and `_` are quoted.
pub fn attribute_name(name: &str) -> Cow<'_, str> {
    let bare = name
        .chars()
        .next()
        .is_some_and(|c| !c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if bare {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{}\"", name))
    }
}

/// Value token for an option: `yes`, `no`, `module`, or `(freeform "...")`.
///
/// String literals keep their backslash escapes, which mean the same in Nix;
/// numeric and opaque values are quoted and fully escaped. In both, `${` is
/// escaped so the value never interpolates.
pub fn value_expression(option: &ConfigOption) -> String {
    match option.kind {
        ValueKind::Enabled => "yes".to_string(),
        ValueKind::Disabled => "no".to_string(),
        ValueKind::Module => "module".to_string(),
        ValueKind::StringLiteral => {
            let inner = option
                .raw
                .strip_prefix('"')
                .and_then(|raw| raw.strip_suffix('"'))
                .unwrap_or(&option.raw);
            format!("(freeform \"{}\")", escape_string_literal(inner))
        }
        ValueKind::NumericLiteral | ValueKind::OpaqueToken => {
            format!("(freeform \"{}\")", escape_nix_string(&option.raw))
        }
    }
}

/// `NAME = [wrapper ]value;` without indentation.
pub fn statement(name: &str, option: &ConfigOption, force_wrapper: Option<&str>) -> String {
    let value = value_expression(option);
    match force_wrapper {
        Some(wrapper) => format!("{} = {} {};", attribute_name(name), wrapper, value),
        None => format!("{} = {};", attribute_name(name), value),
    }
}

fn escape_nix_string(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\\', '"', '$']) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(
        raw.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace("${", "\\${"),
    )
}

/// Escape the body of an already-quoted kernel string.
///
/// Existing `\x` pairs pass through untouched; a bare `"`, a trailing `\`
/// or `${` is escaped.
fn escape_string_literal(inner: &str) -> Cow<'_, str> {
    if !inner.contains(['"', '$', '\\']) {
        return Cow::Borrowed(inner);
    }

    let mut out = String::with_capacity(inner.len() + 4);
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next) => {
                    out.push(c);
                    out.push(next);
                }
                None => out.push_str("\\\\"),
            },
            '"' => out.push_str("\\\""),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
