//! Small helpers shared by the parser and the renderers.

/// Whether `name` is a usable option name: non-empty, ASCII letters, digits
/// and underscores only.
pub fn is_option_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Strip the distribution prefix for display. Keys without it are returned as-is.
pub fn display_name<'a>(key: &'a str, prefix: &str) -> &'a str {
    key.strip_prefix(prefix).unwrap_or(key)
}

/// Parse the key of a `# <KEY> is not set` line.
///
/// Format: "# CONFIG_FOO is not set"
pub(crate) fn parse_not_set_line<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let key = line.strip_prefix("# ")?.strip_suffix(" is not set")?;
    let name = key.strip_prefix(prefix)?;
    is_option_name(name).then_some(key)
}

/// Parse a canonical `CONFIG_FOO=value` line into key and raw value.
pub(crate) fn parse_assignment_line<'a>(line: &'a str, prefix: &str) -> Option<(&'a str, &'a str)> {
    let (key, value) = line.split_once('=')?;
    let name = key.strip_prefix(prefix)?;
    is_option_name(name).then_some((key, value))
}

/// Parse an intermediate `FOO value` or `FOO? value` line into the bare name
/// and raw value.
pub(crate) fn parse_spaced_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(' ')?;
    let name = name.strip_suffix('?').unwrap_or(name);
    let value = value.trim();
    (is_option_name(name) && !value.is_empty()).then_some((name, value))
}
