//! Kernel version label from a kernel source `Makefile`.
//!
//! Reads the `VERSION`, `PATCHLEVEL`, `SUBLEVEL` and `EXTRAVERSION`
//! assignments at the top of the top-level Makefile.

/// Build `major.minor.patch[extra]` from Makefile text.
///
/// Returns `None` when any of the first three assignments is missing.
/// An empty `EXTRAVERSION` adds nothing.
pub fn from_makefile(text: &str) -> Option<String> {
    let mut major = None;
    let mut minor = None;
    let mut patch = None;
    let mut extra = None;

    for line in text.lines() {
        let Some((name, value)) = line.trim().split_once('=') else {
            continue;
        };
        let value = value.trim();
        match name.trim() {
            "VERSION" => major = Some(value),
            "PATCHLEVEL" => minor = Some(value),
            "SUBLEVEL" => patch = Some(value),
            "EXTRAVERSION" if !value.is_empty() => extra = Some(value),
            _ => {}
        }
    }

    let mut version = format!("{}.{}.{}", major?, minor?, patch?);
    if let Some(extra) = extra {
        version.push_str(extra);
    }
    Some(version)
}
