//! On-disk cache of fetched config text.

use super::spec::SourceRole;
use crate::error::Result;
use crate::fs::atomic_write_file;
use chrono::Utc;
use std::path::Path;
use tracing::info;

/// Write `text` to `path` behind a comment header. The parser skips the header.
pub(crate) fn store(path: &Path, role: SourceRole, text: &str) -> Result<()> {
    let mut content = format!(
        "# Cached {} configuration\n# Fetched {}\n#\n",
        role,
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    content.push_str(text);
    if !content.ends_with('\n') {
        content.push('\n');
    }

    atomic_write_file(path, &content)?;
    info!(%role, cache = %path.display(), "cached fetched config");
    Ok(())
}
