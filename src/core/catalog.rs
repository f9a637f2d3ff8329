//! POT catalog rendering and writing.
//!
//! The output is a gettext template: a fixed header followed by one block per
//! source file, each entry an `msgid` with an empty `msgstr`. Values are
//! written verbatim; an embedded `"` is not escaped.

use std::{
    fmt::Write as _,
    fs,
    io::Write as _,
    path::Path,
};

use tempfile::Builder;

use super::index::TranslationIndex;
use crate::error::{GenerateError, Result};

/// Fixed catalog header.
pub const POT_HEADER: &str = concat!(
    "msgid \"\"\n",
    "msgstr \"\"\n",
    "\"Project-Id-Version: gopot\\n\"\n",
    "\"MIME-Version: 1.0\\n\"\n",
    "\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
    "\"Content-Transfer-Encoding: 8-bit\\n\"\n",
);

/// Render `index` as catalog text.
pub fn render(index: &TranslationIndex) -> String {
    let mut out = String::from(POT_HEADER);
    for file in index.files() {
        // Writing into a String cannot fail.
        let _ = writeln!(out);
        let _ = writeln!(out, "#: {}", file.relative_key);
        for value in &file.values {
            let _ = writeln!(out, "msgid \"{}\"", value);
            let _ = writeln!(out, "msgstr \"\"");
            let _ = writeln!(out);
        }
    }
    out
}

/// Write the catalog for `index` to `output_path`, replacing any existing
/// file, and return the number of entries written.
///
/// The text goes to a temporary file next to the destination first and is
/// then renamed over it, so an interrupted write leaves the previous catalog
/// in place. An existing catalog keeps its permissions; a new one gets the
/// usual umask-derived mode rather than the temp file's owner-only mode.
pub fn write(output_path: &Path, index: &TranslationIndex) -> Result<usize> {
    let content = render(index);
    let wrap = |source| GenerateError::output_write(output_path, source);

    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = temp_builder().tempfile_in(dir).map_err(wrap)?;
    temp.write_all(content.as_bytes()).map_err(wrap)?;
    temp.flush().map_err(wrap)?;
    if let Ok(metadata) = fs::metadata(output_path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(wrap)?;
    }
    temp.persist(output_path).map_err(|e| wrap(e.error))?;

    Ok(index.entry_count())
}

#[allow(unused_mut)]
fn temp_builder<'a, 'b>() -> Builder<'a, 'b> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the process umask at creation, like a plain `File::create`.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}
