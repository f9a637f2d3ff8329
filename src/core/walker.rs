use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::error::{GenerateError, Result};

/// Marker file that identifies a Godot project root.
pub const PROJECT_FILE_NAME: &str = "project.godot";

/// A scene or resource file selected for scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the project root, always `/`-separated.
    pub relative_key: String,
}

/// Result of walking a project.
pub struct WalkResult {
    pub files: Vec<SourceFile>,
    /// Files with a matching extension that were excluded by an ignore pattern.
    pub ignored_count: usize,
}

/// Fail unless `root` directly contains `project.godot`.
pub fn ensure_project_root(root: &Path) -> Result<()> {
    if root.join(PROJECT_FILE_NAME).is_file() {
        Ok(())
    } else {
        Err(GenerateError::InvalidProject {
            root: root.to_path_buf(),
        })
    }
}

/// Recursively collect files under `root` whose extension is in `extensions`.
///
/// Entries are visited depth-first with siblings sorted by file name, so the
/// result is stable for a given filesystem snapshot. `extensions` must already
/// be lower-cased.
pub fn discover(
    root: &Path,
    extensions: &[String],
    ignores: &[Pattern],
    verbose: bool,
) -> Result<WalkResult> {
    ensure_project_root(root)?;

    let mut files = Vec::new();
    let mut ignored_count = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| GenerateError::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !extensions.iter().any(|ext| *ext == file_extension(&file_name)) {
            continue;
        }

        let path = entry.path();
        let relative_key = relative_key(root, path);

        if ignores.iter().any(|p| p.matches(&relative_key)) {
            ignored_count += 1;
            if verbose {
                eprintln!("{} {}", "ignored:".bold().cyan(), relative_key);
            }
            continue;
        }

        files.push(SourceFile {
            path: path.to_path_buf(),
            relative_key,
        });
    }

    Ok(WalkResult {
        files,
        ignored_count,
    })
}

/// Lower-cased text after the last `.` of a file name.
///
/// A name without a dot yields the whole name.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or(file_name)
        .to_lowercase()
}

fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
