use std::{
    fs::File,
    io::{BufRead, BufReader},
};

use super::{
    catalog,
    index::TranslationIndex,
    matcher::FieldMatcher,
    walker::{self, SourceFile},
};
use crate::{
    config::ScanConfig,
    error::{GenerateError, Result},
};

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GenerateReport {
    pub index: TranslationIndex,
    /// Number of source files that were read.
    pub files_scanned: usize,
    /// Number of matching files skipped by ignore patterns.
    pub files_ignored: usize,
    /// Number of catalog entries written.
    pub entry_count: usize,
}

/// Walk the project, extract every translatable string and write the catalog.
///
/// The catalog is only written once every file has been scanned; any failure
/// before that leaves the output path untouched.
pub fn generate(config: &ScanConfig) -> Result<GenerateReport> {
    let walk = walker::discover(
        &config.root,
        &config.extensions,
        &config.ignores,
        config.verbose,
    )?;
    let matcher = FieldMatcher::new(&config.fields)?;
    let index = build_index(&walk.files, &matcher)?;
    let entry_count = catalog::write(&config.output, &index)?;

    Ok(GenerateReport {
        index,
        files_scanned: walk.files.len(),
        files_ignored: walk.ignored_count,
        entry_count,
    })
}

/// Scan `files` in order and collect their translatable strings.
pub fn build_index(files: &[SourceFile], matcher: &FieldMatcher) -> Result<TranslationIndex> {
    let mut index = TranslationIndex::new();
    for file in files {
        scan_file(file, matcher, &mut index)?;
    }
    Ok(index)
}

fn scan_file(file: &SourceFile, matcher: &FieldMatcher, index: &mut TranslationIndex) -> Result<()> {
    let handle = File::open(&file.path).map_err(|e| GenerateError::file_read(&file.path, e))?;
    for line in BufReader::new(handle).lines() {
        let line = line.map_err(|e| GenerateError::file_read(&file.path, e))?;
        if let Some(value) = matcher.extract(&line) {
            index.record(&file.relative_key, value);
        }
    }
    Ok(())
}
