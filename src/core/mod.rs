//! Extraction pipeline.
//!
//! ## Module Structure
//!
//! - `walker`: Project root check and file discovery
//! - `matcher`: Per-line field matching and the translation marker filter
//! - `index`: Project-wide deduplicated string index
//! - `catalog`: POT rendering and writing
//! - `pipeline`: Runs the stages above in order

pub mod catalog;
pub mod index;
pub mod matcher;
pub mod pipeline;
pub mod walker;

pub use catalog::{POT_HEADER, render};
pub use index::{FileEntries, TranslationIndex};
pub use matcher::{FieldMatcher, TRANSLATION_MARKER, is_translatable};
pub use pipeline::{GenerateReport, build_index, generate};
pub use walker::{PROJECT_FILE_NAME, SourceFile, WalkResult, discover, ensure_project_root};
