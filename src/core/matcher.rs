//! Line-level extraction of translatable field values.
//!
//! Scene and resource files are skimmed, not parsed: each line is tested
//! against one compiled pattern per configured field name, in order.

use regex::Regex;

use crate::error::{GenerateError, Result};

/// Leading character that flags a string as intended for translation.
pub const TRANSLATION_MARKER: char = '_';

/// Ordered table of `(field name, compiled pattern)` pairs.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    patterns: Vec<(String, Regex)>,
}

impl FieldMatcher {
    /// Compile one pattern per field name.
    ///
    /// Field names are matched literally and case-sensitively. A field must
    /// start the line or follow a non-word character, so `text` does not match
    /// `my_text = "..."`.
    pub fn new<S: AsRef<str>>(field_names: &[S]) -> Result<Self> {
        let patterns = field_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let pattern = format!(r#"(?:^|\W){}\s*=\s*"(.*)""#, regex::escape(name));
                Regex::new(&pattern)
                    .map(|regex| (name.to_owned(), regex))
                    .map_err(|source| GenerateError::InvalidField {
                        field: name.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Value assigned to the first configured field found on `line`.
    ///
    /// Only one value is returned per line. The capture is greedy up to the
    /// last `"` on the line and escaped quotes get no special treatment.
    pub fn match_field<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.patterns.iter().find_map(|(_, regex)| {
            regex
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })
    }

    /// Translatable value on `line`, if any.
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.match_field(line).filter(|value| is_translatable(value))
    }
}

/// True iff `value` starts with the translation marker.
pub fn is_translatable(value: &str) -> bool {
    value.starts_with(TRANSLATION_MARKER)
}
