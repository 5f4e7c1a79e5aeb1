//! Line-oriented extraction of app names from registration sources.
//!
//! A line qualifies when its trimmed form contains the marker, does not start
//! with `/` and is not a `#define`. The name is one comma-separated field of
//! that line, trimmed, with the rule's strip character removed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::catalog::AppList;
use crate::common::config::{Config, SourceConfig};
use crate::common::errors::ExtractError;

/// How to find and clean names in one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRule {
    pub label: String,
    pub file_name: String,
    pub marker: String,
    pub field: usize,
    pub strip: char,
}

impl ExtractRule {
    pub fn from_source(config: &Config, source: &SourceConfig) -> Self {
        Self {
            label: source.label.clone(),
            file_name: source.file.clone(),
            marker: config.marker.clone(),
            field: config.field,
            strip: source.strip,
        }
    }

    /// Whether a trimmed line registers an app
    pub fn is_declaration(&self, line: &str) -> bool {
        line.contains(self.marker.as_str()) && !line.starts_with('/') && !line.contains("#define")
    }

    /// Pull the name out of a qualifying line.
    /// Returns `None` when the line has too few fields.
    pub fn extract_name(&self, line: &str) -> Option<String> {
        let field = line.split(',').nth(self.field)?;
        Some(field.trim().replace(self.strip, ""))
    }
}

/// Extract names from `dir/<rule.file_name>`
pub fn extract_file(dir: &Path, rule: &ExtractRule) -> Result<AppList, ExtractError> {
    let path = dir.join(&rule.file_name);
    let file = File::open(&path).map_err(|e| ExtractError::io(&path, e))?;
    debug!(path = %path.display(), "scanning");
    extract_from_reader(BufReader::new(file), rule, &path)
}

/// Extract names from any line source; `path` is only used in errors
pub fn extract_from_reader<R: BufRead>(
    reader: R,
    rule: &ExtractRule,
    path: &Path,
) -> Result<AppList, ExtractError> {
    let mut list = AppList::new(&rule.label);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ExtractError::io(path, e))?;
        let line = line.trim();

        if !rule.is_declaration(line) {
            continue;
        }

        let name = rule
            .extract_name(line)
            .ok_or_else(|| ExtractError::MalformedLine {
                path: path.to_path_buf(),
                line_number: idx + 1,
                expected: rule.field + 1,
                line: line.to_string(),
            })?;

        debug!(line = idx + 1, %name, "found app");
        list.push(name);
    }

    Ok(list)
}
