use serde::Serialize;
use std::path::Path;

use tracing::debug;

use crate::common::config::Config;
use crate::common::errors::ExtractError;
use crate::extract::{self, ExtractRule};

/// Name of one registered app, as written in the source
pub type AppName = String;

/// A labeled list of app names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppList {
    pub label: String,
    #[serde(rename = "apps")]
    pub names: Vec<AppName>,
}

impl AppList {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            names: Vec::new(),
        }
    }

    pub fn push(&mut self, name: AppName) {
        self.names.push(name);
    }

    /// Lexicographic order, duplicates kept
    pub fn sort(&mut self) {
        self.names.sort();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Extract and sort every configured source under `src`.
/// Fails on the first source that cannot be read or parsed.
pub fn build_catalog(src: &Path, config: &Config) -> Result<Vec<AppList>, ExtractError> {
    let mut lists = Vec::with_capacity(config.sources.len());

    for source in &config.sources {
        let rule = ExtractRule::from_source(config, source);
        let mut list = extract::extract_file(src, &rule)?;
        list.sort();
        debug!(label = %list.label, count = list.len(), "extracted");
        lists.push(list);
    }

    Ok(lists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_sources(dir: &Path, oc: &str, hem: &str) {
        fs::write(dir.join("OC_apps.cpp"), oc).unwrap();
        fs::write(dir.join("hemisphere_config.h"), hem).unwrap();
    }

    #[test]
    fn test_sort_keeps_duplicates() {
        let mut list = AppList::new("x");
        for name in ["Zebra", "Alpha", "Zebra", "Mid"] {
            list.push(name.to_string());
        }
        list.sort();
        assert_eq!(list.names, vec!["Alpha", "Mid", "Zebra", "Zebra"]);
    }

    #[test]
    fn test_sort_is_byte_order() {
        let mut list = AppList::new("x");
        for name in ["hMIDIIn", "TM", "ADEG", "TB_3PO"] {
            list.push(name.to_string());
        }
        list.sort();
        assert_eq!(list.names, vec!["ADEG", "TB_3PO", "TM", "hMIDIIn"]);
    }

    #[test]
    fn test_build_catalog_in_config_order() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(
            dir.path(),
            "DECLARE_APP('Z','Z', \"Zebra\", Z),\nDECLARE_APP('A','A', \"Alpha\", A),\n",
            "DECLARE_APPLET( 1, 0x01, Squiggle), \\\n",
        );

        let lists = build_catalog(dir.path(), &Config::default()).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].label, "o_C APPS");
        assert_eq!(lists[0].names, vec!["Alpha", "Zebra"]);
        assert_eq!(lists[1].label, "Hemisphere APPS");
        assert_eq!(lists[1].names, vec!["Squiggle"]);
    }

    #[test]
    fn test_build_catalog_missing_second_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("OC_apps.cpp"), "DECLARE_APP(a, b, \"A\")\n").unwrap();

        let err = build_catalog(dir.path(), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("hemisphere_config.h"));
    }

    #[test]
    fn test_json_field_names() {
        let mut list = AppList::new("o_C APPS");
        list.push("Pong".to_string());
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["label"], "o_C APPS");
        assert_eq!(json["apps"][0], "Pong");
    }
}
