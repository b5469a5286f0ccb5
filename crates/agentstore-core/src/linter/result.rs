//! Lint finding record

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One linter finding
///
/// Carries a fixed core (`file_path`, `line_number`, `severity`, `message`)
/// plus an open `extra` map for linter-specific attributes such as a column
/// or rule code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintResult {
    pub file_path: Option<String>,
    pub line_number: Option<u32>,
    pub severity: Option<String>,
    pub message: Option<String>,
    /// Additional attributes, flattened into the serialized record
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl LintResult {
    /// Create a finding with the core fields set
    pub fn new(
        file_path: impl Into<String>,
        line_number: u32,
        severity: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_path: Some(file_path.into()),
            line_number: Some(line_number),
            severity: Some(severity.into()),
            message: Some(message.into()),
            extra: BTreeMap::new(),
        }
    }

    /// Attach an additional attribute
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Look up an additional attribute
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// The core fields as a map; `extra` is not included
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("file_path".to_string(), self.file_path.clone().into());
        map.insert("line_number".to_string(), self.line_number.into());
        map.insert("severity".to_string(), self.severity.clone().into());
        map.insert("message".to_string(), self.message.clone().into());
        map
    }
}

impl std::fmt::Display for LintResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn show<T: std::fmt::Display>(value: &Option<T>) -> String {
            value.as_ref().map_or_else(|| "None".to_string(), ToString::to_string)
        }

        write!(
            f,
            "LintResult(file_path={}, line_number={}, severity={}, message={})",
            show(&self.file_path),
            show(&self.line_number),
            show(&self.severity),
            show(&self.message),
        )
    }
}
