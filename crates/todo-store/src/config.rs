//! Store Configuration

use serde::{Deserialize, Serialize};

use crate::error::TodoResult;
use crate::model::{Filter, SortOrder};

/// Storage key used by every build of the app so far
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Store settings, all optional when read from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Key holding the serialized collection
    pub storage_key: String,
    /// Filter selected at start-up
    pub default_filter: Filter,
    /// Sort order selected at start-up
    pub default_sort: SortOrder,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_filter: Filter::All,
            default_sort: SortOrder::NewToOld,
        }
    }
}

impl StoreConfig {
    pub fn from_json(json: &str) -> TodoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.default_filter, Filter::All);
        assert_eq!(config.default_sort, SortOrder::NewToOld);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = StoreConfig::from_json(r#"{"defaultSort":"old-to-new"}"#).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.default_sort, SortOrder::OldToNew);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(StoreConfig::from_json(r#"{"defaultFilter":"maybe"}"#).is_err());
    }
}
