//! Store location settings.

use serde::Deserialize;

use crate::client::{TaskClient, DEFAULT_COLLECTION};

/// Where the task document lives.
///
/// Deserializable so a host can load it from whatever settings file it
/// already has; only `base_url` is required.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            collection: default_collection(),
        }
    }

    pub fn client(&self) -> TaskClient {
        TaskClient::new(&self.base_url).with_collection(&self.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_defaults_to_tasks() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"base_url":"https://example.firebaseio.com"}"#).unwrap();
        assert_eq!(config, StoreConfig::new("https://example.firebaseio.com"));
        assert_eq!(
            config.client().collection_url(),
            "https://example.firebaseio.com/tasks.json"
        );
    }

    #[test]
    fn explicit_collection_is_used() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost:3000/","collection":"chores"}"#)
                .unwrap();
        assert_eq!(config.client().collection_url(), "http://localhost:3000/chores.json");
    }

    #[test]
    fn base_url_is_required() {
        let result: Result<StoreConfig, _> = serde_json::from_str(r#"{"collection":"chores"}"#);
        assert!(result.is_err());
    }
}
