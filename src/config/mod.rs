//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Global list-page settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSettings {
    /// Page size applied when a request leaves the limit at zero
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Largest page size a caller may request
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

fn default_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    100
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

/// List configuration for one entity type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityListConfig {
    /// Entity type name (e.g., "event", "product")
    pub entity: String,

    /// Field whitelist for filtering and sorting. Empty means permissive
    /// mode: every field is allowed.
    #[serde(default)]
    pub fields: Vec<String>,

    /// Default search field set applied when a search request does not
    /// name its own fields
    #[serde(default)]
    pub search_fields: Vec<String>,

    /// Authorization policy string (see `AuthPolicy::parse_policy`);
    /// unset means public access
    #[serde(default)]
    pub policy: Option<String>,
}

impl EntityListConfig {
    /// Permissive configuration for an entity: all fields allowed, no
    /// default search set, public access
    pub fn permissive(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            fields: Vec::new(),
            search_fields: Vec::new(),
            policy: None,
        }
    }

    /// Check whether a field path is whitelisted.
    ///
    /// Dot paths are matched either verbatim or by their head segment, so
    /// whitelisting `location` covers `location.name`.
    pub fn is_allowed_field(&self, path: &str) -> bool {
        if self.fields.is_empty() {
            return true;
        }
        let head = path.split('.').next().unwrap_or(path);
        self.fields.iter().any(|f| f == path || f == head)
    }
}

/// Complete list configuration for a deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Global settings
    #[serde(default)]
    pub settings: ListSettings,

    /// Per-entity configurations
    pub entities: Vec<EntityListConfig>,
}

impl ListConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Find the configuration for an entity type
    pub fn find_entity(&self, entity: &str) -> Option<&EntityListConfig> {
        self.entities.iter().find(|e| e.entity == entity)
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            settings: ListSettings::default(),
            entities: vec![
                EntityListConfig {
                    entity: "event".to_string(),
                    fields: vec![
                        "name".to_string(),
                        "starts_at".to_string(),
                        "location".to_string(),
                        "active".to_string(),
                    ],
                    search_fields: vec!["name".to_string()],
                    policy: None,
                },
                EntityListConfig {
                    entity: "product".to_string(),
                    fields: vec![
                        "name".to_string(),
                        "price".to_string(),
                        "category".to_string(),
                    ],
                    search_fields: vec!["name".to_string(), "category".to_string()],
                    policy: Some("authenticated".to_string()),
                },
            ],
        }
    }
}
