//! Configuration Store
//!
//! Loads the site configuration once, validates it as a whole and exposes
//! dotted-path lookups over the raw document.

use serde_json::Value;
use std::collections::HashSet;

use crate::error::SiteError;
use crate::fetch;
use crate::models::SiteConfig;

const CONTACT_SECTION: &str = "contact";

/// Loaded configuration: raw JSON for path lookups plus the validated records
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: String,
    raw: Option<Value>,
    config: Option<SiteConfig>,
}

impl ConfigStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            raw: None,
            config: None,
        }
    }

    /// Fetch and validate the configuration.
    ///
    /// Failures are logged and yield `None`; the caller decides whether to
    /// render anything.
    pub async fn load(&mut self) -> Option<&SiteConfig> {
        let body = match fetch::fetch_text(&self.path).await {
            Ok(body) => body,
            Err(reason) => {
                let err = SiteError::Fetch { path: self.path.clone(), reason };
                log::error!("Error loading configuration: {}", err);
                return None;
            }
        };
        match self.load_from_str(&body) {
            Ok(config) => Some(config),
            Err(err) => {
                log::error!("Error loading configuration: {}", err);
                None
            }
        }
    }

    /// Parse and validate a configuration body; on failure the store stays unloaded
    pub fn load_from_str(&mut self, body: &str) -> Result<&SiteConfig, SiteError> {
        self.raw = None;
        self.config = None;

        let raw: Value = fetch::parse_json(&self.path, body)?;
        let config: SiteConfig = serde_json::from_value(raw.clone()).map_err(|e| SiteError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        validate(&config)?;

        self.raw = Some(raw);
        Ok(&*self.config.insert(config))
    }

    /// Resolve a dot-separated key path such as `home.name` or `navigation.0.id`.
    ///
    /// Returns `None` when nothing is loaded, a segment is missing, an
    /// intermediate value is not a record, or the value is JSON `null`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut value = self.raw.as_ref()?;
        for key in path.split('.') {
            value = match value {
                Value::Object(map) => map.get(key)?,
                Value::Array(list) => list.get(key.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        (!value.is_null()).then_some(value)
    }
}

/// Structural rules the typed records cannot express
pub fn validate(config: &SiteConfig) -> Result<(), SiteError> {
    let mut seen = HashSet::new();
    for item in &config.navigation {
        if item.id.trim().is_empty() {
            return Err(SiteError::InvalidConfig(format!(
                "navigation entry '{}' has an empty id",
                item.label
            )));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(SiteError::InvalidConfig(format!(
                "duplicate navigation id '{}'",
                item.id
            )));
        }
    }

    if let Some(skill) = config.about.skills.iter().find(|s| s.level > 100) {
        return Err(SiteError::InvalidConfig(format!(
            "skill '{}' has level {} (expected 0-100)",
            skill.name, skill.level
        )));
    }

    let has_contact_pane = config.navigation.iter().any(|item| item.id == CONTACT_SECTION);
    if has_contact_pane && config.contact.is_none() {
        return Err(SiteError::InvalidConfig(
            "navigation has a contact pane but no contact settings".to_string(),
        ));
    }

    let active_filters = config.portfolio.filters.iter().filter(|f| f.active).count();
    if active_filters > 1 {
        return Err(SiteError::InvalidConfig(format!(
            "{} portfolio filters are marked active (at most one allowed)",
            active_filters
        )));
    }

    Ok(())
}
