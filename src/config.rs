use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::ModalError;

pub const DEFAULT_CONTAINER_ID: &str = "storyModal";
pub const DEFAULT_MEDIA_ID: &str = "modalMedia";
pub const DEFAULT_LABEL_ID: &str = "modalUser";
pub const DEFAULT_LABEL_PREFIX: &str = "Story by: ";
pub const HIDDEN_DISPLAY: &str = "none";

/// Where the modal lives in the host page and how it is shown.
///
/// Every field is optional when deserializing; missing ones fall back to the
/// ids the stock story page uses.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    pub container_id: String,
    pub media_id: String,
    pub label_id: String,
    /// Tried in order; the first selector that matches is the close control.
    pub close_selectors: Vec<String>,
    pub label_prefix: String,
    pub shown_display: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            media_id: DEFAULT_MEDIA_ID.to_string(),
            label_id: DEFAULT_LABEL_ID.to_string(),
            close_selectors: vec!["#closeModal".to_string(), ".close".to_string()],
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            shown_display: "block".to_string(),
        }
    }
}

impl ModalConfig {
    pub fn from_json(json: &str) -> Result<Self, ModalError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ModalError::Config(e.to_string()))?;
        config.validate()
    }

    pub fn from_js(value: JsValue) -> Result<Self, ModalError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ModalError::Config(e.to_string()))?;
        config.validate()
    }

    pub fn label_for(&self, username: &str) -> String {
        format!("{}{}", self.label_prefix, username)
    }

    fn validate(self) -> Result<Self, ModalError> {
        for (field, id) in [
            ("containerId", &self.container_id),
            ("mediaId", &self.media_id),
            ("labelId", &self.label_id),
        ] {
            if id.trim().is_empty() {
                return Err(ModalError::Config(format!("{field} must not be empty")));
            }
        }
        // "none" would make opening the modal a no-op
        if self.shown_display.trim().is_empty() || self.shown_display == HIDDEN_DISPLAY {
            return Err(ModalError::Config(format!(
                "shownDisplay must be a visible display value, got {:?}",
                self.shown_display
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_story_page_ids() {
        let config = ModalConfig::default();
        assert_eq!(config.container_id, "storyModal");
        assert_eq!(config.media_id, "modalMedia");
        assert_eq!(config.label_id, "modalUser");
        assert_eq!(config.close_selectors, vec!["#closeModal", ".close"]);
        assert_eq!(config.shown_display, "block");
    }

    #[test]
    fn label_for_prefixes_username() {
        let config = ModalConfig::default();
        assert_eq!(config.label_for("alice"), "Story by: alice");
        assert_eq!(config.label_for(""), "Story by: ");
    }

    #[test]
    fn empty_json_object_is_default() {
        assert_eq!(ModalConfig::from_json("{}").unwrap(), ModalConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config =
            ModalConfig::from_json(r#"{"containerId": "lightbox", "closeSelectors": [".dismiss"]}"#)
                .unwrap();
        assert_eq!(config.container_id, "lightbox");
        assert_eq!(config.close_selectors, vec![".dismiss"]);
        assert_eq!(config.media_id, "modalMedia");
        assert_eq!(config.label_prefix, "Story by: ");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ModalConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ModalError::Config(_)));
    }

    #[test]
    fn rejects_blank_ids() {
        let err = ModalConfig::from_json(r#"{"mediaId": "  "}"#).unwrap_err();
        assert_eq!(err, ModalError::Config("mediaId must not be empty".to_string()));
    }

    #[test]
    fn rejects_hidden_shown_display() {
        assert!(ModalConfig::from_json(r#"{"shownDisplay": "none"}"#).is_err());
        assert!(ModalConfig::from_json(r#"{"shownDisplay": "flex"}"#).is_ok());
    }

    #[test]
    fn empty_close_selector_list_is_allowed() {
        let config = ModalConfig::from_json(r#"{"closeSelectors": []}"#).unwrap();
        assert!(config.close_selectors.is_empty());
    }
}
