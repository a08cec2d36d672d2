/* src/widget/rust/src/config.rs */

use serde::{Deserialize, Serialize};

/// Widget configuration, passed explicitly into initialization instead of
/// read from page globals. Every field has a default matching the stock
/// mdBook theme, so `{}` (or an absent config) is a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
  /// Relative path from the current page to the book root. Empty when the
  /// hosting framework did not provide one.
  pub root_path: String,
  /// CSS selector for the toolbar region the picker is prepended to.
  pub toolbar_selector: String,
  /// Class on the wrapper element, used for styling hooks and as the
  /// double-insertion sentinel.
  pub wrapper_class: String,
  /// `aria-label` on the picker. ASCII by convention.
  pub picker_label: String,
}

impl Default for WidgetConfig {
  fn default() -> Self {
    Self {
      root_path: String::new(),
      toolbar_selector: ".right-buttons".to_string(),
      wrapper_class: "lang-select".to_string(),
      picker_label: "lang".to_string(),
    }
  }
}

impl WidgetConfig {
  /// Parse a configuration from a JSON string. Absent or malformed input
  /// yields `None`; callers fall back to `WidgetConfig::default()`.
  pub fn from_json(json: &str) -> Option<Self> {
    if json.is_empty() {
      return None;
    }
    serde_json::from_str(json).ok()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_matches_stock_theme() {
    let config = WidgetConfig::default();
    assert_eq!(config.toolbar_selector, ".right-buttons");
    assert_eq!(config.wrapper_class, "lang-select");
    assert_eq!(config.picker_label, "lang");
    assert_eq!(config.root_path, "");
  }

  #[test]
  fn empty_object_is_complete() {
    let config = WidgetConfig::from_json("{}").unwrap();
    assert_eq!(config, WidgetConfig::default());
  }

  #[test]
  fn partial_override() {
    let config =
      WidgetConfig::from_json(r#"{"root_path": "../../", "toolbar_selector": ".nav"}"#).unwrap();
    assert_eq!(config.root_path, "../../");
    assert_eq!(config.toolbar_selector, ".nav");
    assert_eq!(config.wrapper_class, "lang-select");
  }

  #[test]
  fn invalid_json_is_none() {
    assert_eq!(WidgetConfig::from_json("not json"), None);
    assert_eq!(WidgetConfig::from_json(""), None);
  }
}
