/* src/widget/rust/src/context.rs */

use crate::locale::Locale;

/// Everything the widget captures from the page at load time. Ephemeral:
/// re-derived on every page load and destroyed by navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
  /// Locale declared by the document's root-element language attribute.
  pub locale: Locale,
  /// Relative path from the current page to the book root, as supplied by
  /// the hosting framework (mdBook's `path_to_root`). Empty when unknown.
  pub root_path: String,
  /// The browser's absolute location at load time.
  pub current_url: String,
}

impl PageContext {
  pub fn new(lang_attr: &str, root_path: impl Into<String>, current_url: impl Into<String>) -> Self {
    Self {
      locale: Locale::from_document_lang(lang_attr),
      root_path: root_path.into(),
      current_url: current_url.into(),
    }
  }
}
