/* src/widget/rust/src/locale.rs */

use serde::{Deserialize, Serialize};

/// A documentation locale. The site ships exactly two: English at the site
/// root and Simplified Chinese under `zh-CN/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
  #[serde(rename = "en")]
  En,
  #[serde(rename = "zh-CN")]
  ZhCn,
}

impl Locale {
  /// Fixed picker order: English first.
  pub const ALL: [Locale; 2] = [Locale::En, Locale::ZhCn];

  /// Resolve a locale from the document's declared-language attribute.
  /// Only `zh-cn` (compared case-insensitively) selects the Chinese locale;
  /// every other value, including empty or missing, means English.
  pub fn from_document_lang(attr: &str) -> Self {
    if attr.eq_ignore_ascii_case("zh-cn") { Locale::ZhCn } else { Locale::En }
  }

  /// Wire code, also used as the option value in the picker.
  pub fn code(self) -> &'static str {
    match self {
      Locale::En => "en",
      Locale::ZhCn => "zh-CN",
    }
  }

  /// Parse a picker option value back into a locale.
  pub fn from_code(code: &str) -> Option<Self> {
    match code {
      "en" => Some(Locale::En),
      "zh-CN" => Some(Locale::ZhCn),
      _ => None,
    }
  }

  /// Option label. Kept identical to the code and ASCII-only so neither
  /// locale's chrome mixes scripts.
  pub fn label(self) -> &'static str {
    self.code()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zh_cn_detected_case_insensitively() {
    assert_eq!(Locale::from_document_lang("zh-cn"), Locale::ZhCn);
    assert_eq!(Locale::from_document_lang("zh-CN"), Locale::ZhCn);
    assert_eq!(Locale::from_document_lang("ZH-CN"), Locale::ZhCn);
  }

  #[test]
  fn everything_else_is_english() {
    assert_eq!(Locale::from_document_lang("en"), Locale::En);
    assert_eq!(Locale::from_document_lang(""), Locale::En);
    assert_eq!(Locale::from_document_lang("fr"), Locale::En);
    assert_eq!(Locale::from_document_lang("zh"), Locale::En);
    assert_eq!(Locale::from_document_lang("zh-TW"), Locale::En);
  }

  #[test]
  fn codes_round_trip() {
    for locale in Locale::ALL {
      assert_eq!(Locale::from_code(locale.code()), Some(locale));
    }
    assert_eq!(Locale::from_code("de"), None);
  }

  #[test]
  fn english_lists_first() {
    assert_eq!(Locale::ALL, [Locale::En, Locale::ZhCn]);
  }

  #[test]
  fn serde_uses_wire_codes() {
    assert_eq!(serde_json::to_value(Locale::ZhCn).expect("serializable"), "zh-CN");
    let parsed: Locale = serde_json::from_value("en".into()).expect("wire code");
    assert_eq!(parsed, Locale::En);
  }

  #[test]
  fn labels_are_ascii() {
    for locale in Locale::ALL {
      assert!(locale.label().is_ascii());
    }
  }
}
