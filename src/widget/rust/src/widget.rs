/* src/widget/rust/src/widget.rs */

use serde::Serialize;

use crate::context::PageContext;
use crate::locale::Locale;
use crate::redirect::switch_target;

/// One entry in the picker control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOption {
  pub code: &'static str,
  pub label: &'static str,
}

/// Render description for the picker: the fixed option set, pre-selected to
/// the page's declared locale. Serializable so hosts can render their own
/// control from JSON instead of using the stock DOM chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Picker {
  pub options: Vec<PickerOption>,
  pub selected: &'static str,
}

impl Picker {
  pub fn for_locale(locale: Locale) -> Self {
    let options = Locale::ALL
      .iter()
      .map(|l| PickerOption { code: l.code(), label: l.label() })
      .collect();
    Self { options, selected: locale.code() }
  }
}

/// Capability seam between the switch logic and the page. The wasm crate
/// implements this over the live document; tests implement it over a
/// recording fake.
pub trait Chrome {
  /// True when the toolbar region exists in the page chrome.
  fn toolbar_present(&self) -> bool;
  /// True when a previously inserted picker is already in the toolbar.
  fn picker_present(&self) -> bool;
  /// Insert the picker as the toolbar's first child.
  fn insert_picker(&mut self, picker: &Picker);
  /// Full-page navigation. Terminal for the current script lifetime.
  fn navigate(&mut self, url: &str);
}

/// Result of a mount attempt. Both non-mounted cases are normal outcomes,
/// not errors: the surrounding theme may simply not have the toolbar, and a
/// re-fired ready hook must not stack a second picker.
#[derive(Debug)]
pub enum MountOutcome {
  Mounted(Widget),
  NoToolbar,
  AlreadyMounted,
}

/// A mounted locale switcher, holding the page context captured at load.
#[derive(Debug)]
pub struct Widget {
  ctx: PageContext,
}

impl Widget {
  /// Insert the picker into the page chrome. No-ops (without error) when
  /// the toolbar is missing or a picker is already there.
  pub fn mount(ctx: PageContext, chrome: &mut impl Chrome) -> MountOutcome {
    if !chrome.toolbar_present() {
      return MountOutcome::NoToolbar;
    }
    if chrome.picker_present() {
      return MountOutcome::AlreadyMounted;
    }
    chrome.insert_picker(&Picker::for_locale(ctx.locale));
    MountOutcome::Mounted(Widget { ctx })
  }

  /// Handle a picker selection: compute the counterpart URL and navigate.
  /// Unknown option values and malformed contexts are silent no-ops; the
  /// page must keep rendering no matter what.
  pub fn on_select(&self, code: &str, chrome: &mut impl Chrome) {
    let Some(selected) = Locale::from_code(code) else { return };
    if let Ok(target) = switch_target(&self.ctx, selected) {
      chrome.navigate(target.as_str());
    }
  }

  pub fn context(&self) -> &PageContext {
    &self.ctx
  }
}
