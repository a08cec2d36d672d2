/* src/widget/wasm/src/lib.rs */

use lang_select::{Chrome, Locale, MountOutcome, PageContext, Picker, Widget, WidgetConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlSelectElement};

/// Mount the locale switcher with the stock configuration. `root_path` is
/// the framework-supplied relative path to the book root (mdBook's
/// `path_to_root`); pass an empty string when unavailable. Never throws:
/// a page that cannot host the widget simply keeps rendering without it.
#[wasm_bindgen]
pub fn init(root_path: &str) {
  let config = WidgetConfig { root_path: root_path.to_string(), ..WidgetConfig::default() };
  schedule(config);
}

/// Mount with a JSON configuration (selector, wrapper class, label
/// overrides). Malformed or empty JSON falls back to the defaults.
#[wasm_bindgen]
pub fn init_with_config(config_json: &str) {
  let config = WidgetConfig::from_json(config_json).unwrap_or_default();
  schedule(config);
}

/// Pure redirect computation, exported for themes that render their own
/// control: returns the counterpart URL, or an empty string when the
/// inputs do not resolve.
#[wasm_bindgen]
pub fn switch_url(href: &str, lang_attr: &str, root_path: &str, selected: &str) -> String {
  let Some(locale) = Locale::from_code(selected) else {
    return String::new();
  };
  let ctx = PageContext::new(lang_attr, root_path, href);
  match lang_select::switch_target(&ctx, locale) {
    Ok(target) => target.to_string(),
    Err(_) => String::new(),
  }
}

/// Render description for a custom picker, pre-selected to the locale the
/// given language attribute declares.
#[wasm_bindgen]
pub fn picker_json(lang_attr: &str) -> String {
  let picker = Picker::for_locale(Locale::from_document_lang(lang_attr));
  serde_json::to_string(&picker).unwrap_or_else(|_| "null".to_string())
}

/// Run now, or defer to DOMContentLoaded when the document structure is
/// still being parsed.
fn schedule(config: WidgetConfig) {
  let Some(document) = web_sys::window().and_then(|w| w.document()) else {
    return;
  };
  if document.ready_state() == "loading" {
    let deferred = document.clone();
    let cb = Closure::once(move || mount_on(&deferred, config));
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
      "DOMContentLoaded",
      cb.as_ref().unchecked_ref(),
      &options,
    );
    cb.forget();
  } else {
    mount_on(&document, config);
  }
}

fn mount_on(document: &Document, config: WidgetConfig) {
  let lang = document
    .document_element()
    .and_then(|el| el.get_attribute("lang"))
    .unwrap_or_default();
  let href = match web_sys::window().map(|w| w.location().href()) {
    Some(Ok(href)) => href,
    _ => return,
  };
  let ctx = PageContext::new(&lang, config.root_path.clone(), href);
  let mut chrome = DomChrome::new(document.clone(), config);
  if let MountOutcome::Mounted(widget) = Widget::mount(ctx, &mut chrome) {
    if let Some(select) = chrome.inserted.take() {
      wire_change(&select, widget, chrome);
    }
  }
}

/// Forward picker changes into the widget. The closure owns the widget and
/// the chrome for the rest of the page's lifetime.
fn wire_change(select: &HtmlSelectElement, widget: Widget, mut chrome: DomChrome) {
  let value_source = select.clone();
  let cb = Closure::<dyn FnMut()>::new(move || {
    let code = value_source.value();
    widget.on_select(&code, &mut chrome);
  });
  let _ = select.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
  cb.forget();
}

/// [`Chrome`] over the live document.
struct DomChrome {
  document: Document,
  config: WidgetConfig,
  /// Select element created by the last successful insert, kept so the
  /// change listener can be wired after the mount completes.
  inserted: Option<HtmlSelectElement>,
}

impl DomChrome {
  fn new(document: Document, config: WidgetConfig) -> Self {
    Self { document, config, inserted: None }
  }

  fn toolbar(&self) -> Option<Element> {
    self.document.query_selector(&self.config.toolbar_selector).ok().flatten()
  }

  fn try_insert(&self, picker: &Picker) -> Result<HtmlSelectElement, JsValue> {
    let toolbar = self.toolbar().ok_or_else(|| JsValue::from_str("toolbar missing"))?;

    let wrapper = self.document.create_element("span")?;
    wrapper.set_class_name(&self.config.wrapper_class);

    let select: HtmlSelectElement = self.document.create_element("select")?.dyn_into()?;
    select.set_attribute("aria-label", &self.config.picker_label)?;
    for option in &picker.options {
      let el = self.document.create_element("option")?;
      el.set_attribute("value", option.code)?;
      el.set_text_content(Some(option.label));
      select.append_child(&el)?;
    }
    select.set_value(picker.selected);

    wrapper.append_child(&select)?;
    toolbar.prepend_with_node_1(&wrapper)?;
    Ok(select)
  }
}

impl Chrome for DomChrome {
  fn toolbar_present(&self) -> bool {
    self.toolbar().is_some()
  }

  fn picker_present(&self) -> bool {
    let selector = format!(".{}", self.config.wrapper_class);
    self.document.query_selector(&selector).ok().flatten().is_some()
  }

  fn insert_picker(&mut self, picker: &Picker) {
    // A failed DOM insert degrades to the unmounted state.
    self.inserted = self.try_insert(picker).ok();
  }

  fn navigate(&mut self, url: &str) {
    if let Some(window) = web_sys::window() {
      let _ = window.location().set_href(url);
    }
  }
}
