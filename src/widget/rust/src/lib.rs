/* src/widget/rust/src/lib.rs */

//! Locale-switch widget core for statically generated documentation sites.
//!
//! The hosting layout pairs a default English book at the site root with a
//! Simplified Chinese build under `zh-CN/`. This crate holds everything
//! that does not need a live document: locale detection, the page context,
//! the redirect computation, and the widget state machine behind the
//! [`Chrome`] capability trait. The companion `lang-select-wasm` crate
//! implements [`Chrome`] over the real DOM.

pub mod config;
pub mod context;
pub mod errors;
pub mod locale;
pub mod redirect;
pub mod widget;

// Re-exports for ergonomic use
pub use config::WidgetConfig;
pub use context::PageContext;
pub use errors::RedirectError;
pub use locale::Locale;
pub use redirect::switch_target;
pub use widget::{Chrome, MountOutcome, Picker, PickerOption, Widget};
