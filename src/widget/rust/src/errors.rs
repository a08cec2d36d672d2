/* src/widget/rust/src/errors.rs */

use std::fmt;

/// Failure while computing a locale-switch target. With a same-origin page
/// URL and a framework-supplied root path these cannot occur in practice,
/// but the computation stays total and the boundary decides what to do.
#[derive(Debug)]
pub enum RedirectError {
  /// The captured page location did not parse as an absolute URL.
  InvalidPageUrl(url::ParseError),
  /// The root path did not resolve against the page URL.
  InvalidRootPath(url::ParseError),
  /// The final target did not resolve against the site root.
  InvalidTarget(url::ParseError),
}

impl fmt::Display for RedirectError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RedirectError::InvalidPageUrl(e) => write!(f, "invalid page url: {e}"),
      RedirectError::InvalidRootPath(e) => write!(f, "invalid root path: {e}"),
      RedirectError::InvalidTarget(e) => write!(f, "invalid redirect target: {e}"),
    }
  }
}

impl std::error::Error for RedirectError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      RedirectError::InvalidPageUrl(e)
      | RedirectError::InvalidRootPath(e)
      | RedirectError::InvalidTarget(e) => Some(e),
    }
  }
}
