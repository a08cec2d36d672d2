/* src/widget/rust/src/redirect.rs */

use url::Url;

use crate::context::PageContext;
use crate::errors::RedirectError;
use crate::locale::Locale;

/// Path prefix the Chinese book is served under, relative to the site root.
const ZH_PREFIX: &str = "zh-CN/";

/// Compute the URL of the current page's counterpart under `selected`.
///
/// Resolution chain, all standard base-URL resolution:
/// 1. `book_root` = root path joined onto the current location.
/// 2. `site_root` = one directory above `book_root` when the page's own
///    locale is Chinese (that book is hosted a level below the site root),
///    otherwise `book_root` itself.
/// 3. `rel` = the current path with the book-root path stripped off the
///    front. A prefix mismatch degrades to the empty string, sending the
///    visitor to the target locale's root instead of failing.
pub fn switch_target(ctx: &PageContext, selected: Locale) -> Result<Url, RedirectError> {
  let current = Url::parse(&ctx.current_url).map_err(RedirectError::InvalidPageUrl)?;
  let book_root = current.join(&ctx.root_path).map_err(RedirectError::InvalidRootPath)?;
  let site_root = if ctx.locale == Locale::ZhCn {
    book_root.join("../").map_err(RedirectError::InvalidRootPath)?
  } else {
    book_root.clone()
  };
  let rel = current.path().strip_prefix(book_root.path()).unwrap_or("");

  let target = match selected {
    Locale::ZhCn => site_root.join(&format!("{ZH_PREFIX}{rel}")),
    Locale::En => site_root.join(rel),
  };
  target.map_err(RedirectError::InvalidTarget)
}
