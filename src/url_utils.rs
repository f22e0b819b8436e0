//! URL utility functions.
//!
//! Resolution of `href`/`src` values against the document's base URI.
//! Values that are already absolute, use a non-hierarchical scheme, or only
//! name a fragment are left exactly as written.

use url::Url;

/// Schemes whose values are never rewritten.
const OPAQUE_SCHEMES: [&str; 5] = ["data:", "javascript:", "mailto:", "tel:", "about:"];

/// Resolve `value` against `base`, returning `None` when it should be left
/// unchanged.
///
/// ```rust
/// use article_reader::url_utils::resolve;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/news/story.html")?;
/// assert_eq!(resolve("../img/a.png", &base).as_deref(), Some("https://example.com/img/a.png"));
/// assert_eq!(resolve("#comments", &base), None);
/// assert_eq!(resolve("mailto:desk@example.com", &base), None);
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn resolve(value: &str, base: &Url) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let lower = trimmed.to_ascii_lowercase();
    if OPAQUE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        return None;
    }

    if is_absolute(trimmed) {
        return None;
    }

    match base.join(trimmed) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(err) => {
            tracing::debug!(value = trimmed, error = %err, "leaving unresolvable URL unchanged");
            None
        }
    }
}

/// Whether `value` parses on its own, i.e. already carries a scheme.
fn is_absolute(value: &str) -> bool {
    Url::parse(value).is_ok()
}
