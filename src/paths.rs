//! Base-path-aware link building.
//!
//! Every internal link and asset reference is written relative to the site
//! root (`/blog`, `/images/logo.svg`) and joined with the deploy base path at
//! render time. On GitHub Pages the base is `/{repo}`, elsewhere `/`.
//!
//! ```text
//! link("/",        "/blog")  → "/blog"
//! link("/repo",    "blog")   → "/repo/blog"
//! link("/repo/",   "/blog")  → "/repo/blog"
//! link("/repo",    "/")      → "/repo/"
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in a query component. Mirrors `encodeURIComponent`:
/// everything except ASCII alphanumerics and `-_.!~*'()`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Join a site-relative path with the base path.
///
/// A missing leading `/` on `path` is added. A trailing `/` on `base` is
/// dropped before joining so the result never contains `//` at the seam.
pub fn link(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Link to the search page for `query`, or `None` when the query is blank.
pub fn search_link(base: &str, query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let encoded = utf8_percent_encode(query, QUERY_COMPONENT);
    Some(link(base, &format!("/search?q={encoded}")))
}

/// Absolute URL for a site-relative path: origin + base + path.
pub fn absolute_url(site_url: &str, base: &str, path: &str) -> String {
    let origin = site_url.strip_suffix('/').unwrap_or(site_url);
    format!("{}{}", origin, link(base, path))
}
