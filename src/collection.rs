//! Cover resolution for content collections.
//!
//! The site generator hands over a manifest of content entries (blog posts and
//! projects) as JSON. Each entry either names its own cover image or gets a
//! generated placeholder. The result feeds card grids and list pages.
//!
//! ## Manifest format
//!
//! ```json
//! [
//!   { "collection": "blog", "slug": "astro-tips", "title": "Astro tips",
//!     "tags": ["Astro"], "cover": "/images/astro.png" },
//!   { "collection": "projects", "slug": "whoami", "title": "This site",
//!     "tags": [] }
//! ]
//! ```
//!
//! Site-relative covers are joined with the base path; absolute `http(s)://`
//! covers are kept as-is. Entries are classified in parallel and returned in
//! manifest order.

use crate::paths;
use crate::placeholder::{PlaceholderDescriptor, classify};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Blog,
    Projects,
}

/// A content entry as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub collection: Collection,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

/// What to show as an entry's cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Cover {
    Image { src: String },
    Placeholder(PlaceholderDescriptor),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryCover {
    pub collection: Collection,
    pub slug: String,
    pub cover: Cover,
}

/// Read a JSON manifest of content entries.
pub fn load_entries(path: &Path) -> Result<Vec<ContentEntry>, CollectionError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Resolve the cover for a single entry.
pub fn resolve_cover(entry: &ContentEntry, base: &str) -> Cover {
    match entry.cover.as_deref().map(str::trim) {
        Some(src) if !src.is_empty() => Cover::Image {
            src: cover_src(src, base),
        },
        _ => Cover::Placeholder(classify(entry.tags.as_slice(), &entry.title)),
    }
}

fn cover_src(src: &str, base: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        src.to_string()
    } else {
        paths::link(base, src)
    }
}

/// Resolve covers for all entries in parallel, preserving input order.
pub fn resolve_covers(entries: &[ContentEntry], base: &str) -> Vec<EntryCover> {
    entries
        .par_iter()
        .map(|entry| EntryCover {
            collection: entry.collection,
            slug: entry.slug.clone(),
            cover: resolve_cover(entry, base),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{entry, write_manifest};
    use tempfile::TempDir;

    #[test]
    fn explicit_cover_gets_base_prefix() {
        let e = entry(Collection::Blog, "a", "Anything", &[], Some("/images/a.png"));
        assert_eq!(
            resolve_cover(&e, "/repo"),
            Cover::Image {
                src: "/repo/images/a.png".to_string()
            }
        );
    }

    #[test]
    fn absolute_cover_is_untouched() {
        let e = entry(
            Collection::Projects,
            "p",
            "P",
            &[],
            Some("https://cdn.example.com/p.png"),
        );
        assert_eq!(
            resolve_cover(&e, "/repo"),
            Cover::Image {
                src: "https://cdn.example.com/p.png".to_string()
            }
        );
    }

    #[test]
    fn blank_cover_falls_back_to_placeholder() {
        let e = entry(Collection::Blog, "a", "", &["astro"], Some("  "));
        match resolve_cover(&e, "/") {
            Cover::Placeholder(p) => assert_eq!(p.icon, "rocket"),
            other => panic!("expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn missing_cover_uses_classifier() {
        let e = entry(Collection::Blog, "n", "Weekly notes", &[], None);
        assert_eq!(
            resolve_cover(&e, "/"),
            Cover::Placeholder(classify(&[] as &[&str], "Weekly notes"))
        );
    }

    #[test]
    fn resolve_covers_preserves_order() {
        let entries: Vec<ContentEntry> = (0..200)
            .map(|i| {
                entry(
                    Collection::Blog,
                    &format!("post-{i}"),
                    &format!("Post {i}"),
                    &[],
                    None,
                )
            })
            .collect();
        let covers = resolve_covers(&entries, "/");
        let slugs: Vec<&str> = covers.iter().map(|c| c.slug.as_str()).collect();
        let expected: Vec<String> = (0..200).map(|i| format!("post-{i}")).collect();
        assert_eq!(slugs, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn load_entries_reads_manifest() {
        let tmp = TempDir::new().unwrap();
        let path = write_manifest(
            tmp.path(),
            r#"[
                {"collection": "blog", "slug": "a", "title": "A", "tags": ["React"], "cover": "/a.png"},
                {"collection": "projects", "slug": "b", "title": "B"}
            ]"#,
        );
        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tags, vec!["React"]);
        assert_eq!(entries[1].collection, Collection::Projects);
        assert!(entries[1].tags.is_empty());
        assert_eq!(entries[1].cover, None);
    }

    #[test]
    fn load_entries_rejects_unknown_collection() {
        let tmp = TempDir::new().unwrap();
        let path = write_manifest(
            tmp.path(),
            r#"[{"collection": "notes", "slug": "a", "title": "A"}]"#,
        );
        assert!(matches!(load_entries(&path), Err(CollectionError::Json(_))));
    }

    #[test]
    fn load_entries_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = load_entries(&tmp.path().join("nope.json"));
        assert!(matches!(result, Err(CollectionError::Io(_))));
    }

    #[test]
    fn cover_serializes_with_kind_tag() {
        let json = serde_json::to_value(Cover::Image {
            src: "/a.png".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "image");
        assert_eq!(json["src"], "/a.png");

        let json = serde_json::to_value(Cover::Placeholder(classify(&["blog"], ""))).unwrap();
        assert_eq!(json["kind"], "placeholder");
        assert_eq!(json["icon"], "document-text");
    }
}
