//! Shared test utilities.
//!
//! Fixture writers for `site.toml` and content manifests, an environment
//! lookup that never touches the real process environment, and a compact
//! entry constructor.
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let inputs = DeployInputs::from_lookup(
//!     &DeployDefaults::default(),
//!     env_lookup(&[("DEPLOY_ENV", "CLOUDFLARE")]),
//! );
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::collection::{Collection, ContentEntry};
use crate::config::CONFIG_FILENAME;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `site.toml` into `dir`.
pub fn write_site_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILENAME);
    std::fs::write(&path, content).unwrap();
    path
}

/// Write a content manifest (`entries.json`) into `dir`.
pub fn write_manifest(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("entries.json");
    std::fs::write(&path, json).unwrap();
    path
}

// =========================================================================
// Environment
// =========================================================================

/// Variable lookup backed by a fixed set of pairs. Missing keys are `None`.
pub fn env_lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// =========================================================================
// Entries
// =========================================================================

pub fn entry(
    collection: Collection,
    slug: &str,
    title: &str,
    tags: &[&str],
    cover: Option<&str>,
) -> ContentEntry {
    ContentEntry {
        collection,
        slug: slug.to_string(),
        title: title.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        cover: cover.map(String::from),
    }
}
