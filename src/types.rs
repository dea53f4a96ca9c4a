//! Shared types used across modules.
//!
//! These are serialized both in `site.toml` and in the JSON the CLI emits, so
//! field names stay stable.

use serde::{Deserialize, Serialize};

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    /// Link text.
    pub text: String,
    /// Site-relative target, joined with the base path at render time.
    pub href: String,
}

/// Header and footer navigation lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Navigation {
    pub header: Vec<NavItem>,
    pub footer: Vec<NavItem>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            header: crate::config::default_header_nav(),
            footer: Vec::new(),
        }
    }
}
