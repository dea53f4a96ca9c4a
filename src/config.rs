//! Site configuration module.
//!
//! Handles loading, validating, and layering `site.toml`. The file holds the
//! static metadata for the whole site: titles, author, canonical URL, comment
//! and analytics settings, feature switches and navigation. It is read once at
//! the start of a build and treated as read-only afterwards.
//!
//! ## Layering
//!
//! Stock defaults are serialized to a TOML table and the user's `site.toml` is
//! merged on top key by key ([`merge_toml`]). A sparse file only needs the
//! values it changes:
//!
//! ```toml
//! [site]
//! title = "My Notes"
//! url = "https://notes.example.com"
//! ```
//!
//! Arrays (navigation lists) are replaced wholesale, not merged.
//!
//! ## Configuration Options
//!
//! Run `whoami-site gen-config` for the full commented file; see
//! [`stock_config_toml`]. Sections:
//!
//! | Section | Purpose |
//! |---------|---------|
//! | `[site]` | Title, description, canonical URL, author, logo, section subtitles |
//! | `[deploy]` | Fallback repository/account names for GitHub Pages builds |
//! | `[giscus]` | Comment widget settings (passed through to templates) |
//! | `[seo.open_graph]`, `[seo.analytics]` | Social card defaults, analytics IDs |
//! | `[social]` | Profile handles |
//! | `[features]` | Feature switches |
//! | `[navigation]` | Header and footer links |
//! | `[processing]` | Worker count for batch cover resolution |
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::{NavItem, Navigation};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the source directory.
pub const CONFIG_FILENAME: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Static site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity and section subtitles.
    pub site: SiteMeta,
    /// Fallbacks for GitHub Pages deploys.
    pub deploy: DeployDefaults,
    /// Giscus comment widget settings.
    pub giscus: GiscusConfig,
    /// Open Graph and analytics settings.
    pub seo: SeoConfig,
    /// Social profile handles. Empty string means not set.
    pub social: SocialConfig,
    /// Feature switches.
    pub features: FeaturesConfig,
    /// Header and footer navigation.
    pub navigation: Navigation,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if !self.site.url.is_empty()
            && !(self.site.url.starts_with("http://") || self.site.url.starts_with("https://"))
        {
            return Err(ConfigError::Validation(format!(
                "site.url must start with http:// or https:// (got '{}')",
                self.site.url
            )));
        }
        if !self.site.logo.is_empty() && !self.site.logo.starts_with('/') {
            return Err(ConfigError::Validation(
                "site.logo must be an absolute path starting with '/'".into(),
            ));
        }
        if self.deploy.repo_name.contains('/') {
            return Err(ConfigError::Validation(
                "deploy.repo_name must be a single path segment".into(),
            ));
        }
        let og = &self.seo.open_graph;
        if og.default_image_width == 0 || og.default_image_height == 0 {
            return Err(ConfigError::Validation(
                "seo.open_graph default image dimensions must be non-zero".into(),
            ));
        }
        let links = self
            .navigation
            .header
            .iter()
            .chain(self.navigation.footer.iter());
        for item in links {
            if item.href.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "navigation item '{}' has an empty href",
                    item.text
                )));
            }
        }
        Ok(())
    }

    /// Check whether a feature switch is on.
    pub fn is_feature_enabled(&self, feature: Feature) -> bool {
        let f = &self.features;
        match feature {
            Feature::DarkMode => f.dark_mode,
            Feature::TableOfContents => f.table_of_contents,
            Feature::ReadingTime => f.reading_time,
            Feature::Search => f.search,
            Feature::Comments => f.comments,
        }
    }
}

/// Site identity. `url` is the configured canonical origin; the deployed
/// origin may differ (see [`crate::deploy`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    /// Canonical origin. May be empty during local development.
    pub url: String,
    pub author: String,
    pub email: String,
    /// Logo path relative to the site root.
    pub logo: String,
    pub home_title: String,
    pub home_subtitle: String,
    pub blog_subtitle: String,
    pub project_subtitle: String,
    pub brand_title: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Whoami".to_string(),
            description: "A personal blog and project showcase".to_string(),
            url: String::new(),
            author: String::new(),
            email: String::new(),
            logo: "/images/logo.svg".to_string(),
            home_title: "Hi, I'm glad you're here".to_string(),
            home_subtitle: "Notes on software, deployment and the craft".to_string(),
            blog_subtitle: "Articles and notes".to_string(),
            project_subtitle: "Things I've built".to_string(),
            brand_title: "Whoami".to_string(),
        }
    }
}

/// Fallback names used when `GITHUB_REPO_NAME` / `GITHUB_ACTOR` are unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployDefaults {
    /// Repository name; becomes the base path on GitHub Pages.
    pub repo_name: String,
    /// Account name; becomes the `*.github.io` subdomain.
    pub account_name: String,
}

impl Default for DeployDefaults {
    fn default() -> Self {
        Self {
            repo_name: "product_whoami".to_string(),
            account_name: "copyboy".to_string(),
        }
    }
}

/// Giscus comment widget settings, passed through verbatim to templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GiscusConfig {
    pub enabled: bool,
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    pub mapping: String,
    pub strict: String,
    pub theme: String,
    pub reactions_enabled: bool,
    pub emit_metadata: bool,
    pub input_position: String,
    pub lang: String,
    pub loading: String,
}

impl Default for GiscusConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            repo: String::new(),
            repo_id: String::new(),
            category: String::new(),
            category_id: String::new(),
            mapping: "pathname".to_string(),
            strict: "0".to_string(),
            theme: "preferred_color_scheme".to_string(),
            reactions_enabled: true,
            emit_metadata: false,
            input_position: "bottom".to_string(),
            lang: "zh-CN".to_string(),
            loading: "lazy".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoConfig {
    pub open_graph: OpenGraphConfig,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenGraphConfig {
    pub twitter_creator: String,
    pub default_image_width: u32,
    pub default_image_height: u32,
}

impl Default for OpenGraphConfig {
    fn default() -> Self {
        Self {
            twitter_creator: String::new(),
            default_image_width: 1200,
            default_image_height: 630,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    pub google_analytics_id: String,
    pub baidu_analytics_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialConfig {
    pub twitter: String,
    pub github: String,
    pub linkedin: String,
}

/// Feature switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturesConfig {
    pub dark_mode: bool,
    pub table_of_contents: bool,
    pub reading_time: bool,
    pub search: bool,
    pub comments: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            table_of_contents: true,
            reading_time: true,
            search: true,
            comments: false,
        }
    }
}

/// Named feature switch, for [`SiteConfig::is_feature_enabled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    DarkMode,
    TableOfContents,
    ReadingTime,
    Search,
    Comments,
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel workers for batch cover resolution.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Format a page title as `"{page} | {site title}"`.
pub fn format_page_title(page_title: &str, site: &SiteMeta) -> String {
    format!("{} | {}", page_title, site.title)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but is
/// not valid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Configuration
# ==================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
title = "Whoami"
description = "A personal blog and project showcase"
# Canonical origin, e.g. "https://example.com". Used as-is on Cloudflare;
# left empty, local builds fall back to http://localhost:4321.
url = ""
author = ""
email = ""
# Absolute path from the site root.
logo = "/images/logo.svg"
home_title = "Hi, I'm glad you're here"
home_subtitle = "Notes on software, deployment and the craft"
blog_subtitle = "Articles and notes"
project_subtitle = "Things I've built"
brand_title = "Whoami"

# ---------------------------------------------------------------------------
# Deployment
# ---------------------------------------------------------------------------
# DEPLOY_ENV selects the target: GITHUB_PAGES, CLOUDFLARE or LOCAL.
# On GitHub Pages the site lives at https://<account>.github.io/<repo>.
# GITHUB_ACTOR and GITHUB_REPO_NAME override the values below.
[deploy]
repo_name = "product_whoami"
account_name = "copyboy"

# ---------------------------------------------------------------------------
# Comments (giscus)
# ---------------------------------------------------------------------------
[giscus]
enabled = false
repo = ""
repo_id = ""
category = ""
category_id = ""
mapping = "pathname"
strict = "0"
theme = "preferred_color_scheme"
reactions_enabled = true
emit_metadata = false
input_position = "bottom"
lang = "zh-CN"
loading = "lazy"

# ---------------------------------------------------------------------------
# SEO
# ---------------------------------------------------------------------------
[seo.open_graph]
twitter_creator = ""
default_image_width = 1200
default_image_height = 630

[seo.analytics]
google_analytics_id = ""
baidu_analytics_id = ""

# ---------------------------------------------------------------------------
# Social profiles (empty = not shown)
# ---------------------------------------------------------------------------
[social]
twitter = ""
github = ""
linkedin = ""

# ---------------------------------------------------------------------------
# Feature switches
# ---------------------------------------------------------------------------
[features]
dark_mode = true
table_of_contents = true
reading_time = true
search = true
comments = false

# ---------------------------------------------------------------------------
# Navigation (lists replace the defaults entirely)
# ---------------------------------------------------------------------------
[navigation]
header = [
    { text = "Home", href = "/" },
    { text = "Blog", href = "/blog" },
    { text = "Projects", href = "/projects" },
    { text = "About", href = "/about" },
]
footer = []

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel workers for batch cover resolution.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Default header navigation, mirrored in [`stock_config_toml`].
pub(crate) fn default_header_nav() -> Vec<NavItem> {
    [
        ("Home", "/"),
        ("Blog", "/blog"),
        ("Projects", "/projects"),
        ("About", "/about"),
    ]
    .into_iter()
    .map(|(text, href)| NavItem {
        text: text.to_string(),
        href: href.to_string(),
    })
    .collect()
}
