//! Cover placeholders for content without an image.
//!
//! Blog posts and projects may omit a cover image. Instead of a blank box the
//! site shows a gradient background with an icon and a short label. The choice
//! is fully deterministic so the same post looks the same on every build.
//!
//! ## Resolution order
//!
//! The first tier that produces a match wins:
//!
//! 1. **Tags**: each tag, in the order given, is lowercased and trimmed and
//!    looked up in [`TAG_TABLE`]. The first hit is returned as-is. Tag order
//!    matters: `["react", "astro"]` and `["astro", "react"]` differ.
//! 2. **Title keywords**: the lowercased title is checked for each table key as
//!    a substring, walking [`TAG_TABLE`] in declaration order.
//! 3. **Hash fallback**: the gradient is picked from [`GRADIENTS`] by
//!    [`hash_title`] of the raw title; icon and label come from a small keyword
//!    scan ([`FALLBACK_GROUPS`]), else the generic article defaults.
//!
//! ## Table order is part of the contract
//!
//! Because tier 2 is substring containment, a title can contain several keys
//! ("Cloudflare Pages Deployment Guide" contains `guide`, `cloudflare` and
//! `deployment`). Declaration order decides: technology keys first, then
//! content types, then deployment topics, then the generic `project` and
//! `article` keys. That title therefore resolves to the `guide` entry.
//!
//! ```text
//! classify(&[], "")  →  hash 0  →  from-blue-500 to-purple-600 / document / 技术文章
//! ```

use serde::{Deserialize, Serialize};

/// Visual fallback for a content item: gradient classes, icon name, label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderDescriptor {
    /// Tailwind gradient stop classes, e.g. `from-blue-500 to-purple-600`.
    pub gradient: String,
    /// Logical icon name (see [`icon_asset_name`] for the asset name).
    pub icon: String,
    /// Short human-readable label.
    pub label: String,
}

/// A static table entry. Borrowed form of [`PlaceholderDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStyle {
    pub icon: &'static str,
    pub gradient: &'static str,
    pub label: &'static str,
}

impl TagStyle {
    const fn new(icon: &'static str, gradient: &'static str, label: &'static str) -> Self {
        Self {
            icon,
            gradient,
            label,
        }
    }

    pub fn to_descriptor(self) -> PlaceholderDescriptor {
        PlaceholderDescriptor {
            gradient: self.gradient.to_string(),
            icon: self.icon.to_string(),
            label: self.label.to_string(),
        }
    }
}

/// Gradient palette for the hash fallback. Index = `hash % len`.
pub const GRADIENTS: [&str; 10] = [
    "from-blue-500 to-purple-600",
    "from-green-500 to-teal-600",
    "from-orange-500 to-red-600",
    "from-pink-500 to-rose-600",
    "from-indigo-500 to-blue-600",
    "from-purple-500 to-indigo-600",
    "from-teal-500 to-green-600",
    "from-yellow-500 to-orange-600",
    "from-cyan-500 to-blue-600",
    "from-emerald-500 to-teal-600",
];

/// Normalized tag → style. Keys are lowercase and trimmed.
///
/// Order is significant for title matching; see the module docs.
pub const TAG_TABLE: &[(&str, TagStyle)] = &[
    // Tech stack
    ("astro", TagStyle::new("rocket", "from-orange-500 to-red-600", "Astro框架")),
    ("react", TagStyle::new("component", "from-blue-500 to-cyan-600", "React应用")),
    ("typescript", TagStyle::new("code", "from-blue-600 to-indigo-700", "TypeScript")),
    ("javascript", TagStyle::new("code", "from-yellow-500 to-orange-600", "JavaScript")),
    ("tailwind css", TagStyle::new("palette", "from-teal-500 to-blue-600", "TailwindCSS")),
    ("tailwind-css", TagStyle::new("palette", "from-teal-500 to-blue-600", "TailwindCSS")),
    // Content types
    ("blog", TagStyle::new("document-text", "from-green-500 to-teal-600", "博客文章")),
    ("tutorial", TagStyle::new("academic-cap", "from-purple-500 to-indigo-600", "教程指南")),
    ("guide", TagStyle::new("map", "from-emerald-500 to-green-600", "使用指南")),
    ("documentation", TagStyle::new("book-open", "from-blue-500 to-purple-600", "技术文档")),
    // Deployment
    ("cloudflare", TagStyle::new("cloud", "from-orange-500 to-yellow-500", "Cloudflare")),
    ("deployment", TagStyle::new("server", "from-indigo-500 to-purple-600", "部署配置")),
    ("部署", TagStyle::new("server", "from-indigo-500 to-purple-600", "部署配置")),
    ("静态网站", TagStyle::new("globe-alt", "from-green-500 to-blue-600", "静态网站")),
    ("域名配置", TagStyle::new("link", "from-purple-500 to-pink-600", "域名配置")),
    ("性能优化", TagStyle::new("lightning-bolt", "from-yellow-500 to-red-600", "性能优化")),
    // Generic
    ("project", TagStyle::new("collection", "from-gray-500 to-slate-600", "项目展示")),
    ("article", TagStyle::new("document", "from-slate-500 to-gray-600", "技术文章")),
];

/// Keyword groups for the hash fallback icon. Checked in order against the
/// lowercased title; first group with any keyword present wins.
pub const FALLBACK_GROUPS: &[(&[&str], &str, &str)] = &[
    (&["项目", "project"], "collection", "项目展示"),
    (&["指南", "guide", "教程"], "map", "指南教程"),
    (&["配置", "部署", "deploy"], "cog", "配置部署"),
    (&["开发", "dev", "代码"], "code", "开发技术"),
];

pub const DEFAULT_ICON: &str = "document";
pub const DEFAULT_LABEL: &str = "技术文章";

/// Look up a single tag in [`TAG_TABLE`], ignoring case and surrounding whitespace.
pub fn lookup_tag(tag: &str) -> Option<TagStyle> {
    let normalized = tag.trim().to_lowercase();
    TAG_TABLE
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, style)| *style)
}

/// 32-bit polynomial rolling hash (`h * 31 + unit`) over UTF-16 code units.
///
/// Wraps to `i32` at every step and returns the absolute value, so
/// `i32::MIN` maps to `2^31` rather than overflowing.
pub fn hash_title(title: &str) -> u32 {
    let hash = title
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    hash.unsigned_abs()
}

/// Derive the placeholder for a content item from its tags and title.
///
/// Total: empty tags and an empty title are valid and resolve through the
/// hash fallback.
pub fn classify<S: AsRef<str>>(tags: &[S], title: &str) -> PlaceholderDescriptor {
    if let Some(style) = tags.iter().find_map(|t| lookup_tag(t.as_ref())) {
        return style.to_descriptor();
    }

    let title_lower = title.to_lowercase();
    if let Some((_, style)) = TAG_TABLE
        .iter()
        .find(|(key, _)| title_lower.contains(key))
    {
        return style.to_descriptor();
    }

    let gradient = GRADIENTS[hash_title(title) as usize % GRADIENTS.len()];
    let (icon, label) = FALLBACK_GROUPS
        .iter()
        .find(|(keywords, _, _)| keywords.iter().any(|k| title_lower.contains(k)))
        .map(|(_, icon, label)| (*icon, *label))
        .unwrap_or((DEFAULT_ICON, DEFAULT_LABEL));

    PlaceholderDescriptor {
        gradient: gradient.to_string(),
        icon: icon.to_string(),
        label: label.to_string(),
    }
}

/// Map a logical icon name to the icon-set asset name.
///
/// Most icons share their name with the asset; a couple were renamed in the
/// icon set. Unknown names pass through unchanged.
pub fn icon_asset_name(icon: &str) -> &str {
    match icon {
        "component" => "cube",
        "palette" => "color-swatch",
        other => other,
    }
}
