//! CLI output formatting.
//!
//! Each command has a `format_*` function that returns display lines and a
//! `print_*` wrapper that writes them to stdout. Format functions are pure so
//! the exact output is covered by unit tests.
//!
//! ## Resolve
//!
//! ```text
//! Target: GITHUB_PAGES
//!     URL: https://alice.github.io
//!     Base: /myrepo
//! ```
//!
//! ## Covers
//!
//! ```text
//! Blog
//! 001 astro-tips → image /myrepo/images/astro.png
//! 002 weekly-notes → placeholder document (技术文章) from-teal-500 to-green-600
//!
//! Projects
//! 001 whoami → placeholder collection (项目展示) from-gray-500 to-slate-600
//!
//! 3 entries, 1 image, 2 placeholders
//! ```

use crate::collection::{Collection, Cover, EntryCover};
use crate::config::SiteConfig;
use crate::placeholder::PlaceholderDescriptor;
use crate::settings::SiteSettings;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

fn collection_heading(collection: Collection) -> &'static str {
    match collection {
        Collection::Blog => "Blog",
        Collection::Projects => "Projects",
    }
}

fn placeholder_summary(p: &PlaceholderDescriptor) -> String {
    format!("{} ({}) {}", p.icon, p.label, p.gradient)
}

// ============================================================================
// resolve
// ============================================================================

/// Format the resolved deploy location.
pub fn format_settings(settings: &SiteSettings) -> Vec<String> {
    vec![
        format!("Target: {}", settings.deploy_env),
        format!("{}URL: {}", indent(1), settings.url),
        format!("{}Base: {}", indent(1), settings.base),
    ]
}

pub fn print_settings(settings: &SiteSettings) {
    for line in format_settings(settings) {
        println!("{}", line);
    }
}

// ============================================================================
// placeholder
// ============================================================================

pub fn format_placeholder(p: &PlaceholderDescriptor) -> Vec<String> {
    vec![
        format!("Gradient: {}", p.gradient),
        format!("Icon: {}", p.icon),
        format!("Label: {}", p.label),
    ]
}

pub fn print_placeholder(p: &PlaceholderDescriptor) {
    for line in format_placeholder(p) {
        println!("{}", line);
    }
}

// ============================================================================
// covers
// ============================================================================

/// Format resolved covers grouped by collection, in manifest order within
/// each group.
pub fn format_covers(covers: &[EntryCover]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut images = 0;

    for collection in [Collection::Blog, Collection::Projects] {
        let group: Vec<&EntryCover> = covers
            .iter()
            .filter(|c| c.collection == collection)
            .collect();
        if group.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(collection_heading(collection).to_string());
        for (i, c) in group.iter().enumerate() {
            let detail = match &c.cover {
                Cover::Image { src } => {
                    images += 1;
                    format!("image {}", src)
                }
                Cover::Placeholder(p) => format!("placeholder {}", placeholder_summary(p)),
            };
            lines.push(format!("{} {} \u{2192} {}", format_index(i + 1), c.slug, detail));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "{}, {}, {}",
        count(covers.len(), "entry", "entries"),
        count(images, "image", "images"),
        count(covers.len() - images, "placeholder", "placeholders"),
    ));
    lines
}

pub fn print_covers(covers: &[EntryCover]) {
    for line in format_covers(covers) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

/// Summarize a loaded config for the `check` command.
pub fn format_config_summary(config: &SiteConfig, config_found: bool) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Config".to_string());
    if config_found {
        lines.push(format!("{}{}", indent(1), crate::config::CONFIG_FILENAME));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }
    lines.push(format!("{}Title: {}", indent(1), config.site.title));
    let url = if config.site.url.is_empty() {
        "(unset)"
    } else {
        config.site.url.as_str()
    };
    lines.push(format!("{}URL: {}", indent(1), url));

    let f = &config.features;
    let enabled: Vec<&str> = [
        ("dark_mode", f.dark_mode),
        ("table_of_contents", f.table_of_contents),
        ("reading_time", f.reading_time),
        ("search", f.search),
        ("comments", f.comments),
    ]
    .into_iter()
    .filter_map(|(name, on)| on.then_some(name))
    .collect();
    lines.push(format!("{}Features: {}", indent(1), enabled.join(", ")));

    lines.push(String::new());
    lines.push("Navigation".to_string());
    for (i, item) in config.navigation.header.iter().enumerate() {
        lines.push(format!(
            "{}{} {} \u{2192} {}",
            indent(1),
            format_index(i + 1),
            item.text,
            item.href
        ));
    }
    lines
}

pub fn print_config_summary(config: &SiteConfig, config_found: bool) {
    for line in format_config_summary(config, config_found) {
        println!("{}", line);
    }
}
