//! # whoami-site
//!
//! Build-time core for a statically generated blog and project showcase.
//! The static site generator owns content rendering, styling and asset
//! pipelines; this crate owns the small pieces of logic that decide *where*
//! the site lives and *what* a post without a cover image looks like.
//!
//! # Two Pure Cores
//!
//! ```text
//! DEPLOY_ENV + site.toml  →  deploy::resolve_site_location  →  { url, base }
//! tags + title            →  placeholder::classify          →  { gradient, icon, label }
//! ```
//!
//! Both are total functions: every input, including empty strings and
//! unrecognized environment values, maps to a documented output. Neither
//! touches the filesystem or the environment; callers read inputs once and
//! pass them in.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading, layering over stock defaults, validation |
//! | [`deploy`] | Deployment target parsing and URL/base resolution |
//! | [`settings`] | Immutable per-build settings: static metadata + resolved location |
//! | [`paths`] | Base-path-aware links, search links, absolute URLs |
//! | [`placeholder`] | Deterministic cover placeholders |
//! | [`seo`] | Breadcrumb JSON-LD |
//! | [`collection`] | Cover resolution for a content manifest |
//! | [`render`] | Maud fragments for placeholders and JSON-LD |
//! | [`types`] | Shared serialized types (`NavItem`, `Navigation`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Settings Are a Value, Not a Global
//!
//! The deployed URL and base path are computed once at startup into a
//! [`settings::SiteSettings`] and handed to consumers by reference. Nothing
//! reads `DEPLOY_ENV` after that point, so tests can build settings for any
//! target side by side without touching the process environment.
//!
//! ## Fixed Table Order
//!
//! Placeholder title matching is substring containment over a lookup table.
//! A title can contain several keys, so the table is an ordered slice rather
//! than a map and its order is part of the output contract. See
//! [`placeholder`] for the exact order.

pub mod collection;
pub mod config;
pub mod deploy;
pub mod output;
pub mod paths;
pub mod placeholder;
pub mod render;
pub mod seo;
pub mod settings;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
