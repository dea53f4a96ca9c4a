//! Deployment target resolution.
//!
//! The same content is published to several hosts. Each host serves the site
//! from a different origin and path prefix, and every generated link and asset
//! reference has to carry that prefix. This module turns the build
//! environment into a [`ResolvedSiteLocation`].
//!
//! ## Targets
//!
//! | Target | `url` | `base` |
//! |--------|-------|--------|
//! | GitHub Pages | `https://{account}.github.io` | `/{repo}` |
//! | Cloudflare Pages | `site.url` from config, verbatim | `/` |
//! | Local / anything else | `site.url`, or `http://localhost:4321` when empty | `/` |
//!
//! ## Environment variables
//!
//! ```text
//! DEPLOY_ENV        GITHUB_PAGES | CLOUDFLARE | LOCAL  (legacy: DEMO_GITHUB_PAGES, MAIN_CLOUDFLARE)
//! GITHUB_REPO_NAME  repository name → base path on GitHub Pages
//! GITHUB_ACTOR      account name    → subdomain on GitHub Pages
//! ```
//!
//! Unset or empty variables fall back to the `[deploy]` defaults in
//! `site.toml`. An unrecognized `DEPLOY_ENV` is treated as local, never as an
//! error.
//!
//! An empty repository name produces base `/` on GitHub Pages. That is the
//! plain result of `"/" + ""` and is left as-is.

use crate::config::DeployDefaults;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEPLOY_ENV_VAR: &str = "DEPLOY_ENV";
pub const REPO_NAME_VAR: &str = "GITHUB_REPO_NAME";
pub const ACCOUNT_NAME_VAR: &str = "GITHUB_ACTOR";

/// Dev server origin used when no site URL is configured.
pub const LOCAL_DEV_URL: &str = "http://localhost:4321";

/// Hosting platform selected at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeploymentEnvironment {
    GithubPages,
    Cloudflare,
    #[default]
    Local,
}

impl DeploymentEnvironment {
    /// Interpret a raw `DEPLOY_ENV` value. Total: unknown and absent values
    /// both select [`DeploymentEnvironment::Local`].
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some("GITHUB_PAGES" | "DEMO_GITHUB_PAGES") => Self::GithubPages,
            Some("CLOUDFLARE" | "MAIN_CLOUDFLARE") => Self::Cloudflare,
            _ => Self::Local,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GithubPages => "GITHUB_PAGES",
            Self::Cloudflare => "CLOUDFLARE",
            Self::Local => "LOCAL",
        }
    }
}

impl fmt::Display for DeploymentEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public origin and path prefix for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSiteLocation {
    /// Origin the site is served from, without a path.
    pub url: String,
    /// Path prefix: `/` or `/{segment}`.
    pub base: String,
}

/// Derive the public URL and base path for a deployment target.
///
/// Pure: the same four inputs always give the same location.
pub fn resolve_site_location(
    env: DeploymentEnvironment,
    repo_name: &str,
    account_name: &str,
    static_url: &str,
) -> ResolvedSiteLocation {
    match env {
        DeploymentEnvironment::GithubPages => ResolvedSiteLocation {
            url: format!("https://{account_name}.github.io"),
            base: format!("/{repo_name}"),
        },
        DeploymentEnvironment::Cloudflare => ResolvedSiteLocation {
            url: static_url.to_string(),
            base: "/".to_string(),
        },
        DeploymentEnvironment::Local => ResolvedSiteLocation {
            url: if static_url.is_empty() {
                LOCAL_DEV_URL.to_string()
            } else {
                static_url.to_string()
            },
            base: "/".to_string(),
        },
    }
}

/// Deployment inputs read from the build environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployInputs {
    pub env: DeploymentEnvironment,
    pub repo_name: String,
    pub account_name: String,
}

impl DeployInputs {
    /// Read inputs from the process environment.
    pub fn from_env(defaults: &DeployDefaults) -> Self {
        Self::from_lookup(defaults, |key| std::env::var(key).ok())
    }

    /// Read inputs through an arbitrary variable lookup.
    ///
    /// Empty values count as unset, matching how CI systems export
    /// variables that were declared but never filled in.
    pub fn from_lookup<F>(defaults: &DeployDefaults, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            env: DeploymentEnvironment::from_signal(var(DEPLOY_ENV_VAR).as_deref()),
            repo_name: var(REPO_NAME_VAR).unwrap_or_else(|| defaults.repo_name.clone()),
            account_name: var(ACCOUNT_NAME_VAR).unwrap_or_else(|| defaults.account_name.clone()),
        }
    }

    /// Resolve against the configured static site URL.
    pub fn resolve(&self, static_url: &str) -> ResolvedSiteLocation {
        resolve_site_location(self.env, &self.repo_name, &self.account_name, static_url)
    }
}
