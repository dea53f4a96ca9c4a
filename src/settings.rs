//! Per-build site settings.
//!
//! [`SiteSettings`] is the static `[site]` metadata with the deployed origin and
//! base path filled in. Build it once at startup and pass it by reference to
//! everything that writes links; it is never mutated afterwards.

use crate::config::{SiteConfig, SiteMeta};
use crate::deploy::{DeployInputs, DeploymentEnvironment, ResolvedSiteLocation};
use crate::paths;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSettings {
    pub title: String,
    pub description: String,
    /// Deployed origin (not the configured `site.url`).
    pub url: String,
    /// Deployed base path: `/` or `/{segment}`.
    pub base: String,
    pub author: String,
    pub email: String,
    pub logo: String,
    pub home_title: String,
    pub home_subtitle: String,
    pub blog_subtitle: String,
    pub project_subtitle: String,
    pub brand_title: String,
    /// Target the settings were resolved for.
    pub deploy_env: DeploymentEnvironment,
}

impl SiteSettings {
    pub fn new(config: &SiteConfig, inputs: &DeployInputs) -> Self {
        let location = inputs.resolve(&config.site.url);
        Self::from_parts(&config.site, location, inputs.env)
    }

    fn from_parts(
        site: &SiteMeta,
        location: ResolvedSiteLocation,
        deploy_env: DeploymentEnvironment,
    ) -> Self {
        Self {
            title: site.title.clone(),
            description: site.description.clone(),
            url: location.url,
            base: location.base,
            author: site.author.clone(),
            email: site.email.clone(),
            logo: site.logo.clone(),
            home_title: site.home_title.clone(),
            home_subtitle: site.home_subtitle.clone(),
            blog_subtitle: site.blog_subtitle.clone(),
            project_subtitle: site.project_subtitle.clone(),
            brand_title: site.brand_title.clone(),
            deploy_env,
        }
    }

    pub fn location(&self) -> ResolvedSiteLocation {
        ResolvedSiteLocation {
            url: self.url.clone(),
            base: self.base.clone(),
        }
    }

    /// Site-relative path joined with the base.
    pub fn link(&self, path: &str) -> String {
        paths::link(&self.base, path)
    }

    /// Absolute URL for a site-relative path.
    pub fn absolute_url(&self, path: &str) -> String {
        paths::absolute_url(&self.url, &self.base, path)
    }

    pub fn search_link(&self, query: &str) -> Option<String> {
        paths::search_link(&self.base, query)
    }
}
