//! End-to-end flow as the site generator drives it: load `site.toml` once,
//! resolve settings for a deploy target, then resolve covers for a manifest.

use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;
use whoami_site::collection::{Cover, load_entries, resolve_covers};
use whoami_site::config::load_config;
use whoami_site::deploy::{DeployInputs, DeploymentEnvironment};
use whoami_site::placeholder::classify;
use whoami_site::render::render_placeholder;
use whoami_site::settings::SiteSettings;

const SITE_TOML: &str = r#"
[site]
title = "Field Notes"
url = "https://notes.example.com"

[deploy]
repo_name = "field-notes"
account_name = "octocat"

[features]
comments = true
"#;

const MANIFEST: &str = r#"[
    {"collection": "blog", "slug": "astro-tips", "title": "Astro tips", "tags": ["Astro"], "cover": "/images/astro.png"},
    {"collection": "blog", "slug": "cf-guide", "title": "Cloudflare Pages Deployment Guide", "tags": []},
    {"collection": "projects", "slug": "site", "title": "", "tags": []}
]"#;

fn site_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("site.toml"), SITE_TOML).unwrap();
    fs::write(tmp.path().join("entries.json"), MANIFEST).unwrap();
    tmp
}

fn inputs_for(
    defaults: &whoami_site::config::DeployDefaults,
    vars: &[(&str, &str)],
) -> DeployInputs {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    DeployInputs::from_lookup(defaults, |key| map.get(key).cloned())
}

#[test]
fn github_pages_build() {
    let tmp = site_dir();
    let config = load_config(tmp.path()).unwrap();
    let inputs = inputs_for(&config.deploy, &[("DEPLOY_ENV", "DEMO_GITHUB_PAGES")]);
    let settings = SiteSettings::new(&config, &inputs);

    assert_eq!(settings.deploy_env, DeploymentEnvironment::GithubPages);
    assert_eq!(settings.url, "https://octocat.github.io");
    assert_eq!(settings.base, "/field-notes");
    assert_eq!(settings.title, "Field Notes");

    let entries = load_entries(&tmp.path().join("entries.json")).unwrap();
    let covers = resolve_covers(&entries, &settings.base);
    assert_eq!(covers.len(), 3);
    assert_eq!(
        covers[0].cover,
        Cover::Image {
            src: "/field-notes/images/astro.png".to_string()
        }
    );
    match &covers[1].cover {
        Cover::Placeholder(p) => assert_eq!(p.icon, "map"),
        other => panic!("expected placeholder, got {other:?}"),
    }
    match &covers[2].cover {
        Cover::Placeholder(p) => {
            assert_eq!(p.gradient, "from-blue-500 to-purple-600");
            assert_eq!(p.label, "技术文章");
        }
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn cloudflare_build_uses_configured_url() {
    let tmp = site_dir();
    let config = load_config(tmp.path()).unwrap();
    let inputs = inputs_for(&config.deploy, &[("DEPLOY_ENV", "MAIN_CLOUDFLARE")]);
    let settings = SiteSettings::new(&config, &inputs);

    assert_eq!(settings.url, "https://notes.example.com");
    assert_eq!(settings.base, "/");
    assert_eq!(
        settings.absolute_url("/blog/astro-tips"),
        "https://notes.example.com/blog/astro-tips"
    );
}

#[test]
fn local_build_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = load_config(tmp.path()).unwrap();
    let inputs = inputs_for(&config.deploy, &[]);
    let settings = SiteSettings::new(&config, &inputs);

    assert_eq!(settings.url, "http://localhost:4321");
    assert_eq!(settings.base, "/");
}

#[test]
fn settings_serialize_for_templates() {
    let tmp = site_dir();
    let config = load_config(tmp.path()).unwrap();
    let inputs = inputs_for(&config.deploy, &[("DEPLOY_ENV", "GITHUB_PAGES")]);
    let json = serde_json::to_value(SiteSettings::new(&config, &inputs)).unwrap();

    assert_eq!(json["base"], "/field-notes");
    assert_eq!(json["deploy_env"], "GITHUB_PAGES");
    assert_eq!(json["brand_title"], "Whoami");
}

#[test]
fn placeholder_fragment_for_untagged_post() {
    let html = render_placeholder(&classify(&[] as &[&str], "Kubernetes deploy checklist"))
        .into_string();
    assert!(html.contains("from-green-500 to-teal-600"));
    assert!(html.contains(r#"data-icon="cog""#));
    assert!(html.contains("配置部署"));
}
