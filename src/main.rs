use clap::{Parser, Subcommand};
use std::path::PathBuf;
use whoami_site::collection;
use whoami_site::config::{self, SiteConfig};
use whoami_site::deploy::DeployInputs;
use whoami_site::output;
use whoami_site::placeholder;
use whoami_site::render;
use whoami_site::seo::{self, BreadcrumbItem};
use whoami_site::settings::SiteSettings;

#[derive(Parser)]
#[command(name = "whoami-site")]
#[command(about = "Deploy URL/base resolution and cover placeholders for a static blog")]
#[command(long_about = "\
Deploy URL/base resolution and cover placeholders for a static blog

Site metadata lives in site.toml in the source directory. The deploy target
comes from the environment:

  DEPLOY_ENV        GITHUB_PAGES | CLOUDFLARE | LOCAL (default)
  GITHUB_REPO_NAME  repository name  → base path on GitHub Pages
  GITHUB_ACTOR      account name     → https://<account>.github.io

Resolution:
  GITHUB_PAGES  url = https://<account>.github.io   base = /<repo>
  CLOUDFLARE    url = site.url                      base = /
  LOCAL         url = site.url or localhost:4321    base = /

Run 'whoami-site gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing site.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the deployed site URL and base path
    Resolve {
        /// Print the full settings object as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the cover placeholder for a title and tags
    Placeholder {
        /// Tag, in priority order (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Print an HTML fragment instead of plain lines
        #[arg(long)]
        html: bool,
        /// Content title
        #[arg(default_value = "")]
        title: String,
    },
    /// Resolve covers for every entry in a content manifest
    Covers {
        /// JSON manifest of content entries
        manifest: PathBuf,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print breadcrumb JSON-LD for NAME=URL steps
    Breadcrumb {
        /// Trail steps in order, each as NAME=URL
        steps: Vec<String>,
        /// Wrap the JSON in a <script type="application/ld+json"> tag
        #[arg(long)]
        html: bool,
    },
    /// Validate site.toml without resolving anything
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve { json } => {
            let settings = load_settings(&cli.source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                output::print_settings(&settings);
            }
        }
        Command::Placeholder { tags, html, title } => {
            let descriptor = placeholder::classify(tags.as_slice(), &title);
            if html {
                println!("{}", render::render_placeholder(&descriptor).into_string());
            } else {
                output::print_placeholder(&descriptor);
            }
        }
        Command::Covers { manifest, json } => {
            let config = config::load_config(&cli.source)?;
            let settings = settings_from(&config);
            init_thread_pool(&config.processing);
            let entries = collection::load_entries(&manifest)?;
            if !json {
                println!(
                    "==> Resolving {} entries (base {})",
                    entries.len(),
                    settings.base
                );
            }
            let covers = collection::resolve_covers(&entries, &settings.base);
            if json {
                println!("{}", serde_json::to_string_pretty(&covers)?);
            } else {
                output::print_covers(&covers);
            }
        }
        Command::Breadcrumb { steps, html } => {
            let items = steps
                .iter()
                .map(|s| parse_step(s))
                .collect::<Result<Vec<_>, _>>()?;
            if html {
                println!("{}", render::breadcrumb_script(&items).into_string());
            } else {
                println!("{}", seo::breadcrumb_schema(&items));
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            let found = cli.source.join(config::CONFIG_FILENAME).exists();
            output::print_config_summary(&config, found);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `site.toml` and resolve it against the process environment.
fn load_settings(source: &std::path::Path) -> Result<SiteSettings, config::ConfigError> {
    let config = config::load_config(source)?;
    Ok(settings_from(&config))
}

fn settings_from(config: &SiteConfig) -> SiteSettings {
    let inputs = DeployInputs::from_env(&config.deploy);
    SiteSettings::new(config, &inputs)
}

/// Split a `NAME=URL` breadcrumb step on the first `=`.
fn parse_step(step: &str) -> Result<BreadcrumbItem, String> {
    match step.split_once('=') {
        Some((name, url)) if !name.is_empty() => Ok(BreadcrumbItem::new(name, url)),
        _ => Err(format!("breadcrumb step '{step}' must be NAME=URL")),
    }
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; the user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
