use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use techlog_prerender::telemetry::{env_filter, get_subscriber, init_subscriber, log_error};
use techlog_prerender::{PrerenderOptions, prerender};
use techlog_ui::SiteConfig;

/// Prerender the blog into static HTML documents.
///
/// Site settings come from the environment (or a .env file in the working
/// directory): SITE_TITLE, SITE_DESCRIPTION, SITE_LANG,
/// SITE_VERIFICATION_TOKEN, THEME_DEFAULT, ANALYTICS_MODE and friends.
/// Anything unset keeps the deployed site's value.
///
/// Example, after `trunk build --release` in ui/:
/// cargo run -p techlog-prerender -- --out-dir ui/dist --template ui/dist/index.html
#[derive(Parser, Debug)]
#[command(name = "techlog-prerender", version, about)]
struct Cli {
    /// Directory to write the documents to
    #[arg(long, default_value = "ui/dist")]
    out_dir: PathBuf,

    /// Bundler output whose <head> tags are copied into every page
    #[arg(long)]
    template: Option<PathBuf>,

    /// Write plain markup without hydration markers
    #[arg(long, default_value_t = false)]
    no_hydrate: bool,

    /// Log filter used when PRERENDER_LOG is unset
    #[arg(long, default_value = "info")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Silently ignored if the file doesn't exist
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_subscriber(get_subscriber(env_filter(&cli.log_filter)));

    let config = SiteConfig::from_env().context("invalid site configuration")?;
    let options = PrerenderOptions {
        out_dir: cli.out_dir,
        template: cli.template,
        hydratable: !cli.no_hydrate,
    };

    let written = match prerender(&config, &options).await {
        Ok(written) => written,
        Err(e) => {
            log_error(e);
            std::process::exit(1);
        }
    };
    for path in &written {
        println!("{}", path.display());
    }
    tracing::info!(pages = written.len(), "prerender finished");
    Ok(())
}
