//! Writes every static route of the site as a complete HTML document.

pub mod telemetry;

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use techlog_ui::ssr::{RenderOptions, render_page};
use techlog_ui::{Route, SiteConfig};
use yew_router::Routable;

pub struct PrerenderOptions {
    /// Directory the documents are written to.
    pub out_dir: PathBuf,
    /// Bundler-generated `index.html` whose `<head>` holds the script and
    /// stylesheet tags to carry over.
    pub template: Option<PathBuf>,
    pub hydratable: bool,
}

/// Returns the markup between `<head>` and `</head>` in `template`, minus
/// any `<meta charset>` tag since the document shell writes its own.
pub fn head_fragment(template: &str) -> anyhow::Result<String> {
    let open = template
        .find("<head>")
        .ok_or_else(|| anyhow!("template has no <head>"))?;
    let start = open + "<head>".len();
    let len = template[start..]
        .find("</head>")
        .ok_or_else(|| anyhow!("template has no </head>"))?;

    let mut head = template[start..start + len].to_string();
    while let Some(tag) = head.find("<meta charset") {
        let end = head[tag..]
            .find('>')
            .map(|i| tag + i + 1)
            .ok_or_else(|| anyhow!("template has an unterminated <meta charset>"))?;
        head.replace_range(tag..end, "");
    }

    Ok(head
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Where the document for `route` goes: `/` is `index.html`, the not-found
/// page is `404.html`, anything else `<path>/index.html`.
pub fn output_path(out_dir: &Path, route: &Route) -> PathBuf {
    match route {
        Route::NotFound => out_dir.join("404.html"),
        route => {
            let path = route.to_path();
            let trimmed = path.trim_matches('/');
            if trimmed.is_empty() {
                out_dir.join("index.html")
            } else {
                out_dir.join(trimmed).join("index.html")
            }
        }
    }
}

/// Renders [`Route::STATIC`] into `options.out_dir` and returns the files
/// written.
pub async fn prerender(
    config: &SiteConfig,
    options: &PrerenderOptions,
) -> anyhow::Result<Vec<PathBuf>> {
    let head = match &options.template {
        Some(path) => {
            let template = std::fs::read_to_string(path).with_context(|| {
                format!("failed to read template {}", path.display())
            })?;
            head_fragment(&template)
                .with_context(|| format!("bad template {}", path.display()))?
        }
        None => String::new(),
    };
    let render_options = RenderOptions {
        hydratable: options.hydratable,
        head,
    };

    let mut written = Vec::with_capacity(Route::STATIC.len());
    for route in Route::STATIC {
        let page =
            render_page(config.clone(), &route.to_path(), &render_options)
                .await;

        let path = output_path(&options.out_dir, route);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).with_context(|| {
                format!("failed to create {}", dir.display())
            })?;
        }
        std::fs::write(&path, page.html)
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::info!(route = %route.to_path(), path = %path.display(), "wrote page");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_fragment_between_tags() {
        let template = "<html><head>\n  <link rel=\"stylesheet\" href=\"/app.css\">\n</head><body></body></html>";
        assert_eq!(
            head_fragment(template).unwrap(),
            "<link rel=\"stylesheet\" href=\"/app.css\">"
        );
        assert!(head_fragment("<html><body></body></html>").is_err());
        assert!(head_fragment("<head>unterminated").is_err());
    }

    #[test]
    fn head_fragment_drops_charset() {
        let template = "<html><head>\n    <meta charset=\"utf-8\" />\n    <script type=\"module\" src=\"/techlog.js\"></script>\n</head></html>";
        assert_eq!(
            head_fragment(template).unwrap(),
            "<script type=\"module\" src=\"/techlog.js\"></script>"
        );
    }

    #[test]
    fn output_paths() {
        let out = Path::new("dist");
        assert_eq!(output_path(out, &Route::Home), out.join("index.html"));
        assert_eq!(
            output_path(out, &Route::About),
            out.join("about").join("index.html")
        );
        assert_eq!(output_path(out, &Route::NotFound), out.join("404.html"));
    }
}
