use techlog_prerender::{PrerenderOptions, prerender};
use techlog_ui::SiteConfig;
use tempfile::TempDir;

#[tokio::test]
async fn writes_every_static_route() {
    let scratch = TempDir::new().unwrap();
    let out_dir = scratch.path().to_path_buf();
    let options = PrerenderOptions {
        out_dir: out_dir.clone(),
        template: None,
        hydratable: true,
    };

    let written = prerender(&SiteConfig::default(), &options).await.unwrap();

    assert_eq!(
        written,
        vec![
            out_dir.join("index.html"),
            out_dir.join("about").join("index.html"),
            out_dir.join("404.html"),
        ]
    );
    let about =
        std::fs::read_to_string(out_dir.join("about").join("index.html"))
            .unwrap();
    assert!(about.starts_with("<!DOCTYPE html>"));
    assert!(about.contains("<title>About | 코코의 테크기록</title>"));
}

#[tokio::test]
async fn carries_template_head_into_pages() {
    let scratch = TempDir::new().unwrap();
    let out_dir = scratch.path().to_path_buf();
    let template = out_dir.join("index.html");
    std::fs::write(
        &template,
        "<!DOCTYPE html><html><head>\n<meta charset=\"utf-8\" />\n<script type=\"module\" src=\"/techlog-abc123.js\"></script>\n</head><body></body></html>",
    )
    .unwrap();

    let options = PrerenderOptions {
        out_dir: out_dir.clone(),
        template: Some(template.clone()),
        hydratable: false,
    };
    prerender(&SiteConfig::default(), &options).await.unwrap();

    // The template itself is replaced by the rendered front page.
    let index = std::fs::read_to_string(&template).unwrap();
    assert!(index.contains(r#"<script type="module" src="/techlog-abc123.js"></script>"#));
    assert!(index.contains("naver-site-verification"));
    assert_eq!(index.matches("charset").count(), 1);
}

#[tokio::test]
async fn missing_template_is_an_error() {
    let scratch = TempDir::new().unwrap();
    let out_dir = scratch.path().to_path_buf();
    let options = PrerenderOptions {
        out_dir: out_dir.clone(),
        template: Some(out_dir.join("nope.html")),
        hydratable: true,
    };

    let err = prerender(&SiteConfig::default(), &options)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("failed to read template"));
}
