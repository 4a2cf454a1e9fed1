use techlog_ui::ssr::{RenderOptions, render_app, render_page};
use techlog_ui::{Route, SiteConfig};

#[tokio::test]
async fn home_renders_front_page_content() {
    let html = render_app(SiteConfig::default(), "/".into(), false).await;
    assert!(html.contains("<h1>코코의 테크기록</h1>"));
    assert!(html.contains(r#"<a href="/about">소개</a>"#));
}

#[tokio::test]
async fn about_renders_inside_layout() {
    let html = render_app(SiteConfig::default(), "/about".into(), false).await;
    let main = html.find("<main>").unwrap();
    let about = html.find("<h1>About</h1>").unwrap();
    assert!(main < about);
}

#[tokio::test]
async fn unknown_path_renders_not_found() {
    let page = render_page(
        SiteConfig::default(),
        "/no/such/post",
        &RenderOptions::default(),
    )
    .await;
    assert_eq!(page.route, Route::NotFound);
    assert!(page.html.contains("Page not found"));
    assert!(page.html.contains("<title>Not Found | 코코의 테크기록</title>"));
}

#[tokio::test]
async fn hydratable_output_carries_component_markers() {
    let plain = render_app(SiteConfig::default(), "/".into(), false).await;
    let hydratable = render_app(SiteConfig::default(), "/".into(), true).await;
    assert!(!plain.contains("<!--"));
    assert!(hydratable.contains("<!--"));
}

#[test]
fn static_routes_have_paths() {
    use yew_router::Routable;

    let paths: Vec<String> = Route::STATIC.iter().map(|r| r.to_path()).collect();
    assert_eq!(paths, vec!["/", "/about", "/404"]);
}
