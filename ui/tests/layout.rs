use techlog_ui::SiteConfig;
use techlog_ui::components::layout::{BODY_DARK_CLASSES, BODY_LIGHT_CLASSES, body_class};
use techlog_ui::ssr::{RenderOptions, render_layout, render_page};
use techlog_ui::theme::use_theme;
use yew::prelude::*;

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {html}"))
}

#[tokio::test]
async fn children_are_placed_in_main_unchanged() {
    let html = render_layout(SiteConfig::default(), "/".into(), || {
        html! { <p class="lead">{"Hello"}<em>{"world"}</em></p> }
    })
    .await;

    assert!(html.contains(
        r#"<main><p class="lead">Hello<em>world</em></p></main>"#
    ));
}

#[tokio::test]
async fn empty_children_render_an_empty_main() {
    let html =
        render_layout(SiteConfig::default(), "/".into(), || html! {}).await;
    assert!(html.contains("<main></main>"));
}

#[tokio::test]
async fn nav_has_exactly_home_and_about() {
    let html = render_layout(SiteConfig::default(), "/about".into(), || {
        html! { <p>{"no links here"}</p> }
    })
    .await;

    assert_eq!(html.matches("<a ").count(), 2);
    assert!(html.contains(r#"href="/""#));
    assert!(html.contains(r#"href="/about""#));
    assert!(html.contains(">Home</a>"));
    assert!(html.contains(">About</a>"));
    assert!(html.contains(r#"<nav class="ml-auto text-sm font-medium space-x-6">"#));
}

#[tokio::test]
async fn header_children_then_analytics_in_order() {
    let html = render_layout(SiteConfig::default(), "/".into(), || {
        html! { <p>{"Hello"}</p> }
    })
    .await;

    let header = position(&html, "<header>");
    let toggle = position(&html, "data-mode-toggle");
    let home = position(&html, ">Home</a>");
    let about = position(&html, ">About</a>");
    let hello = position(&html, "<p>Hello</p>");
    let analytics = position(&html, "data-analytics=");

    assert!(header < toggle);
    assert!(toggle < home);
    assert!(home < about);
    assert!(about < hello);
    assert!(hello < analytics);
    assert!(html.contains(r#"aria-label="Toggle theme""#));
}

#[tokio::test]
async fn analytics_marker_sits_outside_the_content_column() {
    let html = render_layout(SiteConfig::default(), "/".into(), || html! {})
        .await;

    let column_end = position(&html, "</main></div>");
    let marker = position(&html, "data-analytics=");
    assert!(column_end < marker);
}

#[tokio::test]
async fn disabled_analytics_still_renders_marker() {
    let mut config = SiteConfig::default();
    config.analytics.enabled = false;

    let html = render_layout(config, "/".into(), || html! {}).await;
    assert!(html.contains(r#"data-analytics="disabled""#));
}

#[function_component]
fn ThemeProbe() -> Html {
    let theme = use_theme();
    let options = theme.options();
    html! {
        <span id="probe">
            { format!(
                "attribute={} default={} system={}",
                options.attribute.as_str(),
                options.default_theme,
                options.enable_system,
            ) }
        </span>
    }
}

#[tokio::test]
async fn provider_receives_class_system_and_enable_system() {
    let html = render_layout(SiteConfig::default(), "/".into(), || {
        html! { <ThemeProbe /> }
    })
    .await;

    assert!(html.contains("attribute=class default=system system=true"));
}

#[tokio::test]
async fn document_has_single_verification_tag() {
    let page = render_page(
        SiteConfig::default(),
        "/",
        &RenderOptions::default(),
    )
    .await;

    assert_eq!(page.html.matches("naver-site-verification").count(), 1);
    assert!(page.html.contains(r#"name="naver-site-verification""#));
    assert!(
        page.html
            .contains(r#"content="1c228702dce91feee327f70e2250be0df6f50141""#)
    );
}

#[tokio::test]
async fn document_root_and_head() {
    let page = render_page(
        SiteConfig::default(),
        "/about",
        &RenderOptions {
            hydratable: false,
            head: r#"<script type="module" src="/techlog.js"></script>"#.into(),
        },
    )
    .await;
    let html = page.html;

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="ko">"#));
    assert!(html.contains("<title>About | 코코의 테크기록</title>"));
    assert!(html.contains(r#"content="코코의 테크 기록블로그""#));
    assert!(html.contains("fonts.googleapis.com/css2?family=Inter"));
    assert!(html.contains(".font-inter{font-family:\"Inter\""));
    assert!(html.contains(r#"localStorage.getItem("theme")"#));
    assert!(html.contains(r#"<script type="module" src="/techlog.js"></script>"#));

    let head_end = position(&html, "</head>");
    let app = position(&html, r#"<div id="app">"#);
    assert!(head_end < app);
}

#[tokio::test]
async fn body_class_has_light_dark_and_font() {
    let config = SiteConfig::default();
    let class = body_class(&config);

    for token in BODY_LIGHT_CLASSES.split_whitespace() {
        assert!(class.split_whitespace().any(|c| c == token), "{token}");
    }
    for token in BODY_DARK_CLASSES.split_whitespace() {
        assert!(class.split_whitespace().any(|c| c == token), "{token}");
    }
    assert!(class.contains("bg-white"));
    assert!(class.contains("dark:bg-slate-950"));
    assert!(class.ends_with(" font-inter"));

    let page = render_page(config, "/", &RenderOptions::default()).await;
    assert!(page.html.contains(&format!(r#"<body class="{class}">"#)));
}

#[tokio::test]
async fn verification_can_be_disabled() {
    let config = SiteConfig {
        verification: None,
        ..SiteConfig::default()
    };
    let page = render_page(config, "/", &RenderOptions::default()).await;
    assert!(!page.html.contains("naver-site-verification"));
}

#[tokio::test]
async fn font_family_cannot_break_out_of_style() {
    let mut config = SiteConfig::default();
    config.font.family = "Inter</style><script>alert(1)</script>".into();
    let page = render_page(config, "/", &RenderOptions::default()).await;

    let start = position(&page.html, "<style>") + "<style>".len();
    let len = page.html[start..].find("</style>").unwrap();
    let rule = &page.html[start..start + len];
    assert!(rule.starts_with(".font-interstylescriptalert1script{"));
    assert!(!rule.contains('<'));
    assert!(rule.ends_with('}'));
}
