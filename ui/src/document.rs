//! The HTML document around the app: `<html>`, `<head>` and `<body>`.
//!
//! Only the prerender step renders [`Document`]; in the browser the app is
//! mounted inside `#app` and never touches the shell, apart from
//! [`apply_shell`] when there is no prerendered page to hydrate.

use std::rc::Rc;

use yew::prelude::*;

use crate::SiteConfig;
use crate::components::layout::body_class;
use crate::theme::theme_init_script;

/// Id of the element the app is mounted into.
pub const APP_ROOT_ID: &str = "app";

#[derive(Properties, PartialEq)]
pub struct DocumentProps {
    pub config: Rc<SiteConfig>,
    /// Full `<title>` text for this page.
    pub title: AttrValue,
    /// Trusted markup appended to `<head>`, e.g. the bundle's script and
    /// stylesheet tags.
    #[prop_or_default]
    pub head: AttrValue,
    /// Server-rendered app markup placed inside `#app`.
    #[prop_or_default]
    pub app_html: AttrValue,
}

#[function_component]
pub fn Document(props: &DocumentProps) -> Html {
    let config = &props.config;
    let font = &config.font;

    html! {
        <html lang={config.document.lang.clone()}>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{props.title.clone()}</title>
                <meta name="description" content={config.metadata.description.clone()} />
                if let Some(tag) = &config.verification {
                    <meta name={tag.name.clone()} content={tag.content.clone()} />
                }
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
                <link rel="stylesheet" href={font.stylesheet_href()} />
                <style>{ Html::from_html_unchecked(font.css_rule().into()) }</style>
                <script>{ Html::from_html_unchecked(theme_init_script(&config.theme).into()) }</script>
                { Html::from_html_unchecked(props.head.clone()) }
            </head>
            <body class={body_class(config)}>
                <div id={APP_ROOT_ID}>
                    { Html::from_html_unchecked(props.app_html.clone()) }
                </div>
            </body>
        </html>
    }
}

/// Applies the `<html lang>` and `<body>` classes the prerendered shell
/// would have carried, for builds served without it (e.g. `trunk serve`).
#[cfg(target_arch = "wasm32")]
pub fn apply_shell(config: &SiteConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element()
        && let Err(e) = root.set_attribute("lang", &config.document.lang)
    {
        tracing::debug!("failed to set lang: {e:?}");
    }
    if let Some(body) = document.body() {
        body.set_class_name(&body_class(config));
    }
}
