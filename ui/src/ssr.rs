//! Server-side rendering of pages into complete HTML documents.

use std::rc::Rc;

use yew::ServerRenderer;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

use crate::components::layout::RootLayout;
use crate::document::{Document, DocumentProps};
use crate::{Route, ServerApp, ServerAppProps, SiteConfig};

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Emit the markers the client needs to hydrate instead of re-render.
    pub hydratable: bool,
    /// Trusted markup appended to `<head>`.
    pub head: String,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub route: Route,
    /// The complete document, starting with the doctype.
    pub html: String,
}

/// Renders the app as it looks at `url`.
pub async fn render_app(config: SiteConfig, url: String, hydratable: bool) -> String {
    ServerRenderer::<ServerApp>::with_props(move || ServerAppProps {
        config: Rc::new(config),
        url: url.into(),
    })
    .hydratable(hydratable)
    .render()
    .await
}

#[derive(Properties, PartialEq)]
struct LayoutHarnessProps {
    config: Rc<SiteConfig>,
    url: AttrValue,
    content: Html,
}

#[function_component]
fn LayoutHarness(props: &LayoutHarnessProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(props.url.to_string());

    html! {
        <Router history={history}>
            <RootLayout config={props.config.clone()}>
                {props.content.clone()}
            </RootLayout>
        </Router>
    }
}

/// Renders [`RootLayout`] around arbitrary content instead of the routed
/// page. `content` is built on the render thread.
pub async fn render_layout<F>(config: SiteConfig, url: String, content: F) -> String
where
    F: FnOnce() -> Html + Send + 'static,
{
    ServerRenderer::<LayoutHarness>::with_props(move || LayoutHarnessProps {
        config: Rc::new(config),
        url: url.into(),
        content: content(),
    })
    .hydratable(false)
    .render()
    .await
}

/// Wraps already-rendered app markup in the document shell.
pub async fn render_document(
    config: SiteConfig,
    title: String,
    app_html: String,
    head: String,
) -> String {
    let document = ServerRenderer::<Document>::with_props(move || DocumentProps {
        config: Rc::new(config),
        title: title.into(),
        head: head.into(),
        app_html: app_html.into(),
    })
    .hydratable(false)
    .render()
    .await;

    format!("<!DOCTYPE html>\n{document}")
}

/// Renders the page for `url` into a complete document.
pub async fn render_page(
    config: SiteConfig,
    url: &str,
    options: &RenderOptions,
) -> RenderedPage {
    let route = Route::recognize(url).unwrap_or(Route::NotFound);
    let title = config.metadata.page_title(route.page_name());
    tracing::debug!(url, ?route, "rendering page");

    let app_html =
        render_app(config.clone(), url.to_string(), options.hydratable).await;
    let html =
        render_document(config, title, app_html, options.head.clone()).await;

    RenderedPage { route, html }
}
