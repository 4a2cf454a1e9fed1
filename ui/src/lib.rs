//! Site shell for the 코코의 테크기록 blog.
//!
//! [`App`] is the browser entry point; [`ServerApp`] renders the same tree
//! from a URL on the server (see the `ssr` feature).

use std::rc::Rc;

use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

pub mod analytics;
pub mod components;
pub mod config;
pub mod document;
pub mod font;
pub mod hooks;
#[cfg(target_arch = "wasm32")]
pub mod logs;
pub mod metadata;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod ssr;
pub mod theme;

pub use config::SiteConfig;

use components::layout::RootLayout;
use pages::{AboutPage, HomePage, NotFoundPage};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes written out as static documents.
    pub const STATIC: &'static [Route] = &[Route::Home, Route::About, Route::NotFound];

    /// Page name used in the document title; `None` for the front page.
    pub fn page_name(&self) -> Option<&'static str> {
        match self {
            Route::Home => None,
            Route::About => Some("About"),
            Route::NotFound => Some("Not Found"),
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub config: Rc<SiteConfig>,
}

/// Root layout around the routed page. Shared by [`App`] and [`ServerApp`]
/// so hydration sees the same component tree on both sides.
#[function_component]
pub fn Site(props: &SiteProps) -> Html {
    html! {
        <RootLayout config={props.config.clone()}>
            <Switch<Route> render={switch} />
        </RootLayout>
    }
}

#[function_component]
pub fn App(props: &SiteProps) -> Html {
    html! {
        <BrowserRouter>
            <Site config={props.config.clone()} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServerAppProps {
    pub config: Rc<SiteConfig>,
    /// Path being rendered, e.g. `/about`.
    pub url: AttrValue,
}

/// Renders [`Site`] at a fixed URL, for server-side rendering.
#[function_component]
pub fn ServerApp(props: &ServerAppProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(props.url.to_string());

    html! {
        <Router history={history}>
            <Site config={props.config.clone()} />
        </Router>
    }
}
