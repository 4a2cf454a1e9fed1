//! Browser entry point, built with trunk.
//!
//! With the `hydration` feature the app attaches to markup written by the
//! prerender binary; otherwise it renders from scratch into `#app`.

#[cfg(target_arch = "wasm32")]
fn main() {
    use std::rc::Rc;

    use techlog_ui::{App, SiteConfig, SiteProps, document, logs};

    logs::init_logging();

    let config = SiteConfig::from_build_env().unwrap_or_else(|e| {
        tracing::error!("invalid build configuration, using defaults: {e}");
        SiteConfig::default()
    });
    let props = SiteProps {
        config: Rc::new(config),
    };

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(document::APP_ROOT_ID));
    match root {
        Some(root) => mount(root, props),
        None => {
            tracing::warn!("#{} not found, mounting on body", document::APP_ROOT_ID);
            document::apply_shell(&props.config);
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "hydration"))]
fn mount(root: web_sys::Element, props: techlog_ui::SiteProps) {
    yew::Renderer::<techlog_ui::App>::with_root_and_props(root, props).hydrate();
}

#[cfg(all(target_arch = "wasm32", not(feature = "hydration")))]
fn mount(root: web_sys::Element, props: techlog_ui::SiteProps) {
    techlog_ui::document::apply_shell(&props.config);
    yew::Renderer::<techlog_ui::App>::with_root_and_props(root, props).render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("techlog is a browser bundle; build it with `trunk build`");
}
