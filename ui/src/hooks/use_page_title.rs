use yew::prelude::*;

use crate::config::use_site_config;

/// Sets the document title to `"{page} | {site title}"`, or just the site
/// title when `page` is `None`. No cleanup on unmount since each page sets
/// its own title, and unmount/mount ordering isn't guaranteed during route
/// transitions.
#[hook]
pub fn use_page_title(page: Option<&'static str>) {
    let config = use_site_config();
    let title = config.metadata.page_title(page);
    use_effect_with(title, |title| set_document_title(title));
}

#[cfg(target_arch = "wasm32")]
fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_document_title(_title: &str) {}
