//! Renders bundled markdown content.
//!
//! Raw HTML in the source is turned into text, so the output is only ever
//! what markdown itself produces. Clicks on links to known routes go through
//! the router instead of reloading the page.

use pulldown_cmark::{Event, Options, Parser, html};
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The markdown text to render.
    pub text: AttrValue,
    /// Additional CSS classes for the container.
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn Markdown(props: &Props) -> Html {
    let html_content = render_markdown(&props.text);

    let classes = classes!(
        "prose",
        "prose-slate",
        "dark:prose-invert",
        "max-w-none",
        "prose-headings:mb-4",
        "prose-a:text-slate-900",
        "dark:prose-a:text-slate-50",
        props.class.clone()
    );

    let navigator = use_navigator();
    let onclick = Callback::from(move |e: MouseEvent| {
        let Some(navigator) = &navigator else {
            return;
        };
        let anchor = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten());

        if let Some(anchor) = anchor
            && let Some(href) = anchor.get_attribute("href")
            && let Some(route) = Route::recognize(&href)
            && route != Route::NotFound
        {
            e.prevent_default();
            navigator.push(&route);
        }
    });

    html! {
        <div {onclick} class={classes}>
            { Html::from_html_unchecked(html_content.into()) }
        </div>
    }
}

/// Converts markdown to HTML, escaping any raw HTML blocks or inline tags.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        event => event,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_markdown() {
        let html = render_markdown("## 소개\n\n**굵게** 그리고 [링크](/about)");
        assert!(html.contains("<h2>소개</h2>"));
        assert!(html.contains("<strong>굵게</strong>"));
        assert!(html.contains(r#"<a href="/about">링크</a>"#));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
