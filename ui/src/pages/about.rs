use yew::prelude::*;

use crate::components::Markdown;
use crate::hooks::use_page_title;

const CONTENT: &str = include_str!("../../content/about.md");

#[function_component]
pub fn AboutPage() -> Html {
    use_page_title(Some("About"));

    html! {
        <section class="py-8">
            <Markdown text={CONTENT} />
        </section>
    }
}
