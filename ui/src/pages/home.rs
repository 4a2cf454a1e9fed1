use yew::prelude::*;

use crate::components::Markdown;
use crate::hooks::use_page_title;

const CONTENT: &str = include_str!("../../content/home.md");

#[function_component]
pub fn HomePage() -> Html {
    use_page_title(None);

    html! {
        <section class="py-8">
            <Markdown text={CONTENT} />
        </section>
    }
}
