use yew::prelude::*;

use super::Nav;
use crate::components::ModeToggle;

#[function_component]
pub fn Header() -> Html {
    html! {
        <header>
            <div class="flex items-center justify-between">
                <ModeToggle />
                <Nav />
            </div>
        </header>
    }
}
