use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_page_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_page_title(Some("Not Found"));

    html! {
        <div class="py-16 text-center">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="mt-2 text-slate-600 dark:text-slate-400">{"Page not found"}</p>
            <p class="mt-6 text-sm">
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            </p>
        </div>
    }
}
