use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// A link in the top navigation.
#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        route: Route::Home,
    },
    NavLink {
        label: "About",
        route: Route::About,
    },
];

#[function_component]
pub fn Nav() -> Html {
    html! {
        <nav class="ml-auto text-sm font-medium space-x-6">
            { for NAV_LINKS.iter().map(|link| html! {
                <Link<Route> to={link.route.clone()}>{link.label}</Link<Route>>
            })}
        </nav>
    }
}
