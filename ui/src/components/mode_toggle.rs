use serde_json::{Map, json};
use yew::prelude::*;

use crate::analytics;
use crate::theme::use_theme;

const LABEL: &str = "Toggle theme";

/// Cycles the display preference: light, dark, then system (when enabled).
///
/// Both icons are always rendered and Tailwind's `dark:` variants decide
/// which one shows, so the markup is identical on the server and after the
/// stored preference loads.
#[function_component]
pub fn ModeToggle() -> Html {
    let theme = use_theme();

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.cycle();
            let mut data = Map::new();
            data.insert("theme".to_string(), json!(next.as_str()));
            analytics::track("theme_change", data);
        })
    };

    html! {
        <button
            type="button"
            class="relative inline-flex h-9 w-9 items-center justify-center \
                   rounded-md text-slate-700 dark:text-slate-200 \
                   hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
            {onclick}
            title={LABEL}
            aria-label={LABEL}
            data-mode-toggle=""
        >
            <SunIcon />
            <MoonIcon />
            <span class="sr-only">{LABEL}</span>
        </button>
    }
}

#[function_component]
fn SunIcon() -> Html {
    html! {
        <svg
            class="h-5 w-5 rotate-0 scale-100 transition-all dark:-rotate-90 dark:scale-0"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="4" stroke-width="2" />
            <path
                stroke-linecap="round"
                stroke-width="2"
                d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M4.93 19.07l1.41-1.41m11.32-11.32l1.41-1.41"
            />
        </svg>
    }
}

#[function_component]
fn MoonIcon() -> Html {
    html! {
        <svg
            class="absolute h-5 w-5 rotate-90 scale-0 transition-all dark:rotate-0 dark:scale-100"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M21 12.79A9 9 0 1111.21 3 7 7 0 0021 12.79z"
            />
        </svg>
    }
}
