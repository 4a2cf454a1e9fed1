use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::analytics::{AnalyticsConfig, AnalyticsEvent};

#[derive(Properties, PartialEq)]
pub struct AnalyticsProps {
    pub config: AnalyticsConfig,
}

/// Side-effect-only mount point for page-view tracking.
///
/// Renders nothing visible: a hidden marker carrying the mode. Once mounted
/// in the browser it injects the analytics script and reports a page view
/// for every router path it sees.
#[function_component]
pub fn Analytics(props: &AnalyticsProps) -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| Route::Home.to_path());
    let enabled = props.config.enabled;

    use_effect_with(props.config.clone(), |config| {
        if config.enabled {
            inject(config);
        }
    });

    use_effect_with((path, enabled), |(path, enabled)| {
        if *enabled {
            let route = Route::recognize(path)
                .filter(|route| *route != Route::NotFound)
                .map(|route| route.to_path());
            send(&AnalyticsEvent::page_view(route, path.clone()));
        }
    });

    html! {
        <div hidden=true aria-hidden="true" data-analytics={props.config.marker()}></div>
    }
}

#[cfg(target_arch = "wasm32")]
fn inject(config: &AnalyticsConfig) {
    crate::analytics::browser::inject(config);
}

#[cfg(not(target_arch = "wasm32"))]
fn inject(_config: &AnalyticsConfig) {}

fn send(event: &AnalyticsEvent) {
    tracing::debug!(?event, "page view");
    #[cfg(target_arch = "wasm32")]
    crate::analytics::browser::send(event);
}
