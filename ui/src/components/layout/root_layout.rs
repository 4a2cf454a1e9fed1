use std::rc::Rc;

use yew::prelude::*;

use super::Header;
use crate::components::Analytics;
use crate::config::{SiteConfig, SiteConfigContext};
use crate::theme::ThemeProvider;

/// Body classes for light mode.
pub const BODY_LIGHT_CLASSES: &str =
    "antialiased min-h-screen bg-white text-slate-900";
/// Dark-mode counterparts, active whenever `<html>` carries `dark`.
pub const BODY_DARK_CLASSES: &str = "dark:bg-slate-950 dark:text-slate-50";

/// Class list for `<body>`. Light and dark tokens are both always present;
/// the stylesheet picks between them.
pub fn body_class(config: &SiteConfig) -> String {
    format!(
        "{BODY_LIGHT_CLASSES} {BODY_DARK_CLASSES} {}",
        config.font.class_name()
    )
}

#[derive(Properties, PartialEq)]
pub struct RootLayoutProps {
    pub config: Rc<SiteConfig>,
    pub children: Children,
}

/// Chrome shared by every page: theme provider, header with mode toggle and
/// navigation, the page itself, then the analytics mount.
#[function_component]
pub fn RootLayout(props: &RootLayoutProps) -> Html {
    let config = props.config.clone();

    html! {
        <ContextProvider<SiteConfigContext> context={config.clone()}>
            <ThemeProvider
                options={config.theme.clone()}
                suppress_hydration_warning={config.document.suppress_hydration_warning}
            >
                <div class="max-w-2xl mx-auto py-10 px-4">
                    <Header />
                    <main>{props.children.clone()}</main>
                </div>
                <Analytics config={config.analytics.clone()} />
            </ThemeProvider>
        </ContextProvider<SiteConfigContext>>
    }
}
