//! Light/dark/system display preference.
//!
//! The preference is owned by [`ThemeProvider`], which mounts a reducer and
//! hands it to descendants through Yew context. Components read and change it
//! through [`use_theme`]. Browser side effects (storage, the `<html>`
//! attribute, media queries) live in [`dom`] and only ever run from effects
//! and callbacks, so server rendering stays deterministic.

mod dom;
mod script;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use yew::prelude::*;

use crate::hooks::{use_stored_theme_sync, use_system_theme};

#[cfg(target_arch = "wasm32")]
pub(crate) use dom::PREFERS_DARK;
pub use script::theme_init_script;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}, expected light, dark or system")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// A theme with `System` resolved against the OS preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ResolvedTheme::Dark
        } else {
            ResolvedTheme::Light
        }
    }
}

/// Where the resolved theme is written on the root element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeAttribute {
    /// `class="dark"` / `class="light"`, which is what Tailwind's class
    /// strategy keys `dark:` variants on.
    #[default]
    Class,
    /// A `data-*` attribute such as `data-theme="dark"`.
    Data(String),
}

impl ThemeAttribute {
    pub fn as_str(&self) -> &str {
        match self {
            ThemeAttribute::Class => "class",
            ThemeAttribute::Data(name) => name,
        }
    }
}

impl FromStr for ThemeAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "class" => Ok(ThemeAttribute::Class),
            name if name.starts_with("data-") && name.len() > "data-".len() => {
                Ok(ThemeAttribute::Data(name.to_string()))
            }
            other => Err(format!(
                "expected \"class\" or a data-* attribute, got {other:?}"
            )),
        }
    }
}

/// Static configuration handed to [`ThemeProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    pub attribute: ThemeAttribute,
    /// Used when nothing is stored.
    pub default_theme: Theme,
    /// Allow `System` and follow OS-level changes.
    pub enable_system: bool,
    /// Storage key for the persisted preference.
    pub storage_key: String,
    /// Also set the `color-scheme` style so native controls match.
    pub enable_color_scheme: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            attribute: ThemeAttribute::Class,
            default_theme: Theme::System,
            enable_system: true,
            storage_key: "theme".to_string(),
            enable_color_scheme: true,
        }
    }
}

impl ThemeOptions {
    /// Themes a user can pick, in toggle order.
    pub fn themes(&self) -> &'static [Theme] {
        if self.enable_system {
            &[Theme::Light, Theme::Dark, Theme::System]
        } else {
            &[Theme::Light, Theme::Dark]
        }
    }

    /// `System` is only meaningful when system following is enabled.
    pub fn normalize(&self, theme: Theme) -> Theme {
        match theme {
            Theme::System if !self.enable_system => Theme::Light,
            theme => theme,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeState {
    pub options: ThemeOptions,
    /// The user's preference.
    pub theme: Theme,
    /// Last known OS preference. Light until the browser reports otherwise.
    pub system: ResolvedTheme,
}

impl ThemeState {
    pub fn new(options: ThemeOptions) -> Self {
        let theme = options.normalize(options.default_theme);
        Self {
            options,
            theme,
            system: ResolvedTheme::default(),
        }
    }

    pub fn resolved(&self) -> ResolvedTheme {
        match self.theme {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System => self.system,
        }
    }

    /// The theme a toggle click moves to.
    pub fn next_theme(&self) -> Theme {
        let themes = self.options.themes();
        let current = themes.iter().position(|t| *t == self.theme).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }
}

pub enum ThemeAction {
    Set(Theme),
    /// Load a persisted preference; `None` means nothing was stored.
    Restore(Option<Theme>),
    SystemChanged(ResolvedTheme),
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ThemeAction::Set(theme) => {
                next.theme = next.options.normalize(theme);
            }
            ThemeAction::Restore(stored) => {
                let theme = stored.unwrap_or(next.options.default_theme);
                next.theme = next.options.normalize(theme);
            }
            ThemeAction::SystemChanged(system) => {
                next.system = system;
            }
        }

        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub options: ThemeOptions,
    /// Don't warn when the client-resolved theme differs from what the
    /// server painted on the root element.
    #[prop_or_default]
    pub suppress_hydration_warning: bool,
    pub children: Children,
}

#[function_component]
pub fn ThemeProvider(props: &ThemeProviderProps) -> Html {
    // Rendered markup never depends on the theme, so reading the browser
    // here can't cause a hydration mismatch. On the server both reads fall
    // back to the defaults.
    let state = use_reducer({
        let options = props.options.clone();
        move || {
            let stored = dom::read_stored_theme(&options.storage_key);
            let mut state = ThemeState::new(options);
            state.system = dom::system_theme();
            state.theme = state
                .options
                .normalize(stored.unwrap_or(state.options.default_theme));
            state
        }
    });

    let on_system_change = {
        let state = state.clone();
        Callback::from(move |system: ResolvedTheme| {
            state.dispatch(ThemeAction::SystemChanged(system));
        })
    };
    use_system_theme(props.options.enable_system, on_system_change);

    let on_storage_change = {
        let state = state.clone();
        Callback::from(move |stored: Option<Theme>| {
            state.dispatch(ThemeAction::Restore(stored));
        })
    };
    use_stored_theme_sync(props.options.storage_key.clone(), on_storage_change);

    {
        let resolved = state.resolved();
        let options = state.options.clone();
        let suppress_warning = props.suppress_hydration_warning;
        let first_apply = use_mut_ref(|| true);
        use_effect_with((resolved, options), move |(resolved, options)| {
            let check_mismatch = !suppress_warning && *first_apply.borrow();
            *first_apply.borrow_mut() = false;
            dom::apply_theme(options, *resolved, check_mismatch);
        });
    }

    html! {
        <ContextProvider<ThemeContext> context={state}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

/// Read and write access to the theme context.
#[derive(Clone)]
pub struct ThemeHandle {
    context: ThemeContext,
}

impl ThemeHandle {
    pub fn new(context: ThemeContext) -> Self {
        Self { context }
    }

    pub fn theme(&self) -> Theme {
        self.context.theme
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.context.resolved()
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.context.options
    }

    pub fn themes(&self) -> &'static [Theme] {
        self.context.options.themes()
    }

    /// Persists the preference and updates every subscriber.
    pub fn set_theme(&self, theme: Theme) {
        let theme = self.context.options.normalize(theme);
        dom::store_theme(&self.context.options.storage_key, theme);
        tracing::debug!(%theme, "theme changed");
        self.context.dispatch(ThemeAction::Set(theme));
    }

    /// Moves to the next theme in toggle order and returns it.
    pub fn cycle(&self) -> Theme {
        let next = self.context.next_theme();
        self.set_theme(next);
        next
    }
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    let context = use_context::<ThemeContext>()
        .expect("use_theme must be used within a ThemeProvider");
    ThemeHandle::new(context)
}
