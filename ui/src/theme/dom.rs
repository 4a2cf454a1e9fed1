//! Browser side of the theme: storage, OS preference and the root element.
//!
//! Everything here is best-effort. Off the browser (server rendering, native
//! tests) reads return the defaults and writes are no-ops.

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, Storage, window};

    use super::super::{ResolvedTheme, Theme, ThemeAttribute, ThemeOptions};

    pub const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

    fn local_storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }

    pub fn read_stored_theme(key: &str) -> Option<Theme> {
        let value = local_storage()?.get_item(key).ok().flatten()?;
        match value.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!("ignoring stored theme: {e}");
                None
            }
        }
    }

    pub fn store_theme(key: &str, theme: Theme) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, theme.as_str()) {
            tracing::debug!("failed to store theme: {e:?}");
        }
    }

    pub fn system_theme() -> ResolvedTheme {
        let prefers_dark = window()
            .and_then(|w| w.match_media(PREFERS_DARK).ok())
            .flatten()
            .map(|mql| mql.matches())
            .unwrap_or(false);
        ResolvedTheme::from_prefers_dark(prefers_dark)
    }

    /// Writes the resolved theme onto `<html>`. With `check_mismatch`, a
    /// value already painted there (by the inline head script) that
    /// disagrees is logged.
    pub fn apply_theme(
        options: &ThemeOptions,
        resolved: ResolvedTheme,
        check_mismatch: bool,
    ) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let painted = match &options.attribute {
            ThemeAttribute::Class => {
                let classes = root.class_list();
                if classes.contains("dark") {
                    Some("dark".to_string())
                } else if classes.contains("light") {
                    Some("light".to_string())
                } else {
                    None
                }
            }
            ThemeAttribute::Data(name) => root.get_attribute(name),
        };
        if check_mismatch
            && let Some(painted) = &painted
            && painted != resolved.as_str()
        {
            tracing::warn!(
                painted = %painted,
                resolved = resolved.as_str(),
                "server-painted theme differs from the client"
            );
        }

        let written = match &options.attribute {
            ThemeAttribute::Class => {
                let classes = root.class_list();
                classes
                    .remove_2("light", "dark")
                    .and_then(|_| classes.add_1(resolved.as_str()))
            }
            ThemeAttribute::Data(name) => {
                root.set_attribute(name, resolved.as_str())
            }
        };
        if let Err(e) = written {
            tracing::debug!(attribute = options.attribute.as_str(), "failed to apply theme: {e:?}");
        }

        if options.enable_color_scheme
            && let Some(root) = root.dyn_ref::<HtmlElement>()
            && let Err(e) = root
                .style()
                .set_property("color-scheme", resolved.as_str())
        {
            tracing::debug!("failed to set color-scheme: {e:?}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use browser::*;
#[cfg(not(target_arch = "wasm32"))]
pub(crate) use server::*;

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use super::super::{ResolvedTheme, Theme, ThemeOptions};

    pub fn read_stored_theme(_key: &str) -> Option<Theme> {
        None
    }

    pub fn store_theme(_key: &str, _theme: Theme) {}

    pub fn system_theme() -> ResolvedTheme {
        ResolvedTheme::default()
    }

    pub fn apply_theme(
        _options: &ThemeOptions,
        _resolved: ResolvedTheme,
        _check_mismatch: bool,
    ) {
    }
}
