use yew::prelude::*;

use crate::theme::ResolvedTheme;

/// Hook to track the OS color scheme preference while `enabled`.
///
/// `on_change` fires with the new preference each time the
/// `prefers-color-scheme` media query flips. Nothing is registered when
/// disabled or off the browser.
#[hook]
pub fn use_system_theme(enabled: bool, on_change: Callback<ResolvedTheme>) {
    use_effect_with(enabled, move |enabled| {
        #[cfg(target_arch = "wasm32")]
        let listener = (*enabled).then(|| listen(on_change)).flatten();
        #[cfg(not(target_arch = "wasm32"))]
        let listener: Option<()> = {
            let _ = (enabled, on_change);
            None
        };

        move || drop(listener)
    });
}

/// Media query subscription, removed again on drop.
#[cfg(target_arch = "wasm32")]
struct MediaQueryListener {
    media_query: web_sys::MediaQueryList,
    closure: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for MediaQueryListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self.media_query.remove_event_listener_with_callback(
            "change",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn listen(on_change: Callback<ResolvedTheme>) -> Option<MediaQueryListener> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::MediaQueryListEvent;

    use crate::theme::PREFERS_DARK;

    let media_query = web_sys::window()?.match_media(PREFERS_DARK).ok()??;

    // Report the current value too; it may have changed since first render
    on_change.emit(ResolvedTheme::from_prefers_dark(media_query.matches()));

    let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
        on_change.emit(ResolvedTheme::from_prefers_dark(event.matches()));
    }) as Box<dyn FnMut(MediaQueryListEvent)>);

    media_query
        .add_event_listener_with_callback(
            "change",
            closure.as_ref().unchecked_ref(),
        )
        .ok()?;

    Some(MediaQueryListener {
        media_query,
        closure,
    })
}
