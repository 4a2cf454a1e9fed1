use yew::prelude::*;

use crate::theme::Theme;

/// Hook to follow theme changes made in other tabs.
///
/// Browsers fire `storage` events on every other document of the same
/// origin when `localStorage` changes. `on_change` receives the new stored
/// value for `storage_key`, or `None` when it was removed.
#[hook]
pub fn use_stored_theme_sync(
    storage_key: String,
    on_change: Callback<Option<Theme>>,
) {
    use_effect_with(storage_key, move |storage_key| {
        #[cfg(target_arch = "wasm32")]
        let listener = listen(storage_key.clone(), on_change);
        #[cfg(not(target_arch = "wasm32"))]
        let listener: Option<()> = {
            let _ = (storage_key, on_change);
            None
        };

        move || drop(listener)
    });
}

#[cfg(target_arch = "wasm32")]
struct StorageListener {
    window: web_sys::Window,
    closure: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::StorageEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for StorageListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self.window.remove_event_listener_with_callback(
            "storage",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn listen(
    storage_key: String,
    on_change: Callback<Option<Theme>>,
) -> Option<StorageListener> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::StorageEvent;

    let window = web_sys::window()?;

    let closure = Closure::wrap(Box::new(move |event: StorageEvent| {
        // key is None when the whole storage was cleared
        if event.key().is_some_and(|key| key != storage_key) {
            return;
        }
        let stored = event.new_value().and_then(|value| value.parse().ok());
        on_change.emit(stored);
    }) as Box<dyn FnMut(StorageEvent)>);

    window
        .add_event_listener_with_callback(
            "storage",
            closure.as_ref().unchecked_ref(),
        )
        .ok()?;

    Some(StorageListener { window, closure })
}
