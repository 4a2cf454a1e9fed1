//! Page-view and event tracking through an external analytics script.
//!
//! We never talk to the analytics service ourselves. The script is injected
//! once and events are handed to its `window.va` queue; everything else is
//! the script's business.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value, json};

pub const PRODUCTION_SCRIPT_SRC: &str = "/_vercel/insights/script.js";
pub const DEVELOPMENT_SCRIPT_SRC: &str =
    "https://va.vercel-scripts.com/v1/script.debug.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsMode {
    /// Development for debug builds, production otherwise.
    #[default]
    Auto,
    Development,
    Production,
}

impl AnalyticsMode {
    /// Resolves `Auto` against the build profile.
    pub fn resolve(self) -> AnalyticsMode {
        match self {
            AnalyticsMode::Auto if cfg!(debug_assertions) => {
                AnalyticsMode::Development
            }
            AnalyticsMode::Auto => AnalyticsMode::Production,
            mode => mode,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsMode::Auto => "auto",
            AnalyticsMode::Development => "development",
            AnalyticsMode::Production => "production",
        }
    }
}

impl fmt::Display for AnalyticsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" => Ok(AnalyticsMode::Auto),
            "development" => Ok(AnalyticsMode::Development),
            "production" => Ok(AnalyticsMode::Production),
            other => Err(format!(
                "expected auto, development or production, got {other:?}"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub mode: AnalyticsMode,
    /// Overrides the mode's default script location.
    pub script_src: Option<String>,
    /// Custom ingestion endpoint, passed to the script as `data-endpoint`.
    pub endpoint: Option<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: AnalyticsMode::Auto,
            script_src: None,
            endpoint: None,
        }
    }
}

impl AnalyticsConfig {
    pub fn script_src(&self) -> &str {
        if let Some(src) = &self.script_src {
            return src;
        }
        match self.mode.resolve() {
            AnalyticsMode::Development => DEVELOPMENT_SCRIPT_SRC,
            _ => PRODUCTION_SCRIPT_SRC,
        }
    }

    /// Attributes of the injected `<script>`. Page views are reported per
    /// router path by the `Analytics` component, so the script's own
    /// history tracking is always switched off.
    pub fn script_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = vec![
            ("src", self.script_src().to_string()),
            ("defer", String::new()),
            ("data-disable-auto-track", "1".to_string()),
        ];
        if let Some(endpoint) = &self.endpoint {
            attributes.push(("data-endpoint", endpoint.clone()));
        }
        if self.mode.resolve() == AnalyticsMode::Development {
            attributes.push(("data-debug", "true".to_string()));
        }
        attributes
    }

    /// Value of the marker's `data-analytics` attribute.
    pub fn marker(&self) -> &'static str {
        if self.enabled {
            self.mode.resolve().as_str()
        } else {
            "disabled"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsEvent {
    PageView {
        /// Route pattern the path matched, when known.
        route: Option<String>,
        path: String,
    },
    Custom {
        name: String,
        data: Map<String, Value>,
    },
}

impl AnalyticsEvent {
    pub fn page_view(route: Option<String>, path: impl Into<String>) -> Self {
        AnalyticsEvent::PageView {
            route,
            path: path.into(),
        }
    }

    pub fn custom(name: impl Into<String>, data: Map<String, Value>) -> Self {
        AnalyticsEvent::Custom {
            name: name.into(),
            data,
        }
    }

    /// The `(kind, payload)` pair pushed onto the script's queue.
    pub fn queue_entry(&self) -> (&'static str, Value) {
        match self {
            AnalyticsEvent::PageView { route, path } => {
                let mut payload = json!({ "path": path });
                if let Some(route) = route {
                    payload["route"] = json!(route);
                }
                ("pageview", payload)
            }
            AnalyticsEvent::Custom { name, data } => {
                let mut payload = json!({ "name": name });
                if !data.is_empty() {
                    payload["data"] = Value::Object(data.clone());
                }
                ("event", payload)
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) mod browser {
    use js_sys::{Function, JSON, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    use super::{AnalyticsConfig, AnalyticsEvent};

    const SCRIPT_ID: &str = "techlog-analytics";
    const QUEUE_FN: &str = "va";

    /// Installs the `va` queue and appends the script to `<head>`, once.
    pub fn inject(config: &AnalyticsConfig) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        if document.get_element_by_id(SCRIPT_ID).is_some() {
            return;
        }

        let has_queue = Reflect::get(&window, &JsValue::from_str(QUEUE_FN))
            .map(|value| value.is_function())
            .unwrap_or(false);
        if !has_queue {
            let queue = Function::new_with_args(
                "...params",
                "(window.vaq = window.vaq || []).push(params)",
            );
            if let Err(e) =
                Reflect::set(&window, &JsValue::from_str(QUEUE_FN), &queue)
            {
                tracing::debug!("failed to install analytics queue: {e:?}");
            }
        }

        let Ok(script) = document.create_element("script") else {
            return;
        };
        script.set_id(SCRIPT_ID);
        for (name, value) in config.script_attributes() {
            if let Err(e) = script.set_attribute(name, &value) {
                tracing::debug!("failed to set {name} on analytics script: {e:?}");
            }
        }
        let Some(head) = document.head() else {
            return;
        };
        match head.append_child(&script) {
            Ok(_) => tracing::debug!(src = config.script_src(), "analytics injected"),
            Err(e) => tracing::debug!("failed to inject analytics: {e:?}"),
        }
    }

    /// Hands an event to the queue. A no-op until [`inject`] has run.
    pub fn send(event: &AnalyticsEvent) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(queue) = Reflect::get(&window, &JsValue::from_str(QUEUE_FN))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
        else {
            return;
        };

        let (kind, payload) = event.queue_entry();
        let Ok(payload) = JSON::parse(&payload.to_string()) else {
            return;
        };
        if let Err(e) =
            queue.call2(&JsValue::NULL, &JsValue::from_str(kind), &payload)
        {
            tracing::warn!("analytics queue rejected {kind}: {e:?}");
        }
    }
}

/// Records a custom event, e.g. `track("theme_change", data)`.
pub fn track(name: &str, data: Map<String, Value>) {
    let event = AnalyticsEvent::custom(name, data);
    tracing::debug!(?event, "track");
    #[cfg(target_arch = "wasm32")]
    browser::send(&event);
}
