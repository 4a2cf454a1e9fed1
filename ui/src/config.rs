//! Site configuration.
//!
//! Defaults carry the values the live site is deployed with. Every field can
//! be overridden per deployment through environment variables: at build
//! time for the wasm bundle ([`SiteConfig::from_build_env`]) and at run time
//! for the prerender binary ([`SiteConfig::from_env`]).

use std::rc::Rc;
use std::str::FromStr;

use yew::prelude::*;

use crate::analytics::{AnalyticsConfig, AnalyticsMode};
use crate::font::GoogleFont;
use crate::metadata::{Metadata, VerificationTag};
use crate::theme::{Theme, ThemeAttribute, ThemeOptions};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Attributes of the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub lang: String,
    /// Don't warn when the theme painted on `<html>` before hydration
    /// differs from the one the client resolves.
    pub suppress_hydration_warning: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            lang: "ko".to_string(),
            suppress_hydration_warning: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub metadata: Metadata,
    pub document: DocumentOptions,
    /// `None` leaves the verification tag out entirely.
    pub verification: Option<VerificationTag>,
    pub font: GoogleFont,
    pub theme: ThemeOptions,
    pub analytics: AnalyticsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            metadata: Metadata::default(),
            document: DocumentOptions::default(),
            verification: Some(VerificationTag::default()),
            font: GoogleFont::default(),
            theme: ThemeOptions::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Builds a config from the defaults plus whatever `lookup` returns for
    /// each known key (`SITE_*`, `THEME_*`, `ANALYTICS_*`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SiteConfig::default();

        if let Some(title) = lookup("SITE_TITLE") {
            config.metadata.title = title;
        }
        if let Some(description) = lookup("SITE_DESCRIPTION") {
            config.metadata.description = description;
        }
        if let Some(lang) = lookup("SITE_LANG") {
            config.document.lang = lang;
        }
        if let Some(value) = lookup("SITE_SUPPRESS_HYDRATION_WARNING") {
            config.document.suppress_hydration_warning =
                parse_bool("SITE_SUPPRESS_HYDRATION_WARNING", &value)?;
        }

        // An empty token turns verification off for deployments that
        // aren't the registered site.
        if let Some(token) = lookup("SITE_VERIFICATION_TOKEN") {
            config.verification = (!token.is_empty()).then(|| VerificationTag {
                content: token,
                ..VerificationTag::default()
            });
        }
        if let Some(name) = lookup("SITE_VERIFICATION_NAME")
            && let Some(tag) = &mut config.verification
        {
            tag.name = name;
        }

        if let Some(family) = lookup("SITE_FONT_FAMILY") {
            config.font.family = family;
        }
        if let Some(subsets) = lookup("SITE_FONT_SUBSETS") {
            config.font.subsets = subsets
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(value) = lookup("THEME_ATTRIBUTE") {
            config.theme.attribute = parse("THEME_ATTRIBUTE", &value)?;
        }
        if let Some(value) = lookup("THEME_DEFAULT") {
            config.theme.default_theme = parse::<Theme>("THEME_DEFAULT", &value)?;
        }
        if let Some(value) = lookup("THEME_ENABLE_SYSTEM") {
            config.theme.enable_system =
                parse_bool("THEME_ENABLE_SYSTEM", &value)?;
        }
        if let Some(key) = lookup("THEME_STORAGE_KEY") {
            if key.is_empty() {
                return Err(ConfigError::Invalid {
                    key: "THEME_STORAGE_KEY",
                    reason: "must not be empty".to_string(),
                });
            }
            config.theme.storage_key = key;
        }
        if let Some(value) = lookup("THEME_COLOR_SCHEME") {
            config.theme.enable_color_scheme =
                parse_bool("THEME_COLOR_SCHEME", &value)?;
        }

        if let Some(value) = lookup("ANALYTICS_ENABLED") {
            config.analytics.enabled = parse_bool("ANALYTICS_ENABLED", &value)?;
        }
        if let Some(value) = lookup("ANALYTICS_MODE") {
            config.analytics.mode =
                parse::<AnalyticsMode>("ANALYTICS_MODE", &value)?;
        }
        config.analytics.script_src =
            lookup("ANALYTICS_SCRIPT_SRC").filter(|s| !s.is_empty());
        config.analytics.endpoint =
            lookup("ANALYTICS_ENDPOINT").filter(|s| !s.is_empty());

        Ok(config)
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides baked in when the bundle was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "SITE_TITLE" => option_env!("SITE_TITLE"),
        "SITE_DESCRIPTION" => option_env!("SITE_DESCRIPTION"),
        "SITE_LANG" => option_env!("SITE_LANG"),
        "SITE_SUPPRESS_HYDRATION_WARNING" => {
            option_env!("SITE_SUPPRESS_HYDRATION_WARNING")
        }
        "SITE_VERIFICATION_NAME" => option_env!("SITE_VERIFICATION_NAME"),
        "SITE_VERIFICATION_TOKEN" => option_env!("SITE_VERIFICATION_TOKEN"),
        "SITE_FONT_FAMILY" => option_env!("SITE_FONT_FAMILY"),
        "SITE_FONT_SUBSETS" => option_env!("SITE_FONT_SUBSETS"),
        "THEME_ATTRIBUTE" => option_env!("THEME_ATTRIBUTE"),
        "THEME_DEFAULT" => option_env!("THEME_DEFAULT"),
        "THEME_ENABLE_SYSTEM" => option_env!("THEME_ENABLE_SYSTEM"),
        "THEME_STORAGE_KEY" => option_env!("THEME_STORAGE_KEY"),
        "THEME_COLOR_SCHEME" => option_env!("THEME_COLOR_SCHEME"),
        "ANALYTICS_ENABLED" => option_env!("ANALYTICS_ENABLED"),
        "ANALYTICS_MODE" => option_env!("ANALYTICS_MODE"),
        "ANALYTICS_SCRIPT_SRC" => option_env!("ANALYTICS_SCRIPT_SRC"),
        "ANALYTICS_ENDPOINT" => option_env!("ANALYTICS_ENDPOINT"),
        _ => None,
    };
    value.map(str::to_string)
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            key,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}

/// Config shared through context by the root layout.
pub type SiteConfigContext = Rc<SiteConfig>;

#[hook]
pub fn use_site_config() -> SiteConfigContext {
    use_context::<SiteConfigContext>()
        .expect("use_site_config must be used within a RootLayout")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn no_overrides_is_the_deployed_site() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.document.lang, "ko");
        assert!(config.document.suppress_hydration_warning);
        assert_eq!(
            config.verification.as_ref().map(|t| t.content.as_str()),
            Some("1c228702dce91feee327f70e2250be0df6f50141")
        );
        assert_eq!(config.theme, ThemeOptions::default());
    }

    #[test]
    fn overrides_apply() {
        let config = from_pairs(&[
            ("SITE_TITLE", "Coco"),
            ("SITE_LANG", "en"),
            ("SITE_VERIFICATION_TOKEN", "abc"),
            ("SITE_FONT_SUBSETS", "latin, latin-ext,"),
            ("THEME_ATTRIBUTE", "data-theme"),
            ("THEME_DEFAULT", "dark"),
            ("THEME_ENABLE_SYSTEM", "false"),
            ("ANALYTICS_MODE", "production"),
            ("ANALYTICS_ENDPOINT", "https://stats.example.com"),
        ])
        .unwrap();

        assert_eq!(config.metadata.title, "Coco");
        assert_eq!(config.document.lang, "en");
        let tag = config.verification.unwrap();
        assert_eq!(tag.name, "naver-site-verification");
        assert_eq!(tag.content, "abc");
        assert_eq!(config.font.subsets, vec!["latin", "latin-ext"]);
        assert_eq!(
            config.theme.attribute,
            ThemeAttribute::Data("data-theme".into())
        );
        assert_eq!(config.theme.default_theme, Theme::Dark);
        assert!(!config.theme.enable_system);
        assert_eq!(config.analytics.mode, AnalyticsMode::Production);
        assert_eq!(
            config.analytics.endpoint.as_deref(),
            Some("https://stats.example.com")
        );
    }

    #[test]
    fn empty_token_disables_verification() {
        let config = from_pairs(&[("SITE_VERIFICATION_TOKEN", "")]).unwrap();
        assert_eq!(config.verification, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = from_pairs(&[("ANALYTICS_ENABLED", "maybe")]).unwrap_err();
        assert!(err.to_string().starts_with("ANALYTICS_ENABLED:"));

        let err = from_pairs(&[("THEME_DEFAULT", "sepia")]).unwrap_err();
        assert!(err.to_string().contains("sepia"));

        assert!(from_pairs(&[("THEME_STORAGE_KEY", "")]).is_err());
        assert!(from_pairs(&[("THEME_ATTRIBUTE", "style")]).is_err());
    }
}
