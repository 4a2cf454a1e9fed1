//! Web font wiring. The font itself is served by Google Fonts; we only
//! produce the stylesheet link and a stable class that applies the family.

const STYLESHEET_BASE: &str = "https://fonts.googleapis.com/css2";

/// Generic families appended after the web font while it loads or if it
/// never does.
const FALLBACK_STACK: &str =
    "ui-sans-serif, system-ui, -apple-system, \"Segoe UI\", sans-serif";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleFont {
    pub family: String,
    pub subsets: Vec<String>,
}

impl Default for GoogleFont {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            subsets: vec!["latin".to_string()],
        }
    }
}

impl GoogleFont {
    /// Class applied to `<body>`, e.g. `font-inter`. Depends only on the
    /// family name, so it is the same on every build. Only `[a-z0-9-]`
    /// survive.
    pub fn class_name(&self) -> String {
        let slug = self
            .family
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
                    .map(|c| c.to_ascii_lowercase())
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        format!("font-{slug}")
    }

    pub fn stylesheet_href(&self) -> String {
        let family = self.family.split_whitespace().collect::<Vec<_>>().join("+");
        let mut href = format!("{STYLESHEET_BASE}?family={family}&display=swap");
        if !self.subsets.is_empty() {
            href.push_str("&subset=");
            href.push_str(&self.subsets.join(","));
        }
        href
    }

    /// The rule that makes [`class_name`](Self::class_name) mean something.
    /// Only letters, digits, spaces and dashes of the family survive in the
    /// selector and the quoted name, so the rule can be inlined in a
    /// `<style>` element.
    pub fn css_rule(&self) -> String {
        let family: String = self
            .family
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
            .collect();
        format!(
            ".{}{{font-family:\"{family}\",{FALLBACK_STACK}}}",
            self.class_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inter_latin() {
        let font = GoogleFont::default();
        assert_eq!(font.class_name(), "font-inter");
        assert_eq!(
            font.stylesheet_href(),
            "https://fonts.googleapis.com/css2?family=Inter&display=swap&subset=latin"
        );
        assert!(font.css_rule().starts_with(".font-inter{font-family:\"Inter\","));
    }

    #[test]
    fn multi_word_family() {
        let font = GoogleFont {
            family: "Noto Sans KR".into(),
            subsets: vec![],
        };
        assert_eq!(font.class_name(), "font-noto-sans-kr");
        assert_eq!(
            GoogleFont {
                family: "Fira Code{}".into(),
                subsets: vec![],
            }
            .class_name(),
            "font-fira-code"
        );
        assert_eq!(
            font.stylesheet_href(),
            "https://fonts.googleapis.com/css2?family=Noto+Sans+KR&display=swap"
        );
    }
}
