/// Site-wide head metadata: `<title>` and `<meta name="description">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: "코코의 테크기록".to_string(),
            description: "코코의 테크 기록블로그".to_string(),
        }
    }
}

impl Metadata {
    /// Title for a page: `"About | 코코의 테크기록"`, or the bare site title
    /// for the front page.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) => format!("{page} | {}", self.title),
            None => self.title.clone(),
        }
    }
}

/// Site-ownership verification tag, emitted verbatim as
/// `<meta name="{name}" content="{content}">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationTag {
    pub name: String,
    pub content: String,
}

pub const NAVER_SITE_VERIFICATION: &str = "naver-site-verification";

impl Default for VerificationTag {
    fn default() -> Self {
        Self {
            name: NAVER_SITE_VERIFICATION.to_string(),
            content: "1c228702dce91feee327f70e2250be0df6f50141".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_prefixes_page_name() {
        let metadata = Metadata::default();
        assert_eq!(metadata.page_title(None), "코코의 테크기록");
        assert_eq!(metadata.page_title(Some("About")), "About | 코코의 테크기록");
    }
}
