/// Naming rules and candidate list used by [`StylesheetLoader`](crate::StylesheetLoader).
///
/// The defaults load `./style.css` as the shared sheet and `./<page>.css` for
/// a page served at `.../<page>.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LoaderConfig {
    /// Shared stylesheet names, tried in order until one loads.
    pub generic_candidates: Vec<String>,
    /// Prefix joined to every stylesheet name to form its `href`.
    pub base_path: String,
    pub generic_id_prefix: String,
    pub page_id_prefix: String,
    /// Stripped from the last path segment when deriving the page name.
    pub page_suffix: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            generic_candidates: vec!["style.css".to_string()],
            base_path: "./".to_string(),
            generic_id_prefix: "generic-css-".to_string(),
            page_id_prefix: "page-css-".to_string(),
            page_suffix: ".html".to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generic_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic_candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_generic_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.generic_id_prefix = prefix.into();
        self
    }

    pub fn with_page_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.page_id_prefix = prefix.into();
        self
    }

    pub fn with_page_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.page_suffix = suffix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoaderConfig::default();
        assert_eq!(config.generic_candidates, vec!["style.css".to_string()]);
        assert_eq!(config.base_path, "./");
        assert_eq!(config.generic_id_prefix, "generic-css-");
        assert_eq!(config.page_id_prefix, "page-css-");
        assert_eq!(config.page_suffix, ".html");
    }

    #[test]
    fn test_builder() {
        let config = LoaderConfig::new()
            .with_generic_candidates(["base.css", "theme.css"])
            .with_base_path("/assets/")
            .with_page_suffix(".htm");
        assert_eq!(config.generic_candidates.len(), 2);
        assert_eq!(config.base_path, "/assets/");
        assert_eq!(config.page_suffix, ".htm");
        assert_eq!(config.page_id_prefix, "page-css-");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: LoaderConfig =
            serde_json::from_str(r#"{ "basePath": "/css/", "genericCandidates": [] }"#).unwrap();
        assert_eq!(config.base_path, "/css/");
        assert!(config.generic_candidates.is_empty());
        assert_eq!(config.page_id_prefix, "page-css-");
    }
}
