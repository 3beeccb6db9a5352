//! The full state of a [`UrlBuilder`](crate::UrlBuilder).

use crate::query::QueryParams;
use crate::user_info::UserInfo;

/// Every component a [`UrlBuilder`](crate::UrlBuilder) renders.
///
/// `Settings` owns all of its data, so a snapshot taken with
/// [`UrlBuilder::settings`](crate::UrlBuilder::settings) never shares
/// state with the builder it came from.
///
/// Fields are public and unvalidated. [`UrlBuilder::build`](crate::UrlBuilder::build)
/// rejects an empty `scheme`; everything else renders as given.
///
/// # Examples
///
/// ```
/// use url_builder::{Settings, UrlBuilder};
///
/// let mut settings = Settings::new("https");
/// settings.host = Some("example.com".to_string());
/// settings.paths.push("docs".to_string());
///
/// let url = UrlBuilder::new("http").with_settings(settings).build().unwrap();
/// assert_eq!(url, "https://example.com/docs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Scheme, rendered before the first `:`
    pub scheme: String,
    /// Credentials, rendered only when `host` is set
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_info: Option<UserInfo>,
    /// Host; its presence gates the whole authority section
    #[cfg_attr(feature = "serde", serde(default))]
    pub host: Option<String>,
    /// Port, rendered only when `host` is set
    #[cfg_attr(feature = "serde", serde(default))]
    pub port: Option<u32>,
    /// Path segments in insertion order
    #[cfg_attr(feature = "serde", serde(default))]
    pub paths: Vec<String>,
    /// Query parameters in insertion order
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: QueryParams,
    /// Fragment, rendered without encoding
    #[cfg_attr(feature = "serde", serde(default))]
    pub fragment: Option<String>,
}

impl Settings {
    /// Creates settings with the given scheme and nothing else set.
    #[must_use]
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            user_info: None,
            host: None,
            port: None,
            paths: Vec::new(),
            parameters: QueryParams::new(),
            fragment: None,
        }
    }

    /// Returns true if an authority section will be rendered.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.host.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_only_scheme() {
        let settings = Settings::new("https");
        assert_eq!(settings.scheme, "https");
        assert!(settings.user_info.is_none());
        assert!(settings.host.is_none());
        assert!(settings.port.is_none());
        assert!(settings.paths.is_empty());
        assert!(settings.parameters.is_empty());
        assert!(settings.fragment.is_none());
    }

    #[test]
    fn authority_follows_host() {
        let mut settings = Settings::new("https");
        settings.port = Some(8080);
        assert!(!settings.has_authority());

        settings.host = Some(String::new());
        assert!(settings.has_authority());
    }

    #[test]
    fn clone_is_independent() {
        let mut original = Settings::new("https");
        original.paths.push("dir".to_string());
        original.user_info = Some(UserInfo::with_password("admin", "pass"));

        let mut copy = original.clone();
        copy.paths.push("subdir".to_string());
        copy.parameters.push("a", "1");
        copy.user_info = Some(UserInfo::new("guest"));

        assert_eq!(original.paths, vec!["dir".to_string()]);
        assert!(original.parameters.is_empty());
        assert_eq!(
            original.user_info.as_ref().map(UserInfo::user_name),
            Some("admin")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let mut settings = Settings::new("https");
        settings.user_info = Some(UserInfo::with_password("admin", "pass"));
        settings.host = Some("localhost".to_string());
        settings.port = Some(0);
        settings.paths = vec!["dir".to_string(), String::new()];
        settings.parameters.push("a b", "c&d");
        settings.fragment = Some(String::new());

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, parsed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_missing_fields_default() {
        let parsed: Settings = serde_json::from_str(r#"{"scheme":"mailto"}"#).unwrap();
        assert_eq!(parsed, Settings::new("mailto"));
    }
}
