//! Transport selection.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use url::Url;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Http,
    Filesystem,
}

impl TransportKind {
    /// The transport used when nothing else is configured.
    ///
    /// - On WASM, this is always [`TransportKind::Http`].
    /// - On native platforms, this is [`TransportKind::Filesystem`] if a filesystem runtime is
    ///   compiled in, otherwise [`TransportKind::Http`].
    pub fn platform_default() -> Self {
        if cfg!(all(not(target_arch = "wasm32"), any(feature = "tokio", feature = "smol"))) {
            Self::Filesystem
        } else {
            Self::Http
        }
    }
}

impl Default for TransportKind {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Http => "http",
            Self::Filesystem => "filesystem",
        })
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub transport: TransportKind,

    /// Relative identifiers are resolved against this before fetching. HTTP only.
    pub base_url: Option<Url>,

    /// Relative identifiers are joined onto this directory. Filesystem only.
    pub root: Option<PathBuf>,
}

impl Config {
    pub fn http() -> Self {
        Self {
            transport: TransportKind::Http,
            ..Default::default()
        }
    }

    pub fn filesystem() -> Self {
        Self {
            transport: TransportKind::Filesystem,
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_http_with_base() {
        let config: Config = serde_json::from_str(
            r#"{ "transport": "http", "base_url": "https://example.test/assets/" }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config::http().with_base_url(Url::parse("https://example.test/assets/").unwrap())
        );
    }

    #[test]
    fn deserializes_filesystem_with_root() {
        let config: Config =
            serde_json::from_str(r#"{ "transport": "filesystem", "root": "/srv/data" }"#).unwrap();

        assert_eq!(config.transport, TransportKind::Filesystem);
        assert_eq!(config.root, Some(PathBuf::from("/srv/data")));
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.transport, TransportKind::platform_default());
    }

    #[test]
    fn rejects_unknown_transport() {
        assert!(serde_json::from_str::<Config>(r#"{ "transport": "ftp" }"#).is_err());
    }

    #[test]
    fn kind_displays_lowercase() {
        assert_eq!(TransportKind::Http.to_string(), "http");
        assert_eq!(TransportKind::Filesystem.to_string(), "filesystem");
    }
}
