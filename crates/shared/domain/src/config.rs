use crate::content::ContactInfo;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Settings for the `vls` command-line renderer.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub contact: ContactOverrides,
}

/// Arc-wrapped config, cheap to clone into subcommands.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the rendered document goes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Enables rolling file logs when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

/// Replacements for the published deep-link targets.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactOverrides {
    pub whatsapp_url: Option<String>,
    pub email: Option<String>,
}

impl ContactOverrides {
    /// Returns `contact` with every configured override applied.
    #[must_use]
    pub fn apply(&self, mut contact: ContactInfo) -> ContactInfo {
        if let Some(url) = &self.whatsapp_url {
            contact.whatsapp_url.clone_from(url);
        }
        if let Some(email) = &self.email {
            contact.email.clone_from(email);
        }
        contact
    }
}

// --- Default ---

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("dist/index.html") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.output.path, PathBuf::from("dist/index.html"));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.directory.is_none());
        assert!(config.contact.email.is_none());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"logging": {"json": true}, "output": {"path": "out.html"}}"#)
                .unwrap();
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.output.path, PathBuf::from("out.html"));
    }

    #[test]
    fn overrides_replace_only_configured_fields() {
        let overrides = ContactOverrides {
            whatsapp_url: Some("https://wa.me/15550001111".to_owned()),
            email: None,
        };
        let contact = overrides.apply(ContactInfo::default());
        assert_eq!(contact.whatsapp_url, "https://wa.me/15550001111");
        assert_eq!(contact.email, "contacto@venezuelanlegalservices.com");
    }

    #[test]
    fn deref_mut_detaches_clones() {
        let original = SiteConfig::default();
        let mut edited = original.clone();
        edited.output.path = PathBuf::from("public/index.html");
        assert_eq!(original.output.path, PathBuf::from("dist/index.html"));
        assert_eq!(edited.output.path, PathBuf::from("public/index.html"));
    }
}
