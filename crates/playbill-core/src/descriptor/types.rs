//! Descriptor types.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::info::AppInfo;

/// An application descriptor.
///
/// Missing optional fields fall back to framework defaults; required
/// fields left blank are caught by
/// [`crate::descriptor::validate_descriptor`], not at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Descriptor {
    /// Reverse-domain application identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Display version.
    pub version: String,

    /// Publisher name.
    pub publisher: String,

    /// Homepage URL.
    pub url: String,

    /// Copyright notice. Derived from the current year and publisher
    /// when absent.
    pub copyright: Option<String>,

    /// Free-text description.
    pub description: String,

    /// Relative resource path of the application icon.
    pub icon: String,

    /// Whether usage analytics are enabled.
    pub analytics: bool,

    /// Stable unique identifier (UUID text form).
    pub guid: String,

    /// Display mode flags.
    pub display: DisplayConfig,
}

impl Default for Descriptor {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            version: String::new(),
            publisher: String::new(),
            url: String::new(),
            copyright: None,
            description: "No description provided".to_string(),
            icon: "appicon.png".to_string(),
            analytics: true,
            guid: String::new(),
            display: DisplayConfig::default(),
        }
    }
}

/// Display mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// Whether the application runs fullscreen.
    pub fullscreen: bool,

    /// Whether the navigation bar is hidden.
    pub nav_bar_hidden: bool,
}

impl Descriptor {
    /// Resolves the descriptor into an immutable [`AppInfo`] record.
    ///
    /// Resolution is infallible: it only copies fields and derives the
    /// copyright notice when none was given.
    pub fn resolve(&self) -> AppInfo {
        AppInfo::new(&self.id, &self.name, &self.version)
            .with_publisher(&self.publisher)
            .with_url(&self.url)
            .with_copyright(self.copyright.clone().unwrap_or_else(|| self.derived_copyright()))
            .with_description(&self.description)
            .with_icon(&self.icon)
            .with_analytics(self.analytics)
            .with_guid(&self.guid)
            .with_fullscreen(self.display.fullscreen)
            .with_nav_bar_hidden(self.display.nav_bar_hidden)
    }

    fn derived_copyright(&self) -> String {
        let year = chrono::Utc::now().year();
        if self.publisher.trim().is_empty() {
            year.to_string()
        } else {
            format!("{} by {}", year, self.publisher)
        }
    }
}
