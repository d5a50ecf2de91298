//! Application metadata records and the host capability trait.

use serde::{Deserialize, Serialize};
use tracing::debug;

use playbill_properties::PropertyStore;

use crate::deploy::DeployType;

/// Property key the provider writes its deploy type under at installation.
pub const DEPLOY_TYPE_PROPERTY: &str = "app.deploytype";

/// The capability surface a host runtime queries for application metadata.
///
/// Every accessor is pure: no arguments, no side effects, no failure
/// modes, and stable across repeated calls in any order.
pub trait AppInfoProvider: Send + Sync {
    /// Reverse-domain application identifier.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Display version.
    fn version(&self) -> &str;

    /// Publisher name.
    fn publisher(&self) -> &str;

    /// Homepage URL.
    fn url(&self) -> &str;

    /// Copyright notice.
    fn copyright(&self) -> &str;

    /// Free-text description.
    fn description(&self) -> &str;

    /// Relative resource path of the application icon.
    fn icon(&self) -> &str;

    /// Whether usage analytics are enabled.
    fn analytics_enabled(&self) -> bool;

    /// Stable unique identifier.
    fn guid(&self) -> &str;

    /// Whether the application runs fullscreen.
    fn fullscreen(&self) -> bool;

    /// Whether the navigation bar is hidden.
    fn nav_bar_hidden(&self) -> bool;
}

/// Immutable application metadata.
///
/// All fields are fixed at construction and never recomputed. Records are
/// normally produced by [`crate::Descriptor::resolve`]; the `with_*`
/// constructors exist for hosts that assemble metadata directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    id: String,
    name: String,
    version: String,
    publisher: String,
    url: String,
    copyright: String,
    description: String,
    icon: String,
    analytics_enabled: bool,
    guid: String,
    fullscreen: bool,
    nav_bar_hidden: bool,
}

impl AppInfo {
    /// Creates a record with the given identity and framework defaults
    /// for everything else.
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            publisher: String::new(),
            url: String::new(),
            copyright: String::new(),
            description: "No description provided".to_string(),
            icon: "appicon.png".to_string(),
            analytics_enabled: true,
            guid: String::new(),
            fullscreen: false,
            nav_bar_hidden: false,
        }
    }

    /// Sets the publisher.
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    /// Sets the homepage URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the copyright notice.
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the icon path.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the analytics flag.
    pub fn with_analytics(mut self, enabled: bool) -> Self {
        self.analytics_enabled = enabled;
        self
    }

    /// Sets the stable unique identifier.
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = guid.into();
        self
    }

    /// Sets the fullscreen flag.
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Sets the navigation-bar-hidden flag.
    pub fn with_nav_bar_hidden(mut self, hidden: bool) -> Self {
        self.nav_bar_hidden = hidden;
        self
    }
}

impl AppInfoProvider for AppInfo {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn publisher(&self) -> &str {
        &self.publisher
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn copyright(&self) -> &str {
        &self.copyright
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn icon(&self) -> &str {
        &self.icon
    }

    fn analytics_enabled(&self) -> bool {
        self.analytics_enabled
    }

    fn guid(&self) -> &str {
        &self.guid
    }

    fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn nav_bar_hidden(&self) -> bool {
        self.nav_bar_hidden
    }
}

/// The provider a host installs once at startup.
///
/// Installation takes a handle to the host-owned property store and, as
/// its single side effect, writes the deploy type literal under
/// [`DEPLOY_TYPE_PROPERTY`]. The provider is write-once then read-only
/// for its entire lifetime; accessors simply delegate to the wrapped
/// [`AppInfo`].
#[derive(Debug, Clone)]
pub struct StaticAppInfo {
    info: AppInfo,
    deploy_type: DeployType,
}

impl StaticAppInfo {
    /// Installs the provider, seeding the deploy type into `store`.
    ///
    /// The write happens exactly once, here; no accessor touches the
    /// store again.
    pub fn install(info: AppInfo, deploy_type: DeployType, store: &dyn PropertyStore) -> Self {
        store.set_string(DEPLOY_TYPE_PROPERTY, deploy_type.as_str());
        debug!(
            id = info.id.as_str(),
            deploy_type = deploy_type.as_str(),
            "app info provider installed"
        );
        Self { info, deploy_type }
    }

    /// Returns the wrapped metadata record.
    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    /// Returns the deploy type this provider was installed with.
    pub fn deploy_type(&self) -> DeployType {
        self.deploy_type
    }
}

impl AppInfoProvider for StaticAppInfo {
    fn id(&self) -> &str {
        self.info.id()
    }

    fn name(&self) -> &str {
        self.info.name()
    }

    fn version(&self) -> &str {
        self.info.version()
    }

    fn publisher(&self) -> &str {
        self.info.publisher()
    }

    fn url(&self) -> &str {
        self.info.url()
    }

    fn copyright(&self) -> &str {
        self.info.copyright()
    }

    fn description(&self) -> &str {
        self.info.description()
    }

    fn icon(&self) -> &str {
        self.info.icon()
    }

    fn analytics_enabled(&self) -> bool {
        self.info.analytics_enabled()
    }

    fn guid(&self) -> &str {
        self.info.guid()
    }

    fn fullscreen(&self) -> bool {
        self.info.fullscreen()
    }

    fn nav_bar_hidden(&self) -> bool {
        self.info.nav_bar_hidden()
    }
}
