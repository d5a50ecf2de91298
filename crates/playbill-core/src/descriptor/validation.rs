//! Descriptor validation.
//!
//! Validation never fails hard; it produces a [`ValidationReport`] the
//! caller inspects. Errors mark descriptors a host must refuse, warnings
//! mark things worth fixing before shipping.

use super::types::Descriptor;

/// Validation issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Must fix - a host refuses descriptors with errors.
    Error,
    /// Should fix but not blocking.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A single issue found during validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity level of the issue.
    pub severity: Severity,
    /// Field the issue was found in (e.g. "id", "display.fullscreen").
    pub field: String,
    /// Human-readable description of the issue.
    pub message: String,
}

impl ValidationIssue {
    /// Creates an error issue.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a warning issue.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.field, self.message)
    }
}

/// Result of validating a descriptor.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// All issues found.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if validation passed (no errors).
    ///
    /// Warnings do not affect validity.
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Returns `true` if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns all error issues.
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .collect()
    }

    /// Returns all warning issues.
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .collect()
    }

    /// Adds an error issue.
    pub fn add_error(&mut self, field: &str, message: &str) {
        self.issues.push(ValidationIssue::error(field, message));
    }

    /// Adds a warning issue.
    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.issues.push(ValidationIssue::warning(field, message));
    }
}

/// Validate a descriptor against host requirements.
pub fn validate_descriptor(descriptor: &Descriptor) -> ValidationReport {
    let mut report = ValidationReport::new();

    if is_blank(&descriptor.id) {
        report.add_error("id", "Application id must not be empty");
    } else if !validate_app_id(&descriptor.id) {
        report.add_error(
            "id",
            "Application id must be a reverse-domain identifier (e.g. com.example.app)",
        );
    }

    if is_blank(&descriptor.name) {
        report.add_error("name", "Application name must not be empty");
    } else if descriptor.name != descriptor.name.trim() {
        report.add_warning("name", "Application name has leading or trailing whitespace");
    }

    if is_blank(&descriptor.version) {
        report.add_error("version", "Version must not be empty");
    } else if semver::Version::parse(&descriptor.version).is_err() {
        report.add_error("version", "Version is not a valid semantic version");
    }

    if is_blank(&descriptor.guid) {
        report.add_error("guid", "GUID must not be empty");
    } else if uuid::Uuid::parse_str(&descriptor.guid).is_err() {
        report.add_error("guid", "GUID is not a valid UUID");
    }

    if is_blank(&descriptor.url) {
        report.add_warning("url", "No homepage URL set");
    } else if !validate_url(&descriptor.url) {
        report.add_error("url", "Homepage URL is not a valid http(s) URL");
    }

    if descriptor.copyright.is_none() {
        report.add_warning("copyright", "No copyright notice set, one will be derived");
    }

    if !descriptor.icon.ends_with(".png") {
        report.add_warning("icon", "Icon is not a .png resource");
    }

    report
}

/// Validates a reverse-domain application identifier.
///
/// Requires at least two dot-separated segments of ASCII alphanumerics
/// (underscores allowed), none starting with a digit.
pub fn validate_app_id(id: &str) -> bool {
    let segments: Vec<&str> = id.split('.').collect();
    if segments.len() < 2 {
        return false;
    }

    segments.iter().all(|segment| {
        !segment.is_empty()
            && !segment.starts_with(|c: char| c.is_ascii_digit())
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

/// Validates that a URL is a plausible http(s) URL.
pub fn validate_url(url: &str) -> bool {
    let url = url.trim();

    let rest = if let Some(rest) = url.strip_prefix("https://") {
        rest
    } else if let Some(rest) = url.strip_prefix("http://") {
        rest
    } else {
        return false;
    };

    let host_end = rest.find('/').unwrap_or(rest.len());
    let host = &rest[..host_end];
    if host.is_empty() {
        return false;
    }

    // Strip a port, if any.
    let host = host.rsplit_once(':').map_or(host, |(h, _)| h);

    host == "localhost" || (host.contains('.') && !host.starts_with('.') && !host.ends_with('.'))
}

/// Checks if a string is empty or contains only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_descriptor() -> Descriptor {
        Descriptor {
            id: "com.example.skylark".to_string(),
            name: "Skylark".to_string(),
            version: "1.0.0".to_string(),
            publisher: "Example Labs".to_string(),
            url: "https://skylark.example.com".to_string(),
            copyright: Some("2026 by Example Labs".to_string()),
            guid: "e0134140-a395-46b8-8f20-31172990b391".to_string(),
            ..Descriptor::default()
        }
    }

    #[test]
    fn test_valid_descriptor_is_clean() {
        let report = validate_descriptor(&valid_descriptor());
        assert!(report.is_valid());
        assert!(report.is_clean());
    }

    #[test]
    fn test_blank_required_fields_are_errors() {
        let report = validate_descriptor(&Descriptor::default());
        assert!(!report.is_valid());

        let fields: Vec<&str> = report.errors().iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"id"));
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"version"));
        assert!(fields.contains(&"guid"));
    }

    #[test]
    fn test_bad_id_rejected() {
        let mut descriptor = valid_descriptor();
        for bad in ["single", "com..app", "com.1app", "com.app!", ".com.app"] {
            descriptor.id = bad.to_string();
            let report = validate_descriptor(&descriptor);
            assert!(!report.is_valid(), "expected {bad:?} to be rejected");
        }
    }

    #[test]
    fn test_bad_version_rejected() {
        let mut descriptor = valid_descriptor();
        descriptor.version = "1.0".to_string();
        assert!(!validate_descriptor(&descriptor).is_valid());
    }

    #[test]
    fn test_bad_guid_rejected() {
        let mut descriptor = valid_descriptor();
        descriptor.guid = "not-a-uuid".to_string();
        assert!(!validate_descriptor(&descriptor).is_valid());
    }

    #[test]
    fn test_missing_url_is_only_a_warning() {
        let mut descriptor = valid_descriptor();
        descriptor.url = String::new();
        let report = validate_descriptor(&descriptor);
        assert!(report.is_valid());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_non_png_icon_warns() {
        let mut descriptor = valid_descriptor();
        descriptor.icon = "appicon.svg".to_string();
        let report = validate_descriptor(&descriptor);
        assert!(report.is_valid());
        assert_eq!(report.warnings().len(), 1);
    }

    #[test]
    fn test_validate_app_id() {
        assert!(validate_app_id("com.example.app"));
        assert!(validate_app_id("org.example_labs.mobile2"));
        assert!(validate_app_id("io.app"));

        assert!(!validate_app_id("app"));
        assert!(!validate_app_id("com."));
        assert!(!validate_app_id("com.2app"));
        assert!(!validate_app_id("com.my-app"));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com"));
        assert!(validate_url("http://example.com/path"));
        assert!(validate_url("https://localhost:8080"));

        assert!(!validate_url("example.com"));
        assert!(!validate_url("ftp://example.com"));
        assert!(!validate_url("https://"));
        assert!(!validate_url(""));
    }
}
