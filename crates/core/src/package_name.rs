//! Package name derivation.

use serde::Serialize;
use std::fmt;

/// Fallback used when sanitization leaves nothing usable.
pub const DEFAULT_PACKAGE_NAME: &str = "myapp";

/// Namespace prefix for every generated application id.
pub const PACKAGE_PREFIX: &str = "com.websitetoapp";

/// A sanitized Android package name segment.
///
/// Invariant: non-empty and composed solely of lowercase ASCII alphanumerics.
/// The only constructor is [`PackageName::sanitize`], which upholds this.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    /// Derive a package name from a free-form display name.
    ///
    /// ASCII letters and digits are kept in their original order and
    /// lowercased; every other character is dropped. An input with no
    /// usable characters yields [`DEFAULT_PACKAGE_NAME`].
    pub fn sanitize(display_name: &str) -> Self {
        let name: String = display_name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if name.is_empty() {
            Self(DEFAULT_PACKAGE_NAME.to_string())
        } else {
            Self(name)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full application id, e.g. `com.websitetoapp.demoapp`.
    pub fn application_id(&self) -> String {
        format!("{PACKAGE_PREFIX}.{}", self.0)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_punctuation_and_lowercases() {
        assert_eq!(PackageName::sanitize("My App! 2.0").as_str(), "myapp20");
    }

    #[test]
    fn sanitize_falls_back_to_default() {
        assert_eq!(PackageName::sanitize("!!!").as_str(), DEFAULT_PACKAGE_NAME);
        assert_eq!(PackageName::sanitize("").as_str(), DEFAULT_PACKAGE_NAME);
        assert_eq!(PackageName::sanitize("   ").as_str(), DEFAULT_PACKAGE_NAME);
    }

    #[test]
    fn sanitize_drops_non_ascii() {
        assert_eq!(PackageName::sanitize("Café ☕").as_str(), "caf");
        assert_eq!(PackageName::sanitize("日本語").as_str(), DEFAULT_PACKAGE_NAME);
    }

    #[test]
    fn sanitize_output_is_lowercase_alphanumeric() {
        for input in ["Hello World", "ABC-123", "a b c", "x!@#$%^&*()y"] {
            let name = PackageName::sanitize(input);
            assert!(!name.as_str().is_empty());
            assert!(
                name.as_str()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unexpected character in {:?}",
                name
            );
        }
    }

    #[test]
    fn application_id_carries_prefix() {
        let name = PackageName::sanitize("Demo App");
        assert_eq!(name.application_id(), "com.websitetoapp.demoapp");
    }
}
