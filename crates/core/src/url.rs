//! Site URL normalization.

/// Normalize a user-supplied website URL.
///
/// Prefixes `https://` unless the input already carries an explicit
/// `http://` or `https://` scheme. The value is otherwise passed through
/// untouched; reachability is not checked.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}
