use crate::types::NameKey;

/// Folds a security name into the key used by the name index.
///
/// Only simple lowercase folding is applied. Whitespace and punctuation are preserved, so
/// `"Acme Corp"` and `"Acme Corp."` remain distinct keys.
///
/// ### Example:
/// ```rust
/// use symbol_reconciler::normalize_security_name;
///
/// assert_eq!(normalize_security_name("Acme CORP"), "acme corp");
/// assert_eq!(normalize_security_name(""), "");
/// ```
pub fn normalize_security_name(security_name: &str) -> NameKey {
    security_name.to_lowercase()
}
