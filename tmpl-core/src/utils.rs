//! Shared string utilities for name derivation.

/// Split a name at its first `.` (e.g., "foo.tar.gz" -> ("foo", "tar.gz"))
pub fn split_first_dot(s: &str) -> Option<(&str, &str)> {
    s.split_once('.')
}

/// Convert a base name to a header guard token (e.g., "my_lib" -> "MY_LIB_H")
///
/// Characters are uppercased as-is; no identifier validation happens here.
pub fn to_guard_token(base: &str) -> String {
    let mut token = base.to_uppercase();
    token.push_str("_H");
    token
}
