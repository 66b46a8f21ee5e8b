//! JSONPath locator strings.
//!
//! Paths start at [`ROOT`] and grow one segment per structural level:
//! `.key` for object members and `[index]` for array elements. Keys are
//! embedded verbatim, with no escaping of `.` or `[` — a key literally named
//! `user.email` yields `$.user.email`, indistinguishable from the nested
//! form. This is a known, deliberate ambiguity of the locator syntax, and
//! the pattern matcher inherits it.

/// The path of the top-level value.
pub(crate) const ROOT: &str = "$";

/// Locator of the member `key` inside the value at `parent`.
pub(crate) fn key_path(parent: &str, key: &str) -> String {
    let mut path = String::with_capacity(parent.len() + key.len() + 1);
    path.push_str(parent);
    path.push('.');
    path.push_str(key);
    path
}

/// Locator of the element at `index` inside the value at `parent`.
pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
