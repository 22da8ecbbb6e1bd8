// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers for dot-separated configuration key paths.
//!
//! The store itself is flat; hierarchy only exists as a naming convention such
//! as `bst.feature.leaf` or, for per-instance settings, `bst.instance.<name>.leaf`.

use std::borrow::Cow;

/// Root namespace used by the stock configuration files.
pub const DEFAULT_ROOT: &str = "bst";

/// Path segment that introduces a named instance, including its trailing dot.
pub const INSTANCE_MARKER: &str = "instance.";

/// Returns the segment before the first `.`, or `None` for undotted keys.
///
/// # Examples
///
/// ```
/// use bstkcfg::domain::key::top_level_segment;
///
/// assert_eq!(top_level_segment("bst.instance.Pie64.dpi"), Some("bst"));
/// assert_eq!(top_level_segment("standalone"), None);
/// ```
pub fn top_level_segment(key: &str) -> Option<&str> {
    key.find('.').map(|pos| &key[..pos])
}

/// Appends a trailing `.` to a non-empty prefix that lacks one.
///
/// # Examples
///
/// ```
/// use bstkcfg::domain::key::normalize_prefix;
///
/// assert_eq!(normalize_prefix("bst.instance"), "bst.instance.");
/// assert_eq!(normalize_prefix("bst."), "bst.");
/// assert_eq!(normalize_prefix(""), "");
/// ```
pub fn normalize_prefix(prefix: &str) -> Cow<'_, str> {
    if prefix.is_empty() || prefix.ends_with('.') {
        Cow::Borrowed(prefix)
    } else {
        Cow::Owned(format!("{}.", prefix))
    }
}

/// Splits a key of the form `...instance.<name>.<rest>` into `(name, rest)`.
///
/// The marker must start a path segment, so `bst.myinstance.x.y` does not
/// match. Keys without a `.` after the name, or with an empty name, return
/// `None`.
///
/// # Examples
///
/// ```
/// use bstkcfg::domain::key::split_instance;
///
/// assert_eq!(split_instance("bst.instance.Pie64.fb_width"), Some(("Pie64", "fb_width")));
/// assert_eq!(split_instance("bst.instance.Pie64"), None);
/// assert_eq!(split_instance("bst.country"), None);
/// ```
pub fn split_instance(key: &str) -> Option<(&str, &str)> {
    let (start, _) = key
        .match_indices(INSTANCE_MARKER)
        .find(|(pos, _)| *pos == 0 || key.as_bytes()[pos - 1] == b'.')?;

    let tail = &key[start + INSTANCE_MARKER.len()..];
    let (name, rest) = tail.split_once('.')?;
    if name.is_empty() {
        return None;
    }
    Some((name, rest))
}

/// Builds the key prefix shared by every setting of one instance.
///
/// # Examples
///
/// ```
/// use bstkcfg::domain::key::{instance_prefix, DEFAULT_ROOT};
///
/// assert_eq!(instance_prefix(DEFAULT_ROOT, "Rvc64"), "bst.instance.Rvc64.");
/// assert_eq!(instance_prefix("", "Rvc64"), "instance.Rvc64.");
/// ```
pub fn instance_prefix(root: &str, name: &str) -> String {
    format!("{}{}{}.", normalize_prefix(root), INSTANCE_MARKER, name)
}

/// Returns `true` if `key` can be written as a line and read back unchanged.
///
/// Keys are written unescaped, so a storable key is non-empty, contains no
/// `=` or line break, has no surrounding ASCII whitespace and does not start
/// with `#`.
///
/// # Examples
///
/// ```
/// use bstkcfg::domain::key::is_storable_key;
///
/// assert!(is_storable_key("bst.instance.Pie64.dpi"));
/// assert!(!is_storable_key(""));
/// assert!(!is_storable_key("a=b"));
/// assert!(!is_storable_key("# note"));
/// ```
pub fn is_storable_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('#')
        && !key.contains(['=', '\n', '\r'])
        && key.trim_matches(|c: char| c.is_ascii_whitespace()).len() == key.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_segment() {
        assert_eq!(top_level_segment("a.b.c"), Some("a"));
        assert_eq!(top_level_segment(".leading"), Some(""));
        assert_eq!(top_level_segment("nodots"), None);
        assert_eq!(top_level_segment(""), None);
    }

    #[test]
    fn test_normalize_prefix_borrows_when_unchanged() {
        assert!(matches!(normalize_prefix("a.b."), Cow::Borrowed(_)));
        assert!(matches!(normalize_prefix(""), Cow::Borrowed(_)));
        assert!(matches!(normalize_prefix("a.b"), Cow::Owned(_)));
    }

    #[test]
    fn test_split_instance_at_root() {
        assert_eq!(split_instance("instance.Nougat32.dpi"), Some(("Nougat32", "dpi")));
    }

    #[test]
    fn test_split_instance_nested_rest() {
        assert_eq!(
            split_instance("bst.instance.Pie64.display.fb_width"),
            Some(("Pie64", "display.fb_width"))
        );
    }

    #[test]
    fn test_split_instance_requires_segment_boundary() {
        assert_eq!(split_instance("bst.myinstance.Pie64.dpi"), None);
        assert_eq!(
            split_instance("bst.myinstance.x.instance.Pie64.dpi"),
            Some(("Pie64", "dpi"))
        );
    }

    #[test]
    fn test_split_instance_rejects_empty_name() {
        assert_eq!(split_instance("bst.instance..dpi"), None);
    }

    #[test]
    fn test_split_instance_empty_rest() {
        assert_eq!(split_instance("bst.instance.Pie64."), Some(("Pie64", "")));
    }

    #[test]
    fn test_is_storable_key() {
        assert!(is_storable_key("k"));
        assert!(is_storable_key("display name.with space"));
        assert!(is_storable_key("a#b"));
        assert!(!is_storable_key(""));
        assert!(!is_storable_key("url=x"));
        assert!(!is_storable_key("two\nlines"));
        assert!(!is_storable_key("cr\r"));
        assert!(!is_storable_key(" padded"));
        assert!(!is_storable_key("padded\t"));
        assert!(!is_storable_key("#comment"));
    }

    #[test]
    fn test_instance_prefix_with_dotted_root() {
        assert_eq!(instance_prefix("bst.", "Pie64"), "bst.instance.Pie64.");
    }
}
