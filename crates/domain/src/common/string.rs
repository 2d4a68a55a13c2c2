//! String conversion utilities.

use std::sync::LazyLock;

use regex_lite::Regex;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG_REGEX pattern is invalid"));

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// Configuration stores hand back empty strings for cleared keys, and those
/// must read the same as a missing key.
///
/// # Examples
///
/// ```
/// use leftclick_domain::common::none_if_empty;
///
/// assert_eq!(none_if_empty("hello"), Some("hello"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty(" "), Some(" ")); // Whitespace is not empty
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Strips markup tags (`<col=ff9040>`, `</col>`, `<br>`) from host text.
///
/// An unterminated `<` is kept verbatim along with everything after it.
///
/// # Examples
///
/// ```
/// use leftclick_domain::common::remove_tags;
///
/// assert_eq!(remove_tags("<col=ff9040>Left-click</col>"), "Left-click");
/// assert_eq!(remove_tags("a < b"), "a < b");
/// ```
pub fn remove_tags(value: &str) -> String {
    TAG_REGEX.replace_all(value, "").into_owned()
}
