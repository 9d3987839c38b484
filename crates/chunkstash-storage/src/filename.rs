//! Filename sanitization for provider uploads.

use regex::Regex;
use std::sync::LazyLock;

// Explicit ASCII class: regex's `\w` is Unicode-aware and would admit
// characters the providers' attachment names should not carry.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("static pattern"));

/// Replace every run of characters outside `[A-Za-z0-9._-]` with a single
/// underscore. The result is used as the attachment filename (with a `.bin`
/// extension appended by the uploaders).
pub fn sanitize_file_name(name: &str) -> String {
    DISALLOWED.replace_all(name, "_").into_owned()
}
