//! MIME type inference from file names.

/// Guess the MIME type from a file name's extension.
///
/// Returns `None` when the name has no extension or the extension is
/// unknown; callers omit the type rather than guessing a default.
pub fn mime_from_name(name: &str) -> Option<String> {
    mime_guess::from_path(name).first().map(|m| m.to_string())
}
