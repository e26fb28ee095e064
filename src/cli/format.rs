//! Output formatting utilities for CLI commands.

use crate::api::GistSummary;

/// Renders one gist list line: `<id> <+|-> <description>`.
///
/// `+` marks a public gist, `-` a private one.
pub fn summary_line(gist: &GistSummary) -> String {
    let public = if gist.public { '+' } else { '-' };
    format!("{} {} {}", gist.id, public, gist.description)
}

/// Returns the terminal width from the environment, if known.
///
/// Width detection is left to the shell; `COLUMNS` is the collaborator
/// contract here.
pub fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS").ok()?.trim().parse().ok()
}

/// Elides text to the given width, appending `...`.
///
/// An unknown width, or a width of 3 or less, leaves the text alone.
/// Operates on characters so multi-byte text is never split.
pub fn elide(text: &str, width: Option<usize>) -> String {
    let width = match width {
        Some(w) if w > 3 => w,
        _ => return text.to_string(),
    };

    if text.chars().count() <= width {
        return text.to_string();
    }

    let truncated: String = text.chars().take(width - 3).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, public: bool, description: &str) -> GistSummary {
        GistSummary {
            id: id.to_string(),
            public,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_summary_line_public() {
        let line = summary_line(&summary("1", true, "test-desc-A"));
        assert_eq!(line, "1 + test-desc-A");
    }

    #[test]
    fn test_summary_line_private() {
        let line = summary_line(&summary("2", false, "test-desc-Ⅽ"));
        assert_eq!(line, "2 - test-desc-Ⅽ");
    }

    #[test]
    fn test_elide_short_text_unchanged() {
        assert_eq!(elide("short", Some(80)), "short");
    }

    #[test]
    fn test_elide_long_text() {
        assert_eq!(elide("abcdefghij", Some(8)), "abcde...");
    }

    #[test]
    fn test_elide_unknown_width() {
        assert_eq!(elide("abcdefghij", None), "abcdefghij");
    }

    #[test]
    fn test_elide_tiny_width() {
        assert_eq!(elide("abcdefghij", Some(2)), "abcdefghij");
    }

    #[test]
    fn test_elide_multibyte() {
        assert_eq!(elide("ⅭⅭⅭⅭⅭⅭⅭⅭ", Some(7)), "ⅭⅭⅭⅭ...");
    }
}
