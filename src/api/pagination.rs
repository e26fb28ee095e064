//! Parsing of the `link` pagination response header.
//!
//! GitHub expresses pagination as a `link` header containing one or more
//! `<url>; rel="name"` entries. The list fetcher only cares about the
//! `next` relation.

use std::sync::OnceLock;

use regex::Regex;

/// One compilation of the `<URL>; rel="REL"` entry pattern.
static LINK_ENTRY: OnceLock<Regex> = OnceLock::new();

/// Extracts the URL carrying `rel="next"` from a `link` header value.
///
/// Returns `None` when the header holds no `next` relation or does not
/// match the `<URL>; rel="REL"` shape at all.
pub fn next_url(link: &str) -> Option<String> {
    let pattern = LINK_ENTRY
        .get_or_init(|| Regex::new(r#"<([^>]+)>;\s*rel="([^"]+)""#).expect("link entry pattern"));

    pattern
        .captures_iter(link)
        .find(|caps| &caps[2] == "next")
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_url_single_entry() {
        let link = r#"<https://api.github.com/gists?page=2>; rel="next""#;
        assert_eq!(
            next_url(link).as_deref(),
            Some("https://api.github.com/gists?page=2")
        );
    }

    #[test]
    fn test_next_url_multiple_entries() {
        let link = concat!(
            r#"<https://api.github.com/gists?page=3>; rel="next", "#,
            r#"<https://api.github.com/gists?page=9>; rel="last""#,
        );
        assert_eq!(
            next_url(link).as_deref(),
            Some("https://api.github.com/gists?page=3")
        );
    }

    #[test]
    fn test_next_url_no_next_relation() {
        let link = r#"<https://api.github.com/gists?page=1>; rel="prev""#;
        assert_eq!(next_url(link), None);
    }

    #[test]
    fn test_next_url_malformed_header() {
        assert_eq!(next_url("not a link header"), None);
        assert_eq!(next_url(""), None);
    }
}
