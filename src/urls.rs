//! Upload target composition and public URL rewriting.

/// Build `{endpoint}/{bin}/{filename}`.
///
/// Plain concatenation: nothing is encoded or normalised, so a trailing
/// slash on `endpoint` yields a double slash.
pub fn compose_upload_url(endpoint: &str, bin: &str, filename: &str) -> String {
    format!("{}/{}/{}", endpoint, bin, filename)
}

/// Swap the first occurrence of `endpoint` in `url` for `replace`.
///
/// Returns `url` untouched when `replace` is `None` or `endpoint` does not
/// occur in it.
pub fn rewrite_url(url: &str, endpoint: &str, replace: Option<&str>) -> String {
    match replace {
        Some(replace) if !endpoint.is_empty() => url.replacen(endpoint, replace, 1),
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compose_joins_segments() {
        assert_eq!(
            compose_upload_url("https://store.example", "uploads", "cat.png"),
            "https://store.example/uploads/cat.png"
        );
    }

    #[test]
    fn test_compose_does_not_normalise() {
        assert_eq!(
            compose_upload_url("https://store.example/", "up loads", "a b?.png"),
            "https://store.example//up loads/a b?.png"
        );
    }

    #[test]
    fn test_rewrite_without_replace_is_identity() {
        let url = "https://store.example/uploads/cat.png";
        assert_eq!(rewrite_url(url, "https://store.example", None), url);
    }

    #[test]
    fn test_rewrite_substitutes_prefix() {
        assert_eq!(
            rewrite_url(
                "https://store.example/uploads/cat.png",
                "https://store.example",
                Some("https://cdn.example")
            ),
            "https://cdn.example/uploads/cat.png"
        );
    }

    #[test]
    fn test_rewrite_only_first_occurrence() {
        assert_eq!(
            rewrite_url(
                "https://store.example/mirror/https://store.example/cat.png",
                "https://store.example",
                Some("https://cdn.example")
            ),
            "https://cdn.example/mirror/https://store.example/cat.png"
        );
    }

    #[test]
    fn test_rewrite_missing_endpoint_is_identity() {
        let url = "https://other.example/uploads/cat.png";
        assert_eq!(
            rewrite_url(url, "https://store.example", Some("https://cdn.example")),
            url
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let endpoint = "https://store.example";
        let replace = Some("https://cdn.example");
        let once = rewrite_url("https://store.example/uploads/cat.png", endpoint, replace);
        let twice = rewrite_url(&once, endpoint, replace);
        assert_eq!(once, twice);
    }
}
