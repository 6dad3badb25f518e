//! Search URLs.
//!
//! The search form navigates to `/search?q=<encoded>` and the results page
//! reads `q` back. Both sides go through this module so a query survives the
//! trip unchanged.

/// Path of the search results screen.
pub const SEARCH_PATH: &str = "/search";

/// Query-string key carrying the search text.
pub const QUERY_PARAM: &str = "q";

/// Target for a submitted search, or `None` when the text is blank.
pub fn search_href(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!(
        "{}?{}={}",
        SEARCH_PATH,
        QUERY_PARAM,
        urlencoding::encode(query)
    ))
}

/// Read the search text out of a query string (with or without the `?`).
///
/// `+` is treated as a space, as browsers encode form submissions that way.
pub fn decode_query(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == QUERY_PARAM)
        .map(|(_, value)| {
            let spaced = value.replace('+', " ");
            urlencoding::decode(&spaced)
                .map(|s| s.into_owned())
                .unwrap_or(spaced)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_href_encodes() {
        assert_eq!(
            search_href("rose & glow").as_deref(),
            Some("/search?q=rose%20%26%20glow")
        );
        assert_eq!(search_href("  serum ").as_deref(), Some("/search?q=serum"));
        assert_eq!(search_href("   "), None);
        assert_eq!(search_href(""), None);
    }

    #[test]
    fn test_decode_query() {
        assert_eq!(
            decode_query("?q=rose%20%26%20glow").as_deref(),
            Some("rose & glow")
        );
        assert_eq!(decode_query("q=lip+balm&page=2").as_deref(), Some("lip balm"));
        assert_eq!(decode_query("?page=2&q=kajal").as_deref(), Some("kajal"));
        assert_eq!(decode_query("?q").as_deref(), Some(""));
        assert_eq!(decode_query("?page=2"), None);
        assert_eq!(decode_query(""), None);
    }

    #[test]
    fn test_query_round_trip() {
        for text in ["rose & glow", "100% matte", "café crème", "a+b=c?"] {
            let href = search_href(text).unwrap();
            let search = href.split_once('?').map(|(_, s)| s).unwrap();
            assert_eq!(decode_query(search).as_deref(), Some(text));
        }
    }
}
