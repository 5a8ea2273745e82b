//! Raw request path helpers.
//!
//! Segments are decoded from the raw URI path so that any byte sequence
//! (including invalid UTF-8) still reaches a handler instead of being
//! rejected by the extractor.

use axum::http::{HeaderMap, Uri};

/// Percent-decode a raw path, replacing invalid UTF-8 with U+FFFD.
pub fn decode_lossy(raw: &str) -> String {
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// The decoded single segment of `/{segment}`, or `None` if the decoded
/// path spans more than one segment (e.g. `/a%2Fb`).
pub fn single_segment(uri: &Uri) -> Option<String> {
    let decoded = decode_lossy(uri.path());
    let segment = decoded.strip_prefix('/')?;
    if segment.is_empty() || segment.contains('/') {
        return None;
    }
    Some(segment.to_string())
}

/// Redirect target for a path that only fails to match because of one
/// trailing slash: `/foo/` → `/foo`, `//` → `/`.
///
/// Absolute when the request carries a `Host` header; the query string is
/// kept.
pub fn trailing_slash_redirect(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    let raw = uri.path();
    if raw == "/" {
        return None;
    }
    let trimmed = raw.strip_suffix('/')?;
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };

    let decoded = decode_lossy(trimmed);
    let routable = decoded == "/"
        || decoded
            .strip_prefix('/')
            .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'));
    if !routable {
        return None;
    }

    let mut location = match headers
        .get(axum::http::header::HOST)
        .and_then(|v| v.to_str().ok())
    {
        Some(host) => format!("http://{}{}", host, trimmed),
        None => trimmed.to_string(),
    };
    if let Some(query) = uri.query() {
        location.push('?');
        location.push_str(query);
    }
    Some(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn decodes_invalid_utf8_lossily() {
        assert_eq!(decode_lossy("/%FF"), "/\u{FFFD}");
        assert_eq!(decode_lossy("/%E2%82%AC"), "/€");
        assert_eq!(decode_lossy("/plain"), "/plain");
    }

    #[test]
    fn encoded_slash_is_not_a_single_segment() {
        assert_eq!(single_segment(&uri("/foo")), Some("foo".to_string()));
        assert_eq!(single_segment(&uri("/a%2Fb")), None);
        assert_eq!(single_segment(&uri("/a/b")), None);
    }

    #[test]
    fn trailing_slash_redirects_to_single_segment() {
        let headers = HeaderMap::new();
        assert_eq!(
            trailing_slash_redirect(&uri("/student/"), &headers),
            Some("/student".to_string())
        );
        assert_eq!(
            trailing_slash_redirect(&uri("/foo/?x=1"), &headers),
            Some("/foo?x=1".to_string())
        );
        assert_eq!(trailing_slash_redirect(&uri("//"), &headers), Some("/".to_string()));
    }

    #[test]
    fn no_redirect_for_multi_segment_or_root() {
        let headers = HeaderMap::new();
        assert_eq!(trailing_slash_redirect(&uri("/"), &headers), None);
        assert_eq!(trailing_slash_redirect(&uri("/a/b/"), &headers), None);
        assert_eq!(trailing_slash_redirect(&uri("/a%2Fb/"), &headers), None);
        assert_eq!(trailing_slash_redirect(&uri("/a/b"), &headers), None);
    }

    #[test]
    fn redirect_is_absolute_with_host() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::HOST,
            HeaderValue::from_static("example.test:8000"),
        );
        assert_eq!(
            trailing_slash_redirect(&uri("/foo/"), &headers),
            Some("http://example.test:8000/foo".to_string())
        );
    }
}
