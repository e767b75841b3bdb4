use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};
use songpop::utils::*;

fn headers_with_retry_after(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn test_basic_auth_value() {
    assert_eq!(basic_auth_value("id", "secret"), "Basic aWQ6c2VjcmV0");
    assert_eq!(
        basic_auth_value("my-client", "my-secret"),
        "Basic bXktY2xpZW50Om15LXNlY3JldA=="
    );
}

#[test]
fn test_parse_retry_after_numeric() {
    assert_eq!(parse_retry_after(&headers_with_retry_after("7")), Some(7));
    assert_eq!(parse_retry_after(&headers_with_retry_after("0")), Some(0));
    assert_eq!(parse_retry_after(&headers_with_retry_after(" 12 ")), Some(12));
}

#[test]
fn test_parse_retry_after_rejects_non_numeric() {
    assert_eq!(parse_retry_after(&HeaderMap::new()), None);
    assert_eq!(parse_retry_after(&headers_with_retry_after("soon")), None);
    assert_eq!(parse_retry_after(&headers_with_retry_after("-3")), None);
    assert_eq!(
        parse_retry_after(&headers_with_retry_after("Wed, 21 Oct 2015 07:28:00 GMT")),
        None
    );
}

#[test]
fn test_chunk_bounds_exact_multiple() {
    assert_eq!(chunk_bounds(100, 50), vec![(0, 50), (50, 100)]);
}

#[test]
fn test_chunk_bounds_with_remainder() {
    let bounds = chunk_bounds(120, 50);
    assert_eq!(bounds, vec![(0, 50), (50, 100), (100, 120)]);

    // Chunks are contiguous and cover every index once
    let mut next = 0;
    for (start, end) in bounds {
        assert_eq!(start, next);
        assert!(end > start && end - start <= 50);
        next = end;
    }
    assert_eq!(next, 120);
}

#[test]
fn test_chunk_bounds_small_and_empty() {
    assert_eq!(chunk_bounds(3, 50), vec![(0, 3)]);
    assert!(chunk_bounds(0, 50).is_empty());
    assert!(chunk_bounds(10, 0).is_empty());
}
