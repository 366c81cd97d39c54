use ferrocat::http::cookie::{CookieJar, SESSION_COOKIE, set_cookie_value};

#[test]
fn test_cookie_parse_pairs() {
    let jar = CookieJar::parse("a=1; b=2");

    assert_eq!(jar.len(), 2);
    assert_eq!(jar.value("a"), Some("1"));
    assert_eq!(jar.value("b"), Some("2"));
}

#[test]
fn test_cookie_parse_malformed_segment() {
    let jar = CookieJar::parse("malformed");

    assert!(jar.is_empty());
}

#[test]
fn test_cookie_drops_only_malformed_segments() {
    let jar = CookieJar::parse("a=1; junk; b=2");

    assert_eq!(jar.len(), 2);
    assert!(!jar.has_value("junk"));
}

#[test]
fn test_cookie_has_value_for_absent_name() {
    let jar = CookieJar::parse("a=1");

    assert!(jar.has_value("a"));
    assert!(!jar.has_value("missing"));
    assert_eq!(jar.value("missing"), None);
}

#[test]
fn test_cookie_value_may_contain_equals() {
    let jar = CookieJar::parse("token=abc==; x = y ");

    assert_eq!(jar.value("token"), Some("abc=="));
    assert_eq!(jar.value("x"), Some("y"));
}

#[test]
fn test_cookie_empty_header() {
    assert!(CookieJar::parse("").is_empty());
    assert!(CookieJar::parse(" ; ; ").is_empty());
}

#[test]
fn test_set_cookie_value_has_no_attributes() {
    assert_eq!(set_cookie_value(SESSION_COOKIE, "abc"), "JSESSIONID=abc");
}
