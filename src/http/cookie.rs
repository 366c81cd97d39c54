//! `Cookie` / `Set-Cookie` header value codec.

use std::collections::HashMap;

/// Name of the session-tracking cookie.
pub const SESSION_COOKIE: &str = "JSESSIONID";

/// Read-only view of the cookies carried by one `Cookie` header value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: HashMap<String, String>,
}

impl CookieJar {
    /// Parses a header value such as `"a=1; b=2"`.
    ///
    /// Segments without `=` are dropped. Only the first `=` splits, so
    /// values may themselves contain `=`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ferrocat::http::cookie::CookieJar;
    /// let jar = CookieJar::parse("a=1; b=2");
    /// assert_eq!(jar.value("a"), Some("1"));
    /// assert!(!jar.has_value("c"));
    /// ```
    pub fn parse(header: &str) -> Self {
        let cookies = header
            .split(';')
            .filter_map(|segment| segment.trim().split_once('='))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .collect();

        Self { cookies }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(|v| v.as_str())
    }

    pub fn has_value(&self, name: &str) -> bool {
        self.cookies.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

/// Builds a `Set-Cookie` header value. No attributes are emitted.
pub fn set_cookie_value(name: &str, value: &str) -> String {
    format!("{name}={value}")
}
