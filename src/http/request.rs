use std::collections::HashMap;

use crate::http::cookie::{CookieJar, SESSION_COOKIE};

/// HTTP methods the dispatch layer knows how to route.
///
/// Any other verb is still parsed into a [`Request`] and answered with
/// 405 Method Not Allowed by the dispatch wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Submit form data
    POST,
}

impl Method {
    /// Parses a supported method token.
    ///
    /// # Example
    ///
    /// ```
    /// # use ferrocat::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_token("get"), None);
    /// assert_eq!(Method::from_token("DELETE"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            _ => None,
        }
    }
}

/// A parsed HTTP request.
///
/// Built once per connection and never mutated afterwards; handlers only
/// ever see it by shared reference.
#[derive(Debug, Clone)]
pub struct Request {
    method: String,
    path: String,
    version: String,
    headers: HashMap<String, String>,
    query: HashMap<String, String>,
    body: String,
}

impl Request {
    /// The method token exactly as sent (e.g. `"GET"`).
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The routable method, if it is one the dispatcher supports.
    pub fn verb(&self) -> Option<Method> {
        Method::from_token(&self.method)
    }

    /// Request path without the query component. Never contains `?`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Looks up a header by its exact (case-sensitive) name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    pub fn query(&self) -> &HashMap<String, String> {
        &self.query
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(|v| v.as_str())
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Cookies sent with this request. Empty when there is no `Cookie` header.
    pub fn cookies(&self) -> CookieJar {
        CookieJar::parse(self.header("Cookie").unwrap_or_default())
    }

    /// The session id carried in the `JSESSIONID` cookie.
    pub fn session_id(&self) -> Option<String> {
        self.cookies().value(SESSION_COOKIE).map(str::to_string)
    }
}

/// Splits a request-target into its path and parsed query.
///
/// Query pairs that do not contain exactly one `=` are dropped. A repeated
/// key keeps its last value.
pub fn split_target(target: &str) -> (String, HashMap<String, String>) {
    match target.split_once('?') {
        Some((path, query)) => (path.to_string(), parse_query(query)),
        None => (target.to_string(), HashMap::new()),
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => Some((key.to_string(), value.to_string())),
                _ => None,
            }
        })
        .collect()
}

/// Builder for constructing Request objects.
///
/// The target is split into path and query on [`build`](Self::build), the
/// same way the wire parser does it.
pub struct RequestBuilder {
    method: String,
    target: String,
    version: String,
    headers: HashMap<String, String>,
    body: String,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
            version: "HTTP/1.1".to_string(),
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Replaces the whole header map.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Request {
        let (path, query) = split_target(&self.target);
        Request {
            method: self.method,
            path,
            version: self.version,
            headers: self.headers,
            query,
            body: self.body,
        }
    }
}
