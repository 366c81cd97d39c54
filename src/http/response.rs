/// HTTP status codes produced by the server.
///
/// - `Ok` (200): Request successful
/// - `Found` (302): Redirect after login or signup
/// - `NotFound` (404): No handler and no asset for the path
/// - `MethodNotAllowed` (405): Verb other than GET or POST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 302 Found
    Found,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use ferrocat::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Found.as_u16(), 302);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Found => 302,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Headers keep their insertion order, which is the order they are written
/// on the wire. `Content-Length` is never stored here; the writer computes
/// it from the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    version: String,
    status_code: u16,
    reason_phrase: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Response {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    /// Headers in serialization order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header with exactly this name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns a copy with `name: value` appended after the existing headers.
    ///
    /// Used by the connection driver to attach the guest session cookie.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Creates a 200 OK HTML response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/html;charset=utf-8")
            .body(body)
            .build()
    }

    /// Creates a 302 Found response pointing at `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Found)
            .header("Location", location)
            .build()
    }
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use ferrocat::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/css;charset=utf-8")
///     .body("body {}")
///     .build();
/// assert_eq!(response.status_code(), 200);
/// ```
pub struct ResponseBuilder {
    version: String,
    status_code: u16,
    reason_phrase: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self::with_status(status.as_u16(), status.reason_phrase())
    }

    /// Creates a builder for a status line not covered by [`StatusCode`].
    pub fn with_status(code: u16, reason_phrase: impl Into<String>) -> Self {
        Self {
            version: "HTTP/1.1".to_string(),
            status_code: code,
            reason_phrase: reason_phrase.into(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Adds a header, replacing the value in place if the name already exists.
    ///
    /// A caller-supplied `Content-Length` is accepted but never serialized.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            version: self.version,
            status_code: self.status_code,
            reason_phrase: self.reason_phrase,
            headers: self.headers,
            body: self.body,
        }
    }
}
