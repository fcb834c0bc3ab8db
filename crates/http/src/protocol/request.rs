//! Parsed request representation.
//!
//! A [`ParsedRequest`] is what the request decoder hands to the dispatcher. It is
//! deliberately plain: the method is kept exactly as received, header names keep
//! their original spelling, and the body is the raw text the client sent.

use std::collections::HashMap;
use std::collections::hash_map;

use http::{Method, header};

/// Header fields of a request, keyed by the name exactly as the client wrote it.
///
/// A name sent twice, in any letter case, keeps only the last field: its value
/// and its spelling. Lookups through [`Headers::get`] are exact; the well-known
/// fields the server itself relies on are looked up ignoring ASCII case, which
/// always finds at most one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    inner: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Default::default()
    }

    /// Inserts a field, replacing any field whose name only differs in ASCII
    /// case. Returns the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let variant = self.inner.keys().find(|key| **key != name && key.eq_ignore_ascii_case(&name)).cloned();
        let previous = variant.and_then(|key| self.inner.remove(&key));

        self.inner.insert(name, value.into()).or(previous)
    }

    /// Returns the value stored under exactly `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Returns the value of the first field whose name equals `name` ignoring ASCII case.
    pub fn get_ignore_case(&self, name: &str) -> Option<&str> {
        self.inner.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, value)| value.as_str())
    }

    pub fn content_length(&self) -> Option<&str> {
        self.get_ignore_case(header::CONTENT_LENGTH.as_str())
    }

    pub fn authorization(&self) -> Option<&str> {
        self.get_ignore_case(header::AUTHORIZATION.as_str())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.inner.iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// One decoded request.
///
/// `method` and `path` are always present. `body` is only set when the client
/// sent a `Content-Length` header, and then holds exactly that many bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    method: String,
    path: String,
    headers: Headers,
    body: Option<String>,
}

impl ParsedRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self { method: method.into(), path: path.into(), headers: Headers::new(), body: None }
    }

    pub fn from_parts(method: String, path: String, headers: Headers, body: Option<String>) -> Self {
        Self { method, path, headers, body }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The method token as received, e.g. `"get"` stays lower case.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Compares the request method against `method`, ignoring ASCII case.
    pub fn is_method(&self, method: &Method) -> bool {
        self.method.eq_ignore_ascii_case(method.as_str())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns true when there is no body, or the body has zero length.
    pub fn body_is_empty(&self) -> bool {
        self.body.as_deref().is_none_or(str::is_empty)
    }

    pub fn into_parts(self) -> (String, String, Headers, Option<String>) {
        (self.method, self.path, self.headers, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_keep_their_spelling() {
        let mut headers = Headers::new();
        headers.insert("X-Request-Id", "1");
        headers.insert("content-length", "12");

        assert_eq!(headers.get("X-Request-Id"), Some("1"));
        assert_eq!(headers.get("x-request-id"), None);
        assert_eq!(headers.get_ignore_case("x-request-id"), Some("1"));
        assert_eq!(headers.content_length(), Some("12"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn repeated_header_keeps_last_value() {
        let mut headers = Headers::new();
        assert_eq!(headers.insert("Authorization", "Bearer a"), None);
        assert_eq!(headers.insert("Authorization", "Bearer b"), Some("Bearer a".to_string()));
        assert_eq!(headers.authorization(), Some("Bearer b"));
    }

    #[test]
    fn case_variant_replaces_earlier_field() {
        let mut headers = Headers::new();
        assert_eq!(headers.insert("Content-Length", "2"), None);
        assert_eq!(headers.insert("content-length", "4"), Some("2".to_string()));

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.content_length(), Some("4"));
        assert_eq!(headers.get("content-length"), Some("4"));
        assert_eq!(headers.get("Content-Length"), None);

        let headers: Headers = [("authorization", "Bearer a"), ("AUTHORIZATION", "Bearer b")].into_iter().collect();
        assert_eq!(headers.authorization(), Some("Bearer b"));
    }

    #[test]
    fn method_compare_ignores_case() {
        let request = ParsedRequest::new("get", "money");
        assert!(request.is_method(&Method::GET));
        assert!(!request.is_method(&Method::POST));
        assert_eq!(request.method(), "get");
    }

    #[test]
    fn body_emptiness() {
        assert!(ParsedRequest::new("POST", "signup").body_is_empty());
        assert!(ParsedRequest::new("POST", "signup").with_body("").body_is_empty());
        assert!(!ParsedRequest::new("POST", "signup").with_body("{}").body_is_empty());
    }
}
