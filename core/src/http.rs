//! Request description and HTTP/1.1 wire serialization.
//!
//! # Design
//! `RequestSpec` is plain data with private fields; the builder methods
//! are the public way to assemble one, so the serialized header block can
//! guarantee its own framing: CRLF line endings, exactly one blank line
//! before the body, and a `Content-Length` computed from the body rather
//! than trusted from the caller. `from_parts` exists for hand-assembled
//! specs and is the one place the content-length invariant is checked
//! instead of enforced.

use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::types::Headers;

/// HTTP method token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// The logical description of one HTTP request prior to serialization.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: Method,
    path: String,
    headers: Headers,
    body: Option<Vec<u8>>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// `GET {path}` with no headers and no body.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// `POST {path}` carrying `body`. `Content-Length` is computed at
    /// serialization time.
    pub fn post(path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::new(Method::Post, path).body(body)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Assemble a spec from raw parts.
    ///
    /// This is the only constructor that accepts a caller-supplied header
    /// map alongside a body, so it is the only place a mismatched
    /// `Content-Length` can be introduced. Such a spec is rejected here,
    /// before any network I/O. A missing `Content-Length` is fine:
    /// serialization computes it.
    pub fn from_parts(
        method: Method,
        path: impl Into<String>,
        headers: Headers,
        body: Option<Vec<u8>>,
    ) -> Result<Self, TransportError> {
        if let Some(body) = &body {
            if !body.is_empty() {
                if let Some(declared) = headers.get("Content-Length") {
                    if declared.trim().parse::<usize>() != Ok(body.len()) {
                        return Err(TransportError::ContentLengthMismatch {
                            declared: declared.to_string(),
                            actual: body.len(),
                        });
                    }
                }
            }
        }
        Ok(Self {
            method,
            path: path.into(),
            headers,
            body,
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Serialize to wire bytes.
    ///
    /// The request line and headers are joined with CRLF and terminated
    /// by one blank line; bare LFs in caller-supplied text are normalized
    /// to CRLF. A non-empty body gets a computed `Content-Length`,
    /// replacing any caller-supplied value in place, and is appended
    /// verbatim after the blank line.
    pub fn encode(&self) -> Vec<u8> {
        let mut headers = self.headers.clone();
        if let Some(body) = &self.body {
            if !body.is_empty() {
                headers.set("Content-Length", &body.len().to_string());
            }
        }

        let mut head = String::new();
        head.push_str(self.method.as_str());
        head.push(' ');
        head.push_str(&self.path);
        head.push_str(" HTTP/1.1\n");
        for (name, value) in headers.iter() {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push('\n');
        }
        head.push('\n');

        let mut wire = normalize_crlf(&head).into_bytes();
        if let Some(body) = &self.body {
            wire.extend_from_slice(body);
        }
        wire
    }
}

/// Convert every bare LF to CRLF, leaving existing CRLF pairs untouched.
fn normalize_crlf(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut prev_cr = false;
    for ch in text.chars() {
        if ch == '\n' && !prev_cr {
            out.push('\r');
        }
        out.push(ch);
        prev_cr = ch == '\r';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_serializes_to_exact_wire_bytes() {
        let wire = RequestSpec::get("/a.txt").encode();
        assert_eq!(wire, b"GET /a.txt HTTP/1.1\r\n\r\n");
    }

    #[test]
    fn post_computes_content_length_from_body() {
        let wire = RequestSpec::post("/b.txt", vec![b'b'; 1000]).encode();
        let head = b"POST /b.txt HTTP/1.1\r\nContent-Length: 1000\r\n\r\n";
        assert_eq!(&wire[..head.len()], head);
        assert_eq!(wire.len(), head.len() + 1000);
        assert!(wire[head.len()..].iter().all(|&byte| byte == b'b'));
    }

    #[test]
    fn stale_content_length_is_recomputed_in_place() {
        let spec = RequestSpec::new(Method::Post, "/c.txt")
            .header("Content-Length", "5")
            .header("Host", "localhost")
            .body("hello world");
        let text = String::from_utf8(spec.encode()).unwrap();
        assert!(text.starts_with("POST /c.txt HTTP/1.1\r\nContent-Length: 11\r\nHost: localhost\r\n\r\n"));
    }

    #[test]
    fn computed_content_length_keeps_caller_spelling() {
        let wire = RequestSpec::new(Method::Post, "/c.txt")
            .header("content-length", "0")
            .body("abc")
            .encode();
        let text = String::from_utf8(wire).unwrap();
        assert!(text.contains("content-length: 3\r\n"));
    }

    #[test]
    fn empty_body_gets_no_content_length() {
        let wire = RequestSpec::new(Method::Post, "/d.txt").body(Vec::new()).encode();
        assert_eq!(wire, b"POST /d.txt HTTP/1.1\r\n\r\n");
    }

    #[test]
    fn bare_line_feeds_are_normalized_existing_crlf_kept() {
        assert_eq!(normalize_crlf("a\nb"), "a\r\nb");
        assert_eq!(normalize_crlf("a\r\nb"), "a\r\nb");
        assert_eq!(normalize_crlf("a\r\nb\nc"), "a\r\nb\r\nc");
    }

    #[test]
    fn body_is_appended_verbatim() {
        let wire = RequestSpec::post("/e.txt", b"one\ntwo".to_vec()).encode();
        assert!(wire.ends_with(b"\r\n\r\none\ntwo"));
    }

    #[test]
    fn from_parts_accepts_matching_declared_length() {
        let mut headers = Headers::new();
        headers.set("Content-Length", "3");
        let spec =
            RequestSpec::from_parts(Method::Post, "/f.txt", headers, Some(b"abc".to_vec())).unwrap();
        assert_eq!(spec.headers().get("content-length"), Some("3"));
    }

    #[test]
    fn from_parts_rejects_mismatched_declared_length() {
        let mut headers = Headers::new();
        headers.set("Content-Length", "5");
        let err = RequestSpec::from_parts(Method::Post, "/f.txt", headers, Some(b"abc".to_vec()))
            .unwrap_err();
        assert!(matches!(
            err,
            TransportError::ContentLengthMismatch { actual: 3, .. }
        ));
    }

    #[test]
    fn from_parts_without_declared_length_computes_it() {
        let spec =
            RequestSpec::from_parts(Method::Post, "/g.txt", Headers::new(), Some(b"abc".to_vec()))
                .unwrap();
        let text = String::from_utf8(spec.encode()).unwrap();
        assert!(text.contains("Content-Length: 3\r\n"));
    }

    #[test]
    fn method_tokens_are_uppercase() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Head.as_str(), "HEAD");
        let method: Method = serde_json::from_str("\"POST\"").unwrap();
        assert_eq!(method, Method::Post);
    }
}
