//! Error types for the request sender.
//!
//! # Design
//! Failures carry the endpoint they were talking to, so a failed send is
//! diagnosable without surrounding context. The two I/O variants keep the
//! underlying `io::Error` as `source`; the mismatch variant is raised
//! before any network I/O happens.

use std::fmt;
use std::io;

use crate::types::Endpoint;

/// Errors returned by [`RequestSender`](crate::client::RequestSender) and
/// [`RequestSpec::from_parts`](crate::http::RequestSpec::from_parts).
#[derive(Debug)]
pub enum TransportError {
    /// The TCP handshake did not complete: connection refused, host
    /// unreachable, name resolution failure, or connect deadline exceeded.
    Connect { endpoint: Endpoint, source: io::Error },

    /// The transport rejected or truncated the write, or the write
    /// deadline was exceeded. Nothing partial is ever reported as success.
    Write { endpoint: Endpoint, source: io::Error },

    /// A hand-assembled spec declared a `Content-Length` that does not
    /// match its body. Never produced by the builder, which computes the
    /// header itself.
    ContentLengthMismatch { declared: String, actual: usize },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Connect { endpoint, source } => {
                write!(f, "connect to {endpoint} failed: {source}")
            }
            TransportError::Write { endpoint, source } => {
                write!(f, "write to {endpoint} failed: {source}")
            }
            TransportError::ContentLengthMismatch { declared, actual } => {
                write!(
                    f,
                    "content-length mismatch: header declares {declared:?}, body is {actual} bytes"
                )
            }
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Connect { source, .. } | TransportError::Write { source, .. } => {
                Some(source)
            }
            TransportError::ContentLengthMismatch { .. } => None,
        }
    }
}
