//! Raw HTTP/1.1 request sender for exercising a file server over TCP.
//!
//! # Overview
//! Serializes a [`RequestSpec`] into a wire-exact HTTP/1.1 request and
//! transmits it over one fresh TCP connection per call, holding the
//! socket open for a caller-tunable linger before closing. Responses are
//! never read; asserting on the server's side effects is left to the
//! surrounding test harness.
//!
//! # Design
//! - [`RequestSender`] holds only the target [`Endpoint`]; no state
//!   survives a call and concurrent sends share nothing.
//! - Header blocks are CRLF-framed by construction and a non-empty body
//!   always travels with a `Content-Length` computed from the body.
//! - Every failure is a [`TransportError`] carrying the endpoint; the
//!   connection is closed before the error propagates.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::RequestSender;
pub use error::TransportError;
pub use http::{Method, RequestSpec};
pub use types::{Endpoint, Headers, SendOptions};
