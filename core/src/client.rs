//! Single-connection request transmission.
//!
//! # Design
//! `RequestSender` holds only the target endpoint and carries no state
//! between calls. Every send owns its connection exclusively: open, write
//! everything, linger, close. Nothing is shared across calls, so
//! independent sends can run on independent threads without coordination.
//! Responses are never read; observing the server's reaction is the
//! caller's business.

use std::io::{self, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::thread;

use tracing::debug;

use crate::error::TransportError;
use crate::http::RequestSpec;
use crate::types::{Endpoint, SendOptions};

/// Sends one serialized HTTP/1.1 request per fresh TCP connection.
#[derive(Debug, Clone)]
pub struct RequestSender {
    endpoint: Endpoint,
}

impl RequestSender {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Transmit `spec` over a fresh connection and return the number of
    /// bytes sent.
    ///
    /// All wire bytes are written or the call fails; a short write is an
    /// error, never a partial success. After the write the socket is held
    /// open for `options.linger` so a slow reader can drain it, then
    /// closed. The connection is closed on failure paths too: dropping
    /// the stream releases it.
    pub fn send(&self, spec: &RequestSpec, options: &SendOptions) -> Result<usize, TransportError> {
        let wire = spec.encode();
        let mut stream = self.connect(options)?;
        if let Some(timeout) = options.write_timeout {
            stream
                .set_write_timeout(Some(timeout))
                .map_err(|e| self.write_error(e))?;
        }
        stream.write_all(&wire).map_err(|e| self.write_error(e))?;
        stream.flush().map_err(|e| self.write_error(e))?;
        debug!(endpoint = %self.endpoint, bytes = wire.len(), "request written");
        thread::sleep(options.linger);
        Ok(wire.len())
    }

    /// Connect, transmit nothing, linger, close.
    ///
    /// A bare TCP reachability check against the endpoint.
    pub fn probe(&self, options: &SendOptions) -> Result<(), TransportError> {
        let _stream = self.connect(options)?;
        thread::sleep(options.linger);
        Ok(())
    }

    fn connect(&self, options: &SendOptions) -> Result<TcpStream, TransportError> {
        let target = (self.endpoint.host.as_str(), self.endpoint.port);
        let stream = match options.connect_timeout {
            Some(timeout) => {
                let addr = target
                    .to_socket_addrs()
                    .map_err(|e| self.connect_error(e))?
                    .next()
                    .ok_or_else(|| {
                        self.connect_error(io::Error::new(
                            io::ErrorKind::AddrNotAvailable,
                            "host resolved to no addresses",
                        ))
                    })?;
                TcpStream::connect_timeout(&addr, timeout)
            }
            None => TcpStream::connect(target),
        }
        .map_err(|e| self.connect_error(e))?;
        debug!(endpoint = %self.endpoint, "connected");
        Ok(stream)
    }

    fn connect_error(&self, source: io::Error) -> TransportError {
        TransportError::Connect {
            endpoint: self.endpoint.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> TransportError {
        TransportError::Write {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}
