// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use img_scrape::core::{Payload, Transport};
use img_scrape::error::NetError;
use url::Url;

#[derive(Clone, Debug)]
pub enum Reply {
    Page(String),
    Bytes { body: Vec<u8>, content_type: Option<String> },
    Status(u16),
}

/// In-memory stand-in for the network. Unknown URLs fail like a refused connection.
#[derive(Clone, Default)]
pub struct FakeTransport {
    routes: HashMap<String, Reply>,
    calls: Arc<AtomicUsize>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.routes.insert(url.to_string(), Reply::Page(html.to_string()));
        self
    }

    pub fn image(mut self, url: &str, body: &[u8], content_type: Option<&str>) -> Self {
        self.routes.insert(
            url.to_string(),
            Reply::Bytes { body: body.to_vec(), content_type: content_type.map(str::to_owned) },
        );
        self
    }

    pub fn status(mut self, url: &str, code: u16) -> Self {
        self.routes.insert(url.to_string(), Reply::Status(code));
        self
    }

    /// Shared counter; survives the transport being moved into a worker.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, url: &Url) -> Result<Reply, NetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.routes.get(url.as_str()) {
            Some(Reply::Status(code)) => Err(NetError::Status { url: url.to_string(), status: *code }),
            Some(reply) => Ok(reply.clone()),
            None => Err(NetError::Transport { url: url.to_string(), reason: "connection refused".into() }),
        }
    }
}

impl Transport for FakeTransport {
    fn get_text(&self, url: &Url) -> Result<String, NetError> {
        match self.lookup(url)? {
            Reply::Page(html) => Ok(html),
            Reply::Bytes { body, .. } => Ok(String::from_utf8_lossy(&body).into_owned()),
            Reply::Status(_) => unreachable!(),
        }
    }

    fn get_bytes(&self, url: &Url) -> Result<Payload, NetError> {
        match self.lookup(url)? {
            Reply::Page(html) => Ok(Payload { bytes: html.into_bytes(), content_type: Some("text/html".into()) }),
            Reply::Bytes { body, content_type } => Ok(Payload { bytes: body, content_type }),
            Reply::Status(_) => unreachable!(),
        }
    }
}

/// Smallest file `image::guess_format` recognizes as PNG.
pub const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
pub const GIF_MAGIC: &[u8] = b"GIF89a\x01\0\x01\0\0\0\0";
