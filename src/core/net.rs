// src/core/net.rs
//
// Blocking HTTP GET behind a small trait so the fetch/download code can be
// driven by something other than the network.

use std::{error::Error, time::Duration};

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{config::options::NetOptions, error::NetError};

/// Raw body of an image GET.
#[derive(Clone, Debug, Default)]
pub struct Payload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

pub trait Transport {
    /// GET a page and decode it to text (charset from the response headers).
    fn get_text(&self, url: &Url) -> Result<String, NetError>;

    /// GET a binary payload.
    fn get_bytes(&self, url: &Url) -> Result<Payload, NetError>;
}

pub struct HttpClient {
    client: Client,
    page_timeout: Duration,
    download_timeout: Duration,
}

impl HttpClient {
    pub fn new(opts: &NetOptions) -> Result<Self, NetError> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .connect_timeout(opts.page_timeout)
            .build()
            .map_err(|e| NetError::Client(error_chain(&e)))?;

        Ok(Self {
            client,
            page_timeout: opts.page_timeout,
            download_timeout: opts.download_timeout,
        })
    }

    fn send(&self, url: &Url, timeout: Duration) -> Result<Response, NetError> {
        let resp = self.client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .map_err(|e| classify(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NetError::Status { url: s!(url.as_str()), status: status.as_u16() });
        }
        Ok(resp)
    }
}

impl Transport for HttpClient {
    fn get_text(&self, url: &Url) -> Result<String, NetError> {
        let resp = self.send(url, self.page_timeout)?;
        resp.text().map_err(|e| classify(url, e))
    }

    fn get_bytes(&self, url: &Url) -> Result<Payload, NetError> {
        let resp = self.send(url, self.download_timeout)?;
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = resp.bytes().map_err(|e| classify(url, e))?;
        Ok(Payload { bytes: bytes.to_vec(), content_type })
    }
}

fn classify(url: &Url, e: reqwest::Error) -> NetError {
    if e.is_timeout() {
        NetError::Timeout { url: s!(url.as_str()) }
    } else {
        NetError::Transport { url: s!(url.as_str()), reason: error_chain(&e) }
    }
}

/// reqwest's top-level message is generic ("error sending request");
/// the useful part (DNS, refused, TLS) sits in the source chain.
fn error_chain(e: &dyn Error) -> String {
    let mut msg = e.to_string();
    let mut cur = e.source();
    while let Some(inner) = cur {
        let text = inner.to_string();
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        cur = inner.source();
    }
    msg
}
