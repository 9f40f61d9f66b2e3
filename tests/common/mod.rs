//! Shared mock host container for integration tests.
//!
//! `ContainerRequest`/`ContainerResponse` stand in for the opaque handles a
//! real container would supply, with programmable failure toggles and an
//! event journal so tests can assert on commit ordering.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{self, Cursor};
use std::pin::Pin;
use std::task::{Context, Poll};

use container_bridge::host::{AttributeValue, HostRequest, HostResponse};
use tokio::io::AsyncWrite;

/// Mock inbound request handle.
pub struct ContainerRequest {
    pub method: String,
    pub scheme: String,
    pub path: String,
    pub query: Option<String>,
    pub protocol: String,
    pub headers: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub params: Vec<(String, Vec<String>)>,
    pub body: Cursor<Vec<u8>>,
    pub body_available: bool,
    pub secure: bool,
    pub principal: Option<String>,
    pub attributes: HashMap<String, AttributeValue>,
}

impl ContainerRequest {
    /// A plain GET request for `path`.
    pub fn get(path: &str) -> Self {
        Self {
            method: "GET".into(),
            scheme: "http".into(),
            path: path.into(),
            query: None,
            protocol: "HTTP/1.1".into(),
            headers: Vec::new(),
            content_type: None,
            params: Vec::new(),
            body: Cursor::new(Vec::new()),
            body_available: true,
            secure: false,
            principal: None,
            attributes: HashMap::new(),
        }
    }

    /// A POST request for `path` with a raw body.
    pub fn post(path: &str, body: &[u8]) -> Self {
        let mut request = Self::get(path);
        request.method = "POST".into();
        request.body = Cursor::new(body.to_vec());
        request
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Add a parsed form parameter, as the container's parser would.
    pub fn with_param(mut self, name: &str, values: &[&str]) -> Self {
        self.params
            .push((name.into(), values.iter().map(|v| v.to_string()).collect()));
        self
    }

    pub fn secure(mut self) -> Self {
        self.secure = true;
        self.scheme = "https".into();
        self
    }

    pub fn with_attribute(mut self, name: &str, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }
}

impl HostRequest for ContainerRequest {
    type Body = Cursor<Vec<u8>>;

    fn method(&self) -> &str {
        &self.method
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn uri_path(&self) -> &str {
        &self.path
    }

    fn query_string(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn remote_address(&self) -> String {
        "203.0.113.7".into()
    }

    fn remote_port(&self) -> u16 {
        49152
    }

    fn local_address(&self) -> String {
        "192.0.2.1".into()
    }

    fn server_name(&self) -> String {
        "app.example.com".into()
    }

    fn server_port(&self) -> u16 {
        8080
    }

    fn header_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (name, _) in &self.headers {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
                names.push(name.clone());
            }
        }
        names
    }

    fn header_values(&self, name: &str) -> Vec<String> {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
            .collect()
    }

    fn content_type(&self) -> Option<String> {
        self.content_type.clone()
    }

    fn form_parameters(&self) -> Vec<(String, Vec<String>)> {
        self.params.clone()
    }

    fn body(&mut self) -> io::Result<&mut Self::Body> {
        if self.body_available {
            Ok(&mut self.body)
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "no body stream"))
        }
    }

    fn is_secure(&self) -> bool {
        self.secure
    }

    fn user_principal(&self) -> Option<String> {
        self.principal.clone()
    }

    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        self.attributes.get(name).cloned()
    }
}

/// Response stream with programmable write failures and a shutdown counter.
#[derive(Default)]
pub struct ContainerStream {
    pub data: Vec<u8>,
    pub fail_writes: bool,
    pub shutdown_calls: usize,
}

impl AsyncWrite for ContainerStream {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.get_mut();
        if this.fail_writes {
            return Poll::Ready(Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "container hung up",
            )));
        }
        this.data.extend_from_slice(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        self.get_mut().shutdown_calls += 1;
        Poll::Ready(Ok(()))
    }
}

/// Mock outbound response handle with an ordering journal.
#[derive(Default)]
pub struct ContainerResponse {
    pub status: Option<u16>,
    pub headers: Vec<(String, String)>,
    pub error_sent: Option<(u16, String)>,
    pub fail_error_send: bool,
    pub flushes: usize,
    pub stream: ContainerStream,
    /// Journal of host-visible operations: `status:200`, `header:X-A`,
    /// `error:404`.
    pub events: Vec<String>,
}

impl ContainerResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header names in the order the host received them.
    pub fn header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl HostResponse for ContainerResponse {
    type Body = ContainerStream;

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
        self.events.push(format!("status:{status}"));
    }

    fn add_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
        self.events.push(format!("header:{name}"));
    }

    async fn send_error(&mut self, status: u16, reason: &str) -> io::Result<()> {
        if self.fail_error_send {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "container hung up"));
        }
        self.error_sent = Some((status, reason.to_string()));
        self.events.push(format!("error:{status}"));
        Ok(())
    }

    fn body(&mut self) -> io::Result<&mut Self::Body> {
        Ok(&mut self.stream)
    }

    async fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
