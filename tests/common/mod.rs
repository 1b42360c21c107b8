//! Shared test fixture for the Printrack SDK integration tests.
//!
//! Provides [`TestServer`], a canned-response HTTP server on a random local
//! port. Each test declares a route table up front; the server records every
//! request line (and its Authorization header) so tests can assert on the
//! exact paths and query strings the SDK produced.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use printrack_sdk::PrintrackSdk;

/// One canned route: exact method + path (query string excluded) match.
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn json(method: &'static str, path: &'static str, body: serde_json::Value) -> Self {
        Self {
            method,
            path,
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(method: &'static str, path: &'static str, status: u16) -> Self {
        Self {
            method,
            path,
            status,
            body: String::new(),
        }
    }
}

/// A request the server saw: the raw request line plus the bearer header.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub line: String,
    pub authorization: Option<String>,
}

pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    /// Bind a random port and serve `routes` from a background thread.
    pub fn start(routes: Vec<Route>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                handle(stream, &routes, &recorded);
            }
        });

        Self { base_url, requests }
    }

    /// An SDK pointed at this server with a short timeout.
    pub fn sdk(&self) -> PrintrackSdk {
        PrintrackSdk::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(5))
            .build()
    }

    /// The request lines seen so far, e.g. `"GET /print-prices HTTP/1.1"`.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.line.clone())
            .collect()
    }

    /// The Authorization header of each request, in arrival order.
    pub fn authorizations(&self) -> Vec<Option<String>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.authorization.clone())
            .collect()
    }
}

fn handle(stream: TcpStream, routes: &[Route], recorded: &Arc<Mutex<Vec<RecordedRequest>>>) {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() || request_line.trim().is_empty() {
        return;
    }
    let request_line = request_line.trim_end().to_string();

    // Drain headers, keeping the two we care about.
    let mut authorization = None;
    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).is_err() {
            return;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            let value = value.trim();
            if name.eq_ignore_ascii_case("authorization") {
                authorization = Some(value.to_string());
            } else if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
        }
    }

    // Drain the body so the client never blocks on an unread request.
    if content_length > 0 {
        let mut body = vec![0u8; content_length];
        let _ = reader.read_exact(&mut body);
    }

    recorded.lock().unwrap().push(RecordedRequest {
        line: request_line.clone(),
        authorization,
    });

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");
    let path = target.split('?').next().unwrap_or("");

    let (status, body) = match routes.iter().find(|r| r.method == method && r.path == path) {
        Some(route) => (route.status, route.body.clone()),
        None => (404, String::new()),
    };

    let reason = if (200..300).contains(&status) { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
