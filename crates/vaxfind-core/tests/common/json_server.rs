//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves one fixed body with a chosen status line to every GET and records
//! the request target and `User-Agent` of each request it sees.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Status line after "HTTP/1.1 ", e.g. "200 OK".
    pub status: &'static str,
    /// If set, advertise this Content-Length instead of the real one and
    /// close after sending the body (simulates a truncated response).
    pub claimed_length: Option<usize>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            claimed_length: None,
        }
    }
}

/// What the server saw for one request.
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub method: String,
    /// Path plus query, as sent.
    pub target: String,
    pub user_agent: Option<String>,
}

pub struct JsonServer {
    /// Base URL, e.g. "http://127.0.0.1:12345".
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl JsonServer {
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread serving `body` with 200 OK.
pub fn start(body: &str) -> JsonServer {
    start_with_options(body, ServerOptions::default())
}

pub fn start_with_options(body: &str, opts: ServerOptions) -> JsonServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.as_bytes().to_vec());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_srv = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen_srv);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &body, &opts, &seen));
        }
    });
    JsonServer {
        base_url: format!("http://127.0.0.1:{}", port),
        seen,
    }
}

/// A base URL nothing is listening on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: &ServerOptions,
    seen: &Mutex<Vec<SeenRequest>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    seen.lock().unwrap().push(parse_request(request));

    let length = opts.claimed_length.unwrap_or(body.len());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status, length
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

fn parse_request(request: &str) -> SeenRequest {
    let mut seen = SeenRequest::default();
    let mut lines = request.lines();
    if let Some(first) = lines.next() {
        let mut parts = first.split_whitespace();
        seen.method = parts.next().unwrap_or("").to_string();
        seen.target = parts.next().unwrap_or("").to_string();
    }
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                seen.user_agent = Some(value.trim().to_string());
            }
        }
    }
    seen
}
