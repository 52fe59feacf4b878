//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with a fixed status line and body. Used to stand in for
//! the upstream status document without network access.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// Starts a server in a background thread answering `200 OK` with `body`.
/// Returns the document URL (e.g. "http://127.0.0.1:12345/ImplementationStatus.md").
pub fn start(body: &str) -> String {
    start_with_status(200, "OK", body)
}

/// Like `start` but with a raw body that need not be UTF-8.
pub fn start_bytes(body: Vec<u8>) -> String {
    serve(200, "OK", body)
}

/// Like `start` but with an arbitrary status (e.g. 404 Not Found).
pub fn start_with_status(code: u16, reason: &'static str, body: &str) -> String {
    serve(code, reason, body.as_bytes().to_vec())
}

fn serve(code: u16, reason: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, code, reason, &body));
        }
    });
    format!("http://127.0.0.1:{}/ImplementationStatus.md", port)
}

/// URL on a port nobody listens on (bound then released).
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/ImplementationStatus.md", port)
}

fn handle(mut stream: std::net::TcpStream, code: u16, reason: &str, body: &[u8]) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let method = request.split_whitespace().next().unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/markdown\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        code,
        reason,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
