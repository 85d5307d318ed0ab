use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use reqwest::blocking::Client;

/// Answer exactly one HTTP request with `status` and `body`; returns the URL.
pub fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut req = Vec::new();
        let mut buf = [0u8; 1024];
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            req.extend_from_slice(&buf[..n]);
        }
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).unwrap();
    });
    format!("http://{addr}/v1/opendata/t187ap04_L")
}

/// Client that ignores any proxy configured on the host.
pub fn client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}
