//! Scripted HTTP backend for integration tests.
//!
//! Serves one canned response per connection, in order, and records the
//! request line and body of every request it sees.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    /// e.g. "POST /api/auto/0"
    pub request_line: String,
    pub body: String,
}

pub struct FakeBackend {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    /// Starts a backend that answers the given `(status, json body)` pairs in
    /// order, then stops accepting connections.
    pub fn start(responses: Vec<(u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let responses: Vec<(u16, String)> = responses
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();
        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                serve_one(stream, status, &body, &recorded);
            }
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| r.request_line)
            .collect()
    }
}

fn serve_one(stream: TcpStream, status: u16, body: &str, recorded: &Mutex<Vec<Recorded>>) {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();
    let request_line = request_line
        .trim_end()
        .rsplit_once(' ')
        .map_or_else(|| request_line.trim_end().to_string(), |(head, _)| head.to_string());

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header).unwrap();
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':')
            && name.eq_ignore_ascii_case("content-length")
        {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    let mut request_body = vec![0u8; content_length];
    reader.read_exact(&mut request_body).unwrap();

    recorded.lock().unwrap().push(Recorded {
        request_line,
        body: String::from_utf8_lossy(&request_body).into_owned(),
    });

    let reason = if status < 400 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );
    let mut stream = reader.into_inner();
    stream.write_all(response.as_bytes()).unwrap();
    stream.flush().unwrap();
}
