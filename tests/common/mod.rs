// Shared helpers for the integration tests: an in-process HTTP server that
// records every request, and temp-file setup.
#![allow(dead_code)]

use std::fs;
use std::io::Read;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use reducer_post::config::Config;
use tempfile::TempDir;
use tiny_http::{Response, Server};

/// What the test server saw for one request.
#[derive(Debug)]
pub struct Captured {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Start a server on an ephemeral port. Every request is captured and
/// answered with `reply(path)`.
pub fn start_server(reply: fn(&str) -> (u16, &'static str)) -> (Config, Receiver<Captured>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut body = Vec::new();
            request.as_reader().read_to_end(&mut body).unwrap();
            let captured = Captured {
                method: request.method().to_string(),
                path: request.url().to_string(),
                content_type: request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string()),
                body,
            };
            let (status, text) = reply(&captured.path);
            tx.send(captured).unwrap();
            request
                .respond(Response::from_string(text).with_status_code(status))
                .unwrap();
        }
    });

    (Config::new(addr.to_string()), rx)
}

pub fn ok(_path: &str) -> (u16, &'static str) {
    (200, "ok")
}

pub fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}
