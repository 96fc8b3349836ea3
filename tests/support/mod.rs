#![allow(dead_code)]

use std::io::Read;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value};
use tiny_http::{Header, Response, Server};

pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_asana"));
    cmd.env_remove("ASANA_LOG");
    cmd
}

#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub url: String,
    pub auth: Option<String>,
    pub body: String,
}

/// What a mock handler gets to see of a request. `url` is path plus query;
/// `base` is the absolute API root, for building `next_page` cursors.
pub struct Req<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub base: &'a str,
}

impl Req<'_> {
    pub fn path(&self) -> &str {
        path_of(self.url)
    }

    pub fn is(&self, method: &str, path: &str) -> bool {
        self.method == method && self.path() == path
    }
}

/// A local stand-in for the Asana API; the handler returns `(status, body)`.
pub struct MockService {
    pub base: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl MockService {
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&Req) -> (u16, String) + Send + 'static,
    {
        let server = Server::http("127.0.0.1:0").expect("bind mock server");
        let port = server.server_addr().to_ip().expect("ip listener").port();
        let base = format!("http://127.0.0.1:{port}/api/1.0");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let root = base.clone();

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let method = request.method().to_string();
                let url = request.url().to_string();
                let auth = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());

                let (status, payload) = handler(&Req {
                    method: &method,
                    url: &url,
                    base: &root,
                });
                log.lock().unwrap().push(Seen {
                    method,
                    url,
                    auth,
                    body,
                });

                let content_type =
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
                let response = Response::from_string(payload)
                    .with_status_code(status)
                    .with_header(content_type);
                let _ = request.respond(response);
            }
        });

        Self { base, seen }
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn run(&self, args: &[&str]) -> Output {
        bin()
            .env("ASANA_TOKEN", "test-token")
            .env("ASANA_BASE_URL", &self.base)
            .args(args)
            .output()
            .expect("run asana")
    }
}

pub fn path_of(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

pub fn ok(data: Value) -> (u16, String) {
    (200, json!({ "data": data }).to_string())
}

pub fn page(data: Value, next: Option<String>) -> (u16, String) {
    let next_page = next.map(|uri| json!({ "uri": uri }));
    (200, json!({ "data": data, "next_page": next_page }).to_string())
}

pub fn not_found() -> (u16, String) {
    (
        404,
        json!({"errors": [{"message": "Not Found", "help": "No such route"}]}).to_string(),
    )
}

/// Workspace "W" -> project "P" (p1) -> sections "Todo" (s1) and "Done" (s2).
pub fn hierarchy(req: &Req) -> Option<(u16, String)> {
    if req.method != "GET" {
        return None;
    }
    match req.path() {
        "/api/1.0/users/me" => Some(ok(json!({
            "name": "Me",
            "workspaces": [{"id": "w0", "name": "Other"}, {"id": "w1", "name": "W"}],
        }))),
        "/api/1.0/workspaces/w1/projects" => Some(page(
            json!([{"id": "p1", "name": "P", "layout": "board"}]),
            None,
        )),
        "/api/1.0/projects/p1/sections" => Some(page(
            json!([{"id": "s1", "name": "Todo"}, {"id": "s2", "name": "Done"}]),
            None,
        )),
        _ => None,
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
