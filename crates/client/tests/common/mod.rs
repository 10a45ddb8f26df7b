//! In-process mock of EPGStation and the iCal service.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    Router,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request received by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Canned responses, keyed by which request the server is answering.
#[derive(Debug, Clone)]
pub struct Script {
    pub first_page: (u16, Vec<u8>),
    pub full_list: (u16, Vec<u8>),
    pub update: (u16, Vec<u8>),
}

impl Script {
    /// The first reserves page returns `body`; every other call answers 200.
    pub fn first_page(body: &str) -> Self {
        Self {
            first_page: (200, body.as_bytes().to_vec()),
            full_list: (200, Vec::new()),
            update: (200, Vec::new()),
        }
    }

    pub fn first_page_status(mut self, status: u16) -> Self {
        self.first_page.0 = status;
        self
    }

    pub fn full_list(mut self, status: u16, body: &str) -> Self {
        self.full_list = (status, body.as_bytes().to_vec());
        self
    }

    pub fn update(mut self, status: u16, body: &str) -> Self {
        self.update = (status, body.as_bytes().to_vec());
        self
    }
}

#[derive(Clone)]
struct MockState {
    script: Arc<Script>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Mock server bound to an ephemeral local port.
pub struct MockServer {
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub async fn start(script: Script) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            script: Arc::new(script),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn gets(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == Method::GET)
            .collect()
    }

    pub fn posts(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == Method::POST)
            .collect()
    }
}

async fn respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Vec<u8>) {
    let query = uri.query().map(str::to_string);
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: query.clone(),
        headers,
        body: body.to_vec(),
    });

    let (status, body) = match (method, uri.path()) {
        (Method::GET, "/api/reserves") => {
            let has_limit = query.as_deref().is_some_and(|q| q.contains("limit="));
            if has_limit {
                state.script.full_list.clone()
            } else {
                state.script.first_page.clone()
            }
        }
        (Method::POST, "/update") => state.script.update.clone(),
        _ => (404, b"not found".to_vec()),
    };
    (StatusCode::from_u16(status).unwrap(), body)
}

/// A base URL nothing is listening on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// A base URL whose server answers every request with `status` and a
/// `Content-Length` larger than the body it writes before closing.
pub async fn truncated_body_url(status: u16) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {} Truncated\r\nContent-Type: application/json\r\nContent-Length: 64\r\nConnection: close\r\n\r\n{{\"reserves\":[",
                status
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.flush().await.unwrap();
            let _ = stream.shutdown().await;
        }
    });
    format!("http://{}", addr)
}

/// Reads one request, headers and body, so closing the socket does not
/// discard unread input.
async fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut received = buf.len() - header_end;
    while received < content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        received += n;
    }
}
