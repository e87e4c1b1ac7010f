// Helpers shared by the session tests.

use crate::core_storage::memory::MemoryBackend;
use crate::session::Session;
use crate::Config;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

pub fn new_session(backend: Arc<MemoryBackend>) -> Session<Vec<u8>> {
    Session::new(Vec::new(), Arc::new(Config::default()), backend, http_client())
}

/// HTTP client for fetches from loopback responders, bypassing any configured proxy.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Returns the replies written so far, as text.
pub fn replies(session: &Session<Vec<u8>>) -> String {
    String::from_utf8_lossy(session.writer()).into_owned()
}

/// Two ends of a loopback connection: (server side, client side).
pub async fn connected_pair() -> (TcpStream, TcpStream) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (client, accepted) = tokio::join!(TcpStream::connect(addr), listener.accept());
    (accepted.unwrap().0, client.unwrap())
}

/// Serves a single HTTP response with `body` and returns the base URL to fetch from.
pub async fn serve_http_once(status: &'static str, body: Vec<u8>) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buffer).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..n]);
        }

        let head = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        let _ = socket.shutdown().await;
    });

    Url::parse(&format!("http://{}/", addr)).unwrap()
}
