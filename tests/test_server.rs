//! End-to-end tests over real TCP sockets.

use std::sync::Arc;

use ferrocat::app::{self, InMemoryUserStore};
use ferrocat::routing::DirAssetStore;
use ferrocat::server::listener;
use ferrocat::session::MemorySessionStore;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn start() -> std::net::SocketAddr {
    let router = app::build_router(
        Arc::new(DirAssetStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))),
        Arc::new(MemorySessionStore::new()),
        Arc::new(InMemoryUserStore::seeded()),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(listener::serve(listener, Arc::new(router)));
    addr
}

async fn send(addr: std::net::SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();

    // The server may reset instead of closing cleanly when it drops a
    // connection with unread input; either way the exchange is over.
    let mut out = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => out.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::ConnectionReset => break,
            Err(e) => panic!("read failed: {e}"),
        }
    }
    String::from_utf8(out).unwrap()
}

fn session_cookie(wire: &str) -> Option<&str> {
    wire.split("\r\n")
        .take_while(|line| !line.is_empty())
        .find_map(|line| line.strip_prefix("Set-Cookie: JSESSIONID="))
}

#[tokio::test]
async fn test_serves_bundled_css() {
    let addr = start().await;

    let wire = send(addr, "GET /css/styles.css HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert!(wire.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(wire.contains("Content-Type: text/css;charset=utf-8\r\n"));
}

#[tokio::test]
async fn test_bundled_404_page() {
    let addr = start().await;

    let wire = send(addr, "GET /nope.html HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert!(wire.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(wire.contains("404 Not Found"));
}

#[tokio::test]
async fn test_login_flow_over_tcp() {
    let addr = start().await;
    let body = "account=gugu&password=password";

    let login = send(
        addr,
        &format!(
            "POST /login HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        ),
    )
    .await;

    assert!(login.starts_with("HTTP/1.1 302 Found\r\n"));
    assert!(login.contains("Location: /index.html\r\n"));
    let session = session_cookie(&login).unwrap();

    let page = send(
        addr,
        &format!("GET /login HTTP/1.1\r\nHost: localhost\r\nCookie: JSESSIONID={session}\r\n\r\n"),
    )
    .await;

    assert!(page.starts_with("HTTP/1.1 302 Found\r\n"));
    assert_eq!(session_cookie(&page), None);
}

#[tokio::test]
async fn test_malformed_request_closes_without_response() {
    let addr = start().await;

    let wire = send(addr, "NOT-HTTP\r\n\r\n").await;

    assert!(wire.is_empty());
}

#[tokio::test]
async fn test_one_request_per_connection() {
    let addr = start().await;

    let wire = send(
        addr,
        "GET / HTTP/1.1\r\nHost: localhost\r\n\r\nGET / HTTP/1.1\r\nHost: localhost\r\n\r\n",
    )
    .await;

    assert_eq!(wire.matches("HTTP/1.1 200 OK").count(), 1);
}

#[tokio::test]
async fn test_keeps_serving_after_dropped_clients() {
    let addr = start().await;

    for _ in 0..4 {
        drop(TcpStream::connect(addr).await.unwrap());
    }
    let wire = send(addr, "GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert!(wire.starts_with("HTTP/1.1 200 OK\r\n"));
}
