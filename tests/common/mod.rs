//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        204 => "204 No Content",
        302 => "302 Found",
        404 => "404 Not Found",
        429 => "429 Too Many Requests",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    }
}

/// Start a mock target that always answers with a fixed status.
#[allow(dead_code)]
pub async fn start_mock_target(addr: SocketAddr, status: u16) {
    start_programmable_target(addr, move || async move { (status, String::new()) }).await;
}

/// Start a programmable mock target; the handler decides status and body
/// per request (and may sleep to simulate a stalled target).
pub async fn start_programmable_target<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line(status),
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Start a mock notification endpoint that records the head of every
/// request it receives and answers with a fixed status.
#[allow(dead_code)]
pub async fn start_capturing_sink(addr: SocketAddr, status: u16) -> Arc<Mutex<Vec<String>>> {
    let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let captured = requests.clone();

    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let captured = captured.clone();
                    tokio::spawn(async move {
                        // Headers and body can arrive in separate segments;
                        // keep reading until the sender goes idle.
                        let mut data = Vec::new();
                        loop {
                            let mut buf = [0u8; 4096];
                            let read = tokio::time::timeout(
                                std::time::Duration::from_millis(100),
                                socket.read(&mut buf),
                            )
                            .await;
                            match read {
                                Ok(Ok(n)) if n > 0 => data.extend_from_slice(&buf[..n]),
                                _ => break,
                            }
                        }
                        captured
                            .lock()
                            .unwrap()
                            .push(String::from_utf8_lossy(&data).to_string());

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                            status_line(status)
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    requests
}
