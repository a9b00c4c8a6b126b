//! Upstream HTTP clients for reel.
//!
//! This crate provides the film catalogue and IMDb enrichment clients used
//! by the film catalogue engine in `reel-core`.

pub mod error;
pub mod imdb;
pub mod swapi;

pub use error::UpstreamError;
pub use imdb::{ImdbClient, ImdbConfig};
pub use swapi::{SwapiClient, SwapiConfig};

#[cfg(test)]
pub(crate) mod test_server {
    //! One-shot HTTP responder for exercising the clients end to end.

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve a single response. Returns the origin URL and a handle yielding the raw request head.
    pub async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&head).to_string()
        });

        (origin, handle)
    }
}
