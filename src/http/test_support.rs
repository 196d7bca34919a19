use std::future::Future;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

pub(crate) const OK_RESPONSE: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok";
pub(crate) const SERVER_ERROR_RESPONSE: &[u8] =
    b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

/// Serves `response` to every incoming connection until the returned task is
/// aborted. Connections close after one response, so each request opens a
/// fresh connection.
pub(crate) async fn spawn_mock_server(
    response: &'static [u8],
) -> Result<(SocketAddr, JoinHandle<()>), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("Failed to bind mock server: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("Failed to read mock server addr: {}", err))?;

    let task = tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut request = Vec::with_capacity(1024);
                loop {
                    let mut chunk = [0_u8; 1024];
                    let read = match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(read) => read,
                    };
                    if let Some(prefix) = chunk.get(..read) {
                        request.extend_from_slice(prefix);
                    }
                    if request.windows(4).any(|bytes| bytes == b"\r\n\r\n") {
                        break;
                    }
                }
                drop(stream.write_all(response).await);
            });
        }
    });
    Ok((addr, task))
}

/// Binds and immediately drops a listener to obtain a local port that
/// refuses connections.
pub(crate) async fn refused_target_url() -> Result<Url, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("Failed to bind probe listener: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("Failed to read probe addr: {}", err))?;
    drop(listener);
    target_url(addr)
}

pub(crate) fn target_url(addr: SocketAddr) -> Result<Url, String> {
    Url::parse(&format!("http://{}/", addr))
        .map_err(|err| format!("Failed to parse test URL: {}", err))
}
