use crate::endpoints::Endpoints;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

/// Answers exactly one HTTP request with a canned JSON response and hands
/// back the raw request it received.
pub struct OneShotServer {
    base: String,
    request: JoinHandle<eyre::Result<String>>,
}

impl OneShotServer {
    pub async fn respond(status: u16, body: &str) -> eyre::Result<OneShotServer> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base = format!("http://{}", listener.local_addr()?);
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason(status),
            body.len(),
            body
        );

        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await?;
            let request = read_request(&mut socket).await?;
            socket.write_all(response.as_bytes()).await?;
            socket.shutdown().await?;
            Ok::<_, eyre::Report>(request)
        });

        Ok(OneShotServer { base, request })
    }

    /// A client that talks to this server directly, ignoring any
    /// proxy configured in the environment.
    pub fn client(&self) -> eyre::Result<reqwest::Client> {
        Ok(reqwest::Client::builder().no_proxy().build()?)
    }

    pub fn endpoints(&self) -> eyre::Result<Endpoints> {
        Endpoints::at(&self.base)
    }

    /// The request as received, with its header lines lowercased.
    pub async fn request(self) -> eyre::Result<String> {
        let raw = self.request.await??;
        let Some((head, body)) = raw.split_once("\r\n\r\n") else {
            return Ok(raw);
        };
        let (request_line, headers) = head.split_once("\r\n").unwrap_or((head, ""));
        Ok(format!(
            "{}\r\n{}\r\n\r\n{}",
            request_line,
            headers.to_lowercase(),
            body
        ))
    }
}

async fn read_request(socket: &mut TcpStream) -> eyre::Result<String> {
    let mut raw = Vec::new();
    let mut buffer = [0; 1024];
    loop {
        let n = socket.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buffer[..n]);

        let text = String::from_utf8_lossy(&raw);
        if let Some((head, body)) = text.split_once("\r\n\r\n") {
            let content_length = head
                .to_lowercase()
                .lines()
                .find_map(|line| line.strip_prefix("content-length:").map(str::trim).map(str::to_string))
                .and_then(|value| value.parse::<usize>().ok())
                .unwrap_or(0);
            if body.len() >= content_length {
                break;
            }
        }
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
