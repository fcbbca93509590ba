//! Reads request heads off TCP connections and logs them.
//!
//! Bodies are not read, so only send requests without one.
//!
//! ```text
//! cargo run --example stream_demo
//! curl -v http://127.0.0.1:8080/hello
//! ```

use futures::StreamExt;
use micro_head::codec::HeadDecoder;
use micro_head::protocol::RequestHeader;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::FramedRead;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

const OK: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n";
const BAD_REQUEST: &[u8] = b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!(port = 8080, "start listening");
    let tcp_listener = match TcpListener::bind("127.0.0.1:8080").await {
        Ok(tcp_listener) => tcp_listener,
        Err(e) => {
            error!(cause = %e, "bind server error");
            return;
        }
    };

    loop {
        let (tcp_stream, remote_addr) = match tcp_listener.accept().await {
            Ok(stream_and_addr) => stream_and_addr,
            Err(e) => {
                warn!(cause = %e, "failed to accept");
                continue;
            }
        };

        tokio::spawn(async move {
            match process(tcp_stream).await {
                Ok(()) => info!(%remote_addr, "finished process, connection shutdown"),
                Err(e) => error!(%remote_addr, cause = %e, "connection has error, connection shutdown"),
            }
        });
    }
}

async fn process(tcp_stream: TcpStream) -> std::io::Result<()> {
    let (reader, mut writer) = tcp_stream.into_split();
    let mut framed_read = FramedRead::with_capacity(reader, HeadDecoder::new(), 8 * 1024);

    while let Some(result) = framed_read.next().await {
        let parsed = match result {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(cause = %e, "can't receive next request head");
                writer.write_all(BAD_REQUEST).await?;
                return Ok(());
            }
        };

        info!(
            method = %String::from_utf8_lossy(parsed.method()),
            target = %String::from_utf8_lossy(parsed.target()),
            headers = parsed.headers().len(),
            "receive request head"
        );

        match RequestHeader::try_from(parsed) {
            Ok(header) => info!(uri = %header.uri(), version = ?header.version(), "typed request head"),
            Err(e) => warn!(cause = %e, "request head is not representable as http types"),
        }

        writer.write_all(OK).await?;
    }

    Ok(())
}
