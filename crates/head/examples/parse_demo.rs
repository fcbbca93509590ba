use std::process::ExitCode;

use micro_head::{describe, parse};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

const REQUEST: &[u8] = b"GET http://www.hatsunemiku.com/ HTTP/1.1\r\n\
Host: www.example.com\r\n\
Content-Length: 10\r\n\
Accept-Encoding: utf-8\r\n\
\r\n\
Hello World";

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let result = parse(REQUEST, REQUEST.len());
    info!(outcome = describe(&result), "parsed request head");

    let request = match result {
        Ok(request) => request,
        Err(e) => {
            error!(cause = %e, "parse request head error");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", String::from_utf8_lossy(request.method()));
    println!("{}", String::from_utf8_lossy(request.target()));
    println!("{}", String::from_utf8_lossy(request.version()));

    for (name, value) in request.headers() {
        println!("{} {}", String::from_utf8_lossy(name), String::from_utf8_lossy(value));
    }

    ExitCode::SUCCESS
}
