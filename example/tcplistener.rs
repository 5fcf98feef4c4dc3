use std::{env, io};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(42069u16);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    println!("Listening on {}", listener.local_addr()?);

    loop {
        let (mut stream, peer) = listener.accept().await?;
        println!("Accepted connection from {peer}");

        match wirehttp::read_request(&mut stream).await {
            Ok(request) => println!("{request}"),
            Err(err) => eprintln!("Failed to read request: {err}"),
        }

        println!("Connection to {peer} closed");
    }
}
