use sha1::{Digest, Sha1};
use std::{env, io};
use tokio::net::TcpStream;
use wirehttp::{
    HeaderMap, Request, StatusCode, Writer, response::default_headers, server::BoxError,
};

const BAD_REQUEST: &str = "<html>
  <head>
    <title>400 Bad Request</title>
  </head>
  <body>
    <h1>Bad Request</h1>
    <p>Your request honestly kinda sucked.</p>
  </body>
</html>
";

const INTERNAL_ERROR: &str = "<html>
  <head>
    <title>500 Internal Server Error</title>
  </head>
  <body>
    <h1>Internal Server Error</h1>
    <p>Okay, you know what? This one is on me.</p>
  </body>
</html>
";

const SUCCESS: &str = "<html>
  <head>
    <title>200 OK</title>
  </head>
  <body>
    <h1>Success!</h1>
    <p>Your request was an absolute banger.</p>
  </body>
</html>
";

const CHUNK_SIZE: usize = 1024;

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let port = match env::var("PORT").ok().and_then(|port| port.parse::<u16>().ok()) {
        Some(port) if port != 0 => port,
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "`PORT` environment variable must be a non-zero port number",
            ));
        }
    };

    let mut server = wirehttp::serve(port, handle).await?;
    println!("Server started on {server}");

    tokio::signal::ctrl_c().await?;
    server.close().await?;
    println!("Server gracefully stopped");
    Ok(())
}

async fn handle(mut writer: Writer<TcpStream>, request: Request) -> Result<(), BoxError> {
    match request.target() {
        "/client-error" => html(&mut writer, StatusCode::ClientError, BAD_REQUEST).await,
        "/internal-error" => html(&mut writer, StatusCode::ServerError, INTERNAL_ERROR).await,
        target => match target.strip_prefix("/chunked/") {
            Some(count) => match count.parse() {
                Ok(count) => chunked(&mut writer, count).await,
                Err(_) => html(&mut writer, StatusCode::ClientError, BAD_REQUEST).await,
            },
            None => html(&mut writer, StatusCode::Successful, SUCCESS).await,
        },
    }
}

async fn html(
    writer: &mut Writer<TcpStream>,
    status: StatusCode,
    body: &str,
) -> Result<(), BoxError> {
    let mut headers = default_headers(body.len());
    headers.replace("Content-Type", "text/html")?;

    writer.write_status_line(status).await?;
    writer.write_headers(&headers).await?;
    writer.write_body(body.as_bytes()).await?;
    Ok(())
}

/// Stream `count` chunks, each [`CHUNK_SIZE`] bytes, followed by content digest trailers.
async fn chunked(writer: &mut Writer<TcpStream>, count: usize) -> Result<(), BoxError> {
    let mut headers = default_headers(0);
    headers.remove("Content-Length");
    headers.replace("Transfer-Encoding", "chunked")?;
    headers.replace("Trailer", "X-Content-SHA1, X-Content-Length")?;

    writer.write_status_line(StatusCode::Successful).await?;
    writer.write_headers(&headers).await?;

    let mut sha1 = Sha1::new();
    let mut len = 0;

    for i in 0..count {
        let chunk = [b'a' + (i % 26) as u8; CHUNK_SIZE];
        writer.write_chunked_body(&chunk).await?;
        sha1.update(chunk);
        len += chunk.len();
    }

    let digest = sha1
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<String>();

    let mut trailers = HeaderMap::new();
    trailers.set("X-Content-SHA1", digest)?;
    trailers.set("X-Content-Length", len.to_string())?;

    writer.write_chunked_body_done().await?;
    writer.write_trailers(&trailers).await?;
    writer.flush().await?;
    Ok(())
}
