use crate::headers::HeaderMap;
use crate::http::StatusCode;
use crate::response::{WriteError, Writer, default_headers};

fn writer() -> Writer<Vec<u8>> {
    Writer::new(Vec::new())
}

#[tokio::test]
async fn test_status_line() {
    macro_rules! test {
        ($status:ident, $expected:literal) => {
            let mut w = writer();
            w.write_status_line(StatusCode::$status).await.unwrap();
            assert_eq!(w.into_inner(), $expected);
        };
    }

    test!(Successful, b"HTTP/1.1 200 OK\r\n");
    test!(Redirect, b"HTTP/1.1 300 Multiple Choices\r\n");
    test!(ClientError, b"HTTP/1.1 400 Bad Request\r\n");
    test!(ServerError, b"HTTP/1.1 500 Internal Server Error\r\n");
}

#[tokio::test]
async fn test_status_code() {
    let mut w = writer();
    w.write_status_code(500).await.unwrap();
    w.write_status_code(418).await.unwrap();
    assert_eq!(w.into_inner(), b"HTTP/1.1 500 Internal Server Error\r\nHTTP/1.1 418 \r\n");
}

#[tokio::test]
async fn test_headers() {
    let mut headers = HeaderMap::new();
    headers.set("Content-Length", "5").unwrap();

    let mut w = writer();
    w.write_headers(&headers).await.unwrap();
    assert_eq!(w.into_inner(), b"content-length: 5\r\n\r\n");
}

#[tokio::test]
async fn test_empty_headers() {
    let mut w = writer();
    let err = w.write_headers(&HeaderMap::new()).await.unwrap_err();
    assert!(matches!(err, WriteError::EmptyHeaders));
    assert!(w.get_ref().is_empty());
}

#[tokio::test]
async fn test_full_response() {
    let mut headers = HeaderMap::new();
    headers.set("content-type", "text/plain").unwrap();

    let mut w = writer();
    w.write_status_line(StatusCode::Successful).await.unwrap();
    w.write_headers(&headers).await.unwrap();
    assert_eq!(w.write_body(b"hello").await.unwrap(), 5);
    assert_eq!(
        w.into_inner(),
        b"HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\n\r\nhello"
    );
}

#[tokio::test]
async fn test_chunked_body() {
    let mut w = writer();
    assert_eq!(w.write_chunked_body(b"hello").await.unwrap(), 10);
    assert_eq!(w.write_chunked_body_done().await.unwrap(), 3);
    w.write_trailers(&HeaderMap::new()).await.unwrap();
    w.flush().await.unwrap();
    assert_eq!(w.into_inner(), b"5\r\nhello\r\n0\r\n\r\n");
}

#[tokio::test]
async fn test_chunked_body_hex_size() {
    let chunk = [b'x'; 1024];
    let mut w = writer();
    assert_eq!(w.write_chunked_body(&chunk).await.unwrap(), 3 + 2 + 1024 + 2);

    let out = w.into_inner();
    assert!(out.starts_with(b"400\r\nxxx"));
    assert!(out.ends_with(b"xxx\r\n"));
}

#[tokio::test]
async fn test_empty_chunk_writes_nothing() {
    let mut w = writer();
    assert_eq!(w.write_chunked_body(b"").await.unwrap(), 0);
    assert!(w.get_ref().is_empty());
}

#[tokio::test]
async fn test_trailers() {
    let mut trailers = HeaderMap::new();
    trailers.set("X-Content-Length", "5").unwrap();

    let mut w = writer();
    w.write_chunked_body(b"hello").await.unwrap();
    w.write_chunked_body_done().await.unwrap();
    w.write_trailers(&trailers).await.unwrap();
    assert_eq!(
        w.into_inner(),
        b"5\r\nhello\r\n0\r\nx-content-length: 5\r\n\r\n"
    );
}

#[test]
fn test_default_headers() {
    let headers = default_headers(12);
    assert_eq!(headers.len(), 4);
    assert_eq!(headers.get("Content-Length"), Some("12"));
    assert_eq!(headers.get("Content-Type"), Some("text/plain"));
    assert_eq!(headers.get("Connection"), Some("close"));
    assert!(headers.get("Date").is_some_and(|date| date.ends_with(" GMT")));
}
