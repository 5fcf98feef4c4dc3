use crate::common::ParseResult;
use crate::h1::parser::{RequestLine, RequestLineError};

#[test]
fn test_parse_reqline() {
    macro_rules! test {
        (#[pending] $input:literal) => {
            assert!(RequestLine::parse_chunk($input).is_pending());
        };
        (#[error] $input:literal, $err:pat) => {
            match RequestLine::parse_chunk($input) {
                ParseResult::Err($err) => { }
                ParseResult::Err(err) => panic!("unexpected error variant: {err:?}"),
                ParseResult::Ok(ok) => panic!("expected `Err` but returns `Ok` with {ok:?}"),
                ParseResult::Pending => panic!("line {}, unexpected ParseResult::Pending", line!()),
            }
        };
        {
            $input:literal;
            $m:literal, $t:literal;
            $read:literal
        } => {
            let ParseResult::Ok((reqline, read)) = RequestLine::parse_chunk($input) else {
                panic!("expected `Ok` for {:?}", $input)
            };
            assert_eq!(reqline.method(), $m);
            assert_eq!(reqline.target(), $t);
            assert_eq!(reqline.version(), "1.1");
            assert_eq!(read, $read, "invalid consumed bytes");
        };
    }

    test! {
        b"GET / HTTP/1.1\r\n";
        "GET", "/";
        16
    };
    test! {
        b"GET / HTTP/1.1\r\nHost: localhost:42069\r\n";
        "GET", "/";
        16
    };
    test! {
        b"POST /coffee HTTP/1.1\r\nHost: localhost:42069\r\n\r\n{\"flavor\":\"dark mode\"}";
        "POST", "/coffee";
        23
    };
    test! {
        b"GET /search?search=adequate&filter=available HTTP/1.1\r\n";
        "GET", "/search?search=adequate&filter=available";
        55
    };
    test! {
        b"OPTIONS * HTTP/1.1\r\n";
        "OPTIONS", "*";
        20
    };
    test! {
        b"BREW /pot HTTP/1.1\r\n";
        "BREW", "/pot";
        20
    };

    // Error
    test!(#[error] b"/coffee HTTP/1.1\r\n", RequestLineError::InvalidFormat(_));
    test!(#[error] b"GET /coffee\r\n", RequestLineError::InvalidFormat(_));
    test!(#[error] b"GET  /coffee HTTP/1.1\r\n", RequestLineError::InvalidFormat(_));
    test!(#[error] b"GET /coffee HTTP/1.1 extra\r\n", RequestLineError::InvalidFormat(_));
    test!(#[error] b"get /coffee HTTP/1.1\r\n", RequestLineError::InvalidMethod(_));
    test!(#[error] b"G3T /coffee HTTP/1.1\r\n", RequestLineError::InvalidMethod(_));
    test!(#[error] b"GET /coffee HTTP1.1\r\n", RequestLineError::MalformedVersion(_));
    test!(#[error] b"GET /coffee HTTP/1/1\r\n", RequestLineError::MalformedVersion(_));
    test!(#[error] b"GET /coffee HTTPS/1.1\r\n", RequestLineError::UnrecognizedVersion(_));
    test!(#[error] b"GET / HTTP/2.0\r\n", RequestLineError::UnsupportedVersion(_));
    test!(#[error] b"GET / HTTP/1.0\r\n", RequestLineError::UnsupportedVersion(_));
    test!(#[error] b"GET /\xff HTTP/1.1\r\n", RequestLineError::InvalidUtf8);

    // Pending
    test!(#[pending] b"");
    test!(#[pending] b"GET / HTTP/1.1");
    test!(#[pending] b"GET / HTTP/1.1\r");
    test!(#[pending] b"GET / HTTP/1.1\n");
    test!(#[pending] b"GET / ");
}

#[test]
fn test_reqline_display() {
    let line: RequestLine = "GET /home HTTP/1.1".parse().unwrap();
    assert_eq!(line.to_string(), "GET /home HTTP/1.1");
}
