//! Request line and query parsing.

use greenhouse_core::http::{
    HttpMethod,
    RequestTarget,
    parse_int_lenient,
    parse_request_line,
    request_line,
    url_decode,
};

#[test]
fn parses_method_and_target() {
    let head = "GET /light/brightness/?value=40 HTTP/1.1\r\nHost: 192.168.4.1\r\n\r\n";

    assert_eq!(
        parse_request_line(head),
        Some((HttpMethod::Get, "/light/brightness/?value=40"))
    );
    assert_eq!(
        parse_request_line("POST /pump/on HTTP/1.1"),
        Some((HttpMethod::Post, "/pump/on"))
    );
}

#[test]
fn rejects_unknown_method_or_missing_target() {
    assert_eq!(parse_request_line("BREW /pot HTTP/1.1\r\n"), None);
    assert_eq!(parse_request_line("GET\r\n"), None);
    assert_eq!(parse_request_line(""), None);
}

#[test]
fn splits_path_query_and_fragment() {
    let target = RequestTarget::parse("/light/color/?value=abc#top");
    assert_eq!(target.path, "/light/color/");
    assert_eq!(target.query, Some("value=abc"));

    let target = RequestTarget::parse("/sensor/data");
    assert_eq!(target.path, "/sensor/data");
    assert_eq!(target.query, None);
}

#[test]
fn finds_first_matching_parameter() {
    let target = RequestTarget::parse("/x?other=1&value=7&value=9");
    assert_eq!(target.query_param("value").as_deref(), Some("7"));
    assert_eq!(target.query_param("missing"), None);

    let target = RequestTarget::parse("/x?value");
    assert_eq!(target.query_param("value").as_deref(), Some(""));

    let target = RequestTarget::parse("/x");
    assert_eq!(target.query_param("value"), None);
}

#[test]
fn decodes_escapes_and_plus() {
    assert_eq!(url_decode("%23ff8000"), "#ff8000");
    assert_eq!(url_decode("a+b%20c"), "a b c");
    assert_eq!(url_decode("100%"), "100%");
    assert_eq!(url_decode("%zz"), "%zz");
    assert_eq!(url_decode("%C3%A9"), "é");
}

#[test]
fn lenient_integers_follow_atoi() {
    assert_eq!(parse_int_lenient("42"), 42);
    assert_eq!(parse_int_lenient("  -17"), -17);
    assert_eq!(parse_int_lenient("+8"), 8);
    assert_eq!(parse_int_lenient("12abc"), 12);
    assert_eq!(parse_int_lenient("abc"), 0);
    assert_eq!(parse_int_lenient(""), 0);
    assert_eq!(parse_int_lenient("-"), 0);
    assert_eq!(parse_int_lenient("3.9"), 3);
    assert_eq!(parse_int_lenient("99999999999999"), i32::MAX);
    assert_eq!(parse_int_lenient("-99999999999999"), i32::MIN);
}

#[test]
fn request_line_ignores_bytes_in_later_headers() {
    let head = b"GET /pump/on HTTP/1.1\r\nUser-Agent: \xff\xfe\r\n\r\n";

    let line = request_line(head).unwrap();
    assert_eq!(line, "GET /pump/on HTTP/1.1");
    assert_eq!(parse_request_line(line), Some((HttpMethod::Get, "/pump/on")));
}

#[test]
fn request_line_survives_a_head_cut_inside_a_character() {
    let mut head = b"GET /sensor/data HTTP/1.1\r\nX-Name: ".to_vec();
    head.extend_from_slice(&"é".as_bytes()[..1]);

    assert_eq!(request_line(&head), Some("GET /sensor/data HTTP/1.1"));
    assert_eq!(request_line(b"GET /\xff HTTP/1.1\r\n"), None);
    assert_eq!(request_line(b"GET / HTTP/1.1"), Some("GET / HTTP/1.1"));
}

#[test]
fn plus_and_encoded_plus_decode_differently() {
    assert_eq!(url_decode("1+1%2B1"), "1 1+1");
}
