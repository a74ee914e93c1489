use apikey_header::auth::{AuthError, get_api_key};
use apikey_header::http::headers::HttpHeaders;

struct Case {
    name: &'static str,
    headers: HttpHeaders,
    expected: Result<&'static str, AuthError>,
}

fn authorization(value: &str) -> HttpHeaders {
    [("Authorization", value)].into_iter().collect()
}

#[test]
fn test_get_api_key() {
    let cases = [
        Case {
            name: "valid api key",
            headers: authorization("ApiKey test-api-key"),
            expected: Ok("test-api-key"),
        },
        Case {
            name: "missing authorization header",
            headers: HttpHeaders::new(),
            expected: Err(AuthError::NoAuthHeader),
        },
        Case {
            name: "malformed header, wrong scheme",
            headers: authorization("Bearer test-api-key"),
            expected: Err(AuthError::MalformedHeader),
        },
        Case {
            name: "malformed header, no token",
            headers: authorization("ApiKey"),
            expected: Err(AuthError::MalformedHeader),
        },
    ];

    for case in cases {
        assert_eq!(get_api_key(&case.headers), case.expected, "{}", case.name);
    }
}

#[test]
fn test_extraction_does_not_mutate_headers() {
    let headers: HttpHeaders = [("Host", "example.com"), ("authorization", "ApiKey k")]
        .into_iter()
        .collect();
    let before = headers.stringify();

    assert_eq!(get_api_key(&headers), Ok("k"));
    assert_eq!(get_api_key(&headers), Ok("k"));
    assert_eq!(headers.stringify(), before);
    assert_eq!(before, "Host: example.com\r\nauthorization: ApiKey k\r\n");
}

#[test]
fn test_unrelated_headers_do_not_count() {
    let headers: HttpHeaders = [("X-Api-Key", "ApiKey k"), ("Proxy-Authorization", "ApiKey k")]
        .into_iter()
        .collect();

    assert_eq!(get_api_key(&headers), Err(AuthError::NoAuthHeader));
}
