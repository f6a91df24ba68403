use super::*;

#[test]
fn builder_collects_query_pairs_in_order() {
    let req = ApiRequest::get("/books").query("skip", 20).query("limit", 10).query("keyword", "dune");
    assert_eq!(req.method, Method::Get);
    assert_eq!(
        req.query,
        vec![
            ("skip".to_owned(), "20".to_owned()),
            ("limit".to_owned(), "10".to_owned()),
            ("keyword".to_owned(), "dune".to_owned()),
        ]
    );
    assert_eq!(req.body(), Ok(None));
}

#[test]
fn json_body_is_encoded_eagerly() {
    let req = ApiRequest::post("/auth/login").json(&serde_json::json!({ "username": "alice" }));
    assert_eq!(req.body(), Ok(Some(r#"{"username":"alice"}"#)));
}

#[test]
fn unencodable_body_is_kept_as_error() {
    use std::collections::HashMap;

    // JSON object keys must be strings.
    let mut bad = HashMap::new();
    bad.insert(vec![1u8], 1);
    let req = ApiRequest::post("/x").json(&bad);
    assert!(req.body().is_err());
}

#[test]
fn header_lookup_ignores_case() {
    let prepared = PreparedRequest {
        method: Method::Get,
        url: "/api/books".to_owned(),
        query: Vec::new(),
        headers: vec![("Authorization".to_owned(), "Bearer t".to_owned())],
        body: None,
    };
    assert_eq!(prepared.header("authorization"), Some("Bearer t"));
    assert!(prepared.header("content-type").is_none());
}

#[test]
fn method_display_is_uppercase_verb() {
    assert_eq!(Method::Delete.to_string(), "DELETE");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_transport_reports_no_response_outside_browser() {
    let prepared = PreparedRequest {
        method: Method::Get,
        url: "/api/books".to_owned(),
        query: Vec::new(),
        headers: Vec::new(),
        body: None,
    };
    let result = futures::executor::block_on(FetchTransport.send(&prepared));
    assert!(matches!(result, Err(TransportError::NoResponse(_))));
}
