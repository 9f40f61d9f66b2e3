//! `war:` dispatch served through the shared call machinery.

mod common;

use common::{ContainerRequest, ContainerResponse};
use container_bridge::{
    BridgeError, HttpCallAdapter, LocalEntityResolver, LocalProtocolHelper,
};
use url::Url;

#[tokio::test]
async fn bundled_resource_served_end_to_end() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("app.css"), b"body { margin: 0 }").unwrap();
    let helper = LocalProtocolHelper::new(LocalEntityResolver::new(root.path()));

    let uri = Url::parse("war:///app.css").unwrap();
    let engine_response = helper.dispatch(&uri, "/app.css").await.unwrap();
    assert_eq!(engine_response.status, 200);

    let mut request = ContainerRequest::get("/app.css");
    let mut response = ContainerResponse::new();
    {
        let mut adapter = HttpCallAdapter::new(&mut request, &mut response);
        if let Some(entity) = &engine_response.entity {
            adapter.stage_entity_headers(entity);
        }
        adapter.commit(engine_response).await.unwrap();
    }

    assert_eq!(response.status, Some(200));
    assert!(response
        .headers
        .contains(&("Content-Type".to_string(), "text/css".to_string())));
    assert_eq!(
        response.headers.last().unwrap(),
        &("Content-Length".to_string(), "18".to_string())
    );
    assert_eq!(response.stream.data, b"body { margin: 0 }");
}

#[tokio::test]
async fn missing_resource_flows_out_as_an_error_commit() {
    let root = tempfile::tempdir().unwrap();
    let helper = LocalProtocolHelper::new(LocalEntityResolver::new(root.path()));

    let uri = Url::parse("war:///missing.txt").unwrap();
    let engine_response = helper.dispatch(&uri, "/missing.txt").await.unwrap();
    assert_eq!(engine_response.status, 404);
    assert!(engine_response.entity.is_none());

    let mut request = ContainerRequest::get("/missing.txt");
    let mut response = ContainerResponse::new();
    {
        let mut adapter = HttpCallAdapter::new(&mut request, &mut response);
        adapter.commit(engine_response).await.unwrap();
    }

    assert_eq!(response.error_sent, Some((404, "Not Found".to_string())));
    assert!(!response
        .header_names()
        .iter()
        .any(|name| name.eq_ignore_ascii_case("content-length")));
}

#[tokio::test]
async fn foreign_scheme_never_reaches_the_resolver() {
    // A root that does not exist: if the resolver ran, this would be a 404
    // response instead of an immediate error.
    let helper = LocalProtocolHelper::new(LocalEntityResolver::new("/nonexistent-context"));

    let uri = Url::parse("http://example.com/entry.txt").unwrap();
    match helper.dispatch(&uri, "/entry.txt").await {
        Err(BridgeError::UnsupportedScheme { scheme }) => assert_eq!(scheme, "http"),
        other => panic!("expected an unsupported-scheme error, got {other:?}"),
    }
}
