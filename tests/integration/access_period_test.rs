//! Integration tests for access period endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, at};

#[tokio::test]
async fn test_registration_period_lifecycle() {
    let app = TestApp::new().await;

    let stored = app
        .create_period("CADASTRAMENTO", "2015-01-01T19:00:00Z", "2015-01-01T19:50:00Z")
        .await;
    assert_eq!(stored["codigo"], "CADASTRAMENTO");

    let fetched = app
        .request("GET", "/periodoAcesso/obter/CADASTRAMENTO", None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.instant("inicio"), at(19, 0));
    assert_eq!(fetched.instant("termino"), at(19, 50));

    let updated = app
        .request(
            "PUT",
            "/periodoAcesso/alterar",
            Some(json!({
                "codigo": "CADASTRAMENTO",
                "inicio": "2015-01-01T20:00:00Z",
                "termino": "2015-01-01T20:50:00Z",
            })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let fetched = app
        .request("GET", "/periodoAcesso/obter/CADASTRAMENTO", None)
        .await;
    assert_eq!(fetched.instant("inicio"), at(20, 0));
    assert_eq!(fetched.instant("termino"), at(20, 50));

    let deleted = app
        .request("DELETE", "/periodoAcesso/excluir/CADASTRAMENTO", None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.instant("inicio"), at(20, 0));

    let found = app
        .request(
            "POST",
            "/periodoAcesso/buscar",
            Some(json!({ "codigo": "CADASTRAMENTO" })),
        )
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert!(found.items().is_empty());

    let missing = app
        .request("GET", "/periodoAcesso/obter/CADASTRAMENTO", None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_search_by_persisted_identifier_finds_one() {
    let app = TestApp::new().await;
    let registration = app
        .create_period("CADASTRAMENTO", "2015-01-01T19:00:00Z", "2015-01-01T19:50:00Z")
        .await;
    app.create_period("ESCOLHA", "2015-01-01T17:00:00-03:00", "2015-01-01T17:50:00-03:00")
        .await;

    let by_code = app
        .request(
            "POST",
            "/periodoAcesso/buscar",
            Some(json!({ "codigo": "CADASTRAMENTO" })),
        )
        .await;
    assert_eq!(by_code.status, StatusCode::OK);
    assert_eq!(by_code.items().len(), 1);
    assert_eq!(by_code.items()[0]["codigo"], "CADASTRAMENTO");

    let by_entity = app
        .request("POST", "/periodoAcesso/buscar", Some(registration))
        .await;
    assert_eq!(by_entity.status, StatusCode::OK);
    assert_eq!(by_entity.items().len(), 1);
    assert_eq!(by_entity.items()[0]["codigo"], "CADASTRAMENTO");

    // Same instants as stored, written in UTC.
    let by_instants = app
        .request(
            "POST",
            "/periodoAcesso/buscar",
            Some(json!({
                "codigo": "ESCOLHA",
                "inicio": "2015-01-01T20:00:00Z",
                "termino": "2015-01-01T20:50:00Z",
            })),
        )
        .await;
    assert_eq!(by_instants.status, StatusCode::OK);
    assert_eq!(by_instants.items().len(), 1);
    assert_eq!(by_instants.items()[0]["codigo"], "ESCOLHA");

    let mismatched = app
        .request(
            "POST",
            "/periodoAcesso/buscar",
            Some(json!({
                "codigo": "CADASTRAMENTO",
                "inicio": "2015-01-01T20:00:00Z",
            })),
        )
        .await;
    assert!(mismatched.items().is_empty());
}

#[tokio::test]
async fn test_duplicate_action_conflicts() {
    let app = TestApp::new().await;
    app.create_period("ESCOLHA", "2015-01-01T20:00:00Z", "2015-01-01T20:50:00Z")
        .await;

    let response = app
        .request(
            "POST",
            "/periodoAcesso/persistir",
            Some(json!({
                "codigo": "ESCOLHA",
                "inicio": "2015-01-02T20:00:00Z",
                "termino": "2015-01-02T20:50:00Z",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_inverted_bounds_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/periodoAcesso/persistir",
            Some(json!({
                "codigo": "ESCOLHA",
                "inicio": "2015-01-01T21:00:00Z",
                "termino": "2015-01-01T20:00:00Z",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let listed = app.request("GET", "/periodoAcesso/listar", None).await;
    assert!(listed.items().is_empty());
}

#[tokio::test]
async fn test_overlapping_periods_conflict() {
    let app = TestApp::new().await;
    app.create_period("CADASTRAMENTO", "2015-01-01T19:00:00Z", "2015-01-01T19:50:00Z")
        .await;

    let overlapping = app
        .request(
            "POST",
            "/periodoAcesso/persistir",
            Some(json!({
                "codigo": "ESCOLHA",
                "inicio": "2015-01-01T19:30:00Z",
                "termino": "2015-01-01T20:30:00Z",
            })),
        )
        .await;
    assert_eq!(overlapping.status, StatusCode::CONFLICT);

    app.create_period("ESCOLHA", "2015-01-01T19:50:00Z", "2015-01-01T20:30:00Z")
        .await;

    let stretched = app
        .request(
            "PUT",
            "/periodoAcesso/alterar",
            Some(json!({
                "codigo": "CADASTRAMENTO",
                "inicio": "2015-01-01T19:00:00Z",
                "termino": "2015-01-01T20:00:00Z",
            })),
        )
        .await;
    assert_eq!(stretched.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_pagination_window() {
    let app = TestApp::new().await;
    app.create_period("ESCOLHA", "2015-01-01T20:00:00Z", "2015-01-01T20:50:00Z")
        .await;
    app.create_period("CADASTRAMENTO", "2015-01-01T19:00:00Z", "2015-01-01T19:50:00Z")
        .await;

    let all = app.request("GET", "/periodoAcesso/listar", None).await;
    assert_eq!(all.status, StatusCode::OK);
    let codes: Vec<_> = all.items().iter().map(|p| p["codigo"].clone()).collect();
    assert_eq!(codes, [json!("CADASTRAMENTO"), json!("ESCOLHA")]);

    let none = app
        .request("GET", "/periodoAcesso/listar?limit=0", None)
        .await;
    assert_eq!(none.status, StatusCode::OK);
    assert!(none.items().is_empty());

    let past_end = app
        .request("GET", "/periodoAcesso/listar?offset=5", None)
        .await;
    assert!(past_end.items().is_empty());

    let second = app
        .request("GET", "/periodoAcesso/listar?offset=1&limit=1", None)
        .await;
    assert_eq!(second.items().len(), 1);
    assert_eq!(second.items()[0]["codigo"], "ESCOLHA");

    let first_page = app
        .request("POST", "/periodoAcesso/buscar?limit=1", Some(json!({})))
        .await;
    assert_eq!(first_page.items().len(), 1);
    assert_eq!(first_page.items()[0]["codigo"], "CADASTRAMENTO");

    let negative = app
        .request("GET", "/periodoAcesso/listar?limit=-1", None)
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_by_start_instant() {
    let app = TestApp::new().await;
    app.create_period("ESCOLHA", "2015-01-01T20:00:00Z", "2015-01-01T20:50:00Z")
        .await;
    app.create_period("CADASTRAMENTO", "2015-01-01T19:00:00Z", "2015-01-01T19:50:00Z")
        .await;

    let found = app
        .request(
            "POST",
            "/periodoAcesso/buscar",
            Some(json!({ "inicio": "2015-01-01T20:00:00Z" })),
        )
        .await;
    assert_eq!(found.items().len(), 1);
    assert_eq!(found.items()[0]["codigo"], "ESCOLHA");
}

#[tokio::test]
async fn test_unknown_action_code_rejected() {
    let app = TestApp::new().await;

    let by_path = app
        .request("GET", "/periodoAcesso/obter/MATRICULA", None)
        .await;
    assert_eq!(by_path.status, StatusCode::BAD_REQUEST);

    let by_example = app
        .request(
            "POST",
            "/periodoAcesso/buscar",
            Some(json!({ "codigo": "MATRICULA" })),
        )
        .await;
    assert_eq!(by_example.status, StatusCode::BAD_REQUEST);
    assert_eq!(by_example.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_and_delete_missing_period() {
    let app = TestApp::new().await;

    let update = app
        .request(
            "PUT",
            "/periodoAcesso/alterar",
            Some(json!({
                "codigo": "ESCOLHA",
                "inicio": "2015-01-01T20:00:00Z",
                "termino": "2015-01-01T20:50:00Z",
            })),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app
        .request("DELETE", "/periodoAcesso/excluir/ESCOLHA", None)
        .await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_open_status() {
    let app = TestApp::new().await;
    app.create_period("ESCOLHA", "2015-01-01T20:00:00Z", "2015-01-01T20:50:00Z")
        .await;

    let open = app
        .request(
            "GET",
            "/periodoAcesso/aberto/ESCOLHA?instante=2015-01-01T20:10:00Z",
            None,
        )
        .await;
    assert_eq!(open.status, StatusCode::OK);
    assert_eq!(open.body["codigo"], "ESCOLHA");
    assert_eq!(open.body["aberto"], true);

    let closed = app
        .request(
            "GET",
            "/periodoAcesso/aberto/ESCOLHA?instante=2015-01-01T21:00:00Z",
            None,
        )
        .await;
    assert_eq!(closed.body["aberto"], false);

    let missing = app
        .request("GET", "/periodoAcesso/aberto/CADASTRAMENTO", None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/periodoAcesso/persistir",
            Some(json!({ "codigo": "ESCOLHA", "inicio": "ontem" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
