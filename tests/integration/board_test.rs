//! Integration tests for board endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

fn defense_body() -> serde_json::Value {
    json!({
        "tipo": "DEFESA",
        "trabalho": { "codigo": 7, "titulo": "Compiladores incrementais" },
        "membros": [
            { "codigo": 2, "nome": "Bia" },
            { "codigo": 1, "nome": "Ana" },
        ],
    })
}

#[tokio::test]
async fn test_board_crud() {
    let app = TestApp::new().await;
    let id = app.create_board(defense_body()).await;

    let fetched = app.request("GET", &format!("/banca/obter/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["tipo"], "DEFESA");
    assert_eq!(fetched.body["trabalho"]["titulo"], "Compiladores incrementais");
    assert_eq!(fetched.body["membros"][0]["codigo"], 1);
    assert_eq!(fetched.body["membros"][1]["codigo"], 2);

    let updated = app
        .request(
            "PUT",
            "/banca/alterar",
            Some(json!({
                "codigo": id,
                "tipo": "QUALIFICACAO",
                "membros": [{ "codigo": 3, "nome": "Caio" }],
            })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["tipo"], "QUALIFICACAO");
    assert!(updated.body["trabalho"].is_null());
    assert_eq!(updated.body["membros"].as_array().map(Vec::len), Some(1));

    let deleted = app
        .request("DELETE", &format!("/banca/excluir/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["codigo"], id);

    let missing = app.request("GET", &format!("/banca/obter/{id}"), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_member_reports_novelty() {
    let app = TestApp::new().await;
    let id = app
        .create_board(json!({ "tipo": "QUALIFICACAO" }))
        .await;
    let path = format!("/banca/{id}/membros");

    let first = app
        .request("POST", &path, Some(json!({ "codigo": 10, "nome": "Davi" })))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["adicionado"], true);

    let repeat = app
        .request("POST", &path, Some(json!({ "codigo": 10 })))
        .await;
    assert_eq!(repeat.status, StatusCode::OK);
    assert_eq!(repeat.body["adicionado"], false);

    let fetched = app.request("GET", &format!("/banca/obter/{id}"), None).await;
    assert_eq!(fetched.body["membros"].as_array().map(Vec::len), Some(1));
    assert_eq!(fetched.body["membros"][0]["nome"], "Davi");

    let no_board = app
        .request("POST", "/banca/999/membros", Some(json!({ "codigo": 10 })))
        .await;
    assert_eq!(no_board.status, StatusCode::NOT_FOUND);

    let bad_person = app
        .request("POST", &path, Some(json!({ "codigo": 0 })))
        .await;
    assert_eq!(bad_person.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_by_example() {
    let app = TestApp::new().await;
    let defense = app.create_board(defense_body()).await;
    app.create_board(json!({
        "tipo": "QUALIFICACAO",
        "trabalho": { "codigo": 8, "titulo": "Redes de sensores" },
    }))
    .await;

    let all = app.request("POST", "/banca/buscar", Some(json!({}))).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.items().len(), 2);

    let by_kind = app
        .request("POST", "/banca/buscar", Some(json!({ "tipo": "DEFESA" })))
        .await;
    assert_eq!(by_kind.items().len(), 1);
    assert_eq!(by_kind.items()[0]["codigo"], defense);

    let by_work = app
        .request(
            "POST",
            "/banca/buscar",
            Some(json!({ "trabalho": { "codigo": 8 } })),
        )
        .await;
    assert_eq!(by_work.items().len(), 1);
    assert_eq!(by_work.items()[0]["tipo"], "QUALIFICACAO");

    let by_id = app
        .request("POST", "/banca/buscar", Some(json!({ "codigo": defense })))
        .await;
    assert_eq!(by_id.items().len(), 1);

    let window = app.request("GET", "/banca/listar?offset=1&limit=5", None).await;
    assert_eq!(window.items().len(), 1);

    let empty = app.request("GET", "/banca/listar?limit=0", None).await;
    assert!(empty.items().is_empty());
}

#[tokio::test]
async fn test_invalid_board_rejected() {
    let app = TestApp::new().await;

    let blank_title = app
        .request(
            "POST",
            "/banca/persistir",
            Some(json!({
                "tipo": "DEFESA",
                "trabalho": { "codigo": 7, "titulo": "" },
            })),
        )
        .await;
    assert_eq!(blank_title.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank_title.body["details"][0]["field"], "trabalho.titulo");

    let bad_member = app
        .request(
            "POST",
            "/banca/persistir",
            Some(json!({
                "tipo": "DEFESA",
                "membros": [{ "codigo": 3 }, { "codigo": 0, "nome": "" }],
            })),
        )
        .await;
    assert_eq!(bad_member.status, StatusCode::BAD_REQUEST);
    let fields: Vec<_> = bad_member.body["details"]
        .as_array()
        .expect("details")
        .iter()
        .map(|d| d["field"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(fields, ["membros[1].codigo", "membros[1].nome"]);

    let unknown_kind = app
        .request("POST", "/banca/persistir", Some(json!({ "tipo": "BANCA" })))
        .await;
    assert_eq!(unknown_kind.status, StatusCode::BAD_REQUEST);

    let bad_id = app.request("GET", "/banca/obter/abc", None).await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);

    let missing_update = app
        .request(
            "PUT",
            "/banca/alterar",
            Some(json!({ "codigo": 404, "tipo": "DEFESA" })),
        )
        .await;
    assert_eq!(missing_update.status, StatusCode::NOT_FOUND);
}
