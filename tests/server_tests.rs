mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use common::{write_column, Cell};
use nthmin::server::configure;
use nthmin::NthMinimumService;

async fn get(service: NthMinimumService, uri: &str) -> (StatusCode, Option<String>, web::Bytes) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(configure),
    )
    .await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    (status, content_type, test::read_body(resp).await)
}

/// Los errores van como texto plano, sin comillas JSON alrededor.
fn error_message(content_type: Option<&str>, body: &[u8]) -> String {
    let content_type = content_type.unwrap_or_default();
    assert!(content_type.starts_with("text/plain"), "content-type: {}", content_type);
    String::from_utf8(body.to_vec()).expect("el cuerpo de error debe ser UTF-8")
}

#[actix_web::test]
async fn test_find_nth_min_ok() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_column(
        dir.path(),
        "datos.xlsx",
        &[
            Cell::Num(5.0),
            Cell::Num(3.0),
            Cell::Num(8.0),
            Cell::Num(1.0),
            Cell::Num(9.0),
            Cell::Num(2.0),
        ],
    );

    let uri = format!("/api/find-nth-min?filePath={}&n=3", path.display());
    let (status, content_type, body) = get(NthMinimumService::excel(), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(serde_json::from_slice::<i64>(&body).unwrap(), 3);
}

#[actix_web::test]
async fn test_archivo_solo_texto_da_400() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_column(
        dir.path(),
        "texto.xlsx",
        &[Cell::Text("hola"), Cell::Text("mundo")],
    );

    let uri = format!("/api/find-nth-min?filePath={}&n=1", path.display());
    let (status, content_type, body) = get(NthMinimumService::excel(), &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let msg = error_message(content_type.as_deref(), &body);
    assert!(msg.starts_with("Error: "), "{}", msg);
    assert!(msg.contains("No valid numbers found"), "{}", msg);
}

#[actix_web::test]
async fn test_n_fuera_de_rango_da_400() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_column(
        dir.path(),
        "tres.xlsx",
        &[Cell::Num(1.0), Cell::Num(2.0), Cell::Num(3.0)],
    );

    for n in ["0", "-2", "4"] {
        let uri = format!("/api/find-nth-min?filePath={}&n={}", path.display(), n);
        let (status, content_type, body) = get(NthMinimumService::excel(), &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "n = {}", n);
        let msg = error_message(content_type.as_deref(), &body);
        assert_eq!(msg, "Error: N must be between 1 and 3");
        assert!(!msg.starts_with('"') && !msg.ends_with('"'), "{}", msg);
    }
}

#[actix_web::test]
async fn test_archivo_inexistente_da_400() {
    let (status, content_type, body) = get(
        NthMinimumService::excel(),
        "/api/find-nth-min?filePath=/no/existe/archivo.xlsx&n=1",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let msg = error_message(content_type.as_deref(), &body);
    assert!(msg.starts_with("Error: File not found"), "{}", msg);
}

#[actix_web::test]
async fn test_parametros_invalidos_dan_400() {
    for uri in [
        "/api/find-nth-min?n=1",
        "/api/find-nth-min?filePath=datos.xlsx",
        "/api/find-nth-min?filePath=datos.xlsx&n=abc",
    ] {
        let (status, content_type, body) = get(NthMinimumService::excel(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri = {}", uri);
        let msg = error_message(content_type.as_deref(), &body);
        assert!(msg.starts_with("Error: "), "uri = {}: {}", uri, msg);
    }
}
