use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, ResponseError};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::Error;
use crate::service::NthMinimumService;

/// Parámetros de `GET /api/find-nth-min`
///
/// - `filePath`: ruta local del archivo Excel
/// - `n`: posición (1-based) del mínimo buscado
#[derive(Debug, Deserialize)]
pub struct FindNthMinQuery {
    #[serde(rename = "filePath")]
    pub file_path: String,
    pub n: i64,
}

// Todas las fallas se responden igual: 400 con el mensaje en texto plano.
impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        bad_request_text(format!("Error: {}", self))
    }
}

/// Parámetros faltantes o `n` no entero: misma forma de respuesta que el resto de errores.
fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = format!("Error: {}", err);
    InternalError::from_response(err, bad_request_text(body)).into()
}

// cuerpo `text/plain` sin comillas; el éxito sí va como número JSON
fn bad_request_text(body: String) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type(ContentType::plaintext())
        .body(body)
}

/// GET /api/find-nth-min?filePath=...&n=...
/// Devuelve el N-ésimo número mínimo de la columna A del archivo.
async fn find_nth_min_handler(
    service: web::Data<NthMinimumService>,
    query: web::Query<FindNthMinQuery>,
) -> Result<HttpResponse, Error> {
    let FindNthMinQuery { file_path, n } = query.into_inner();
    let service = service.get_ref().clone();
    let path_log = file_path.clone();

    // la lectura del archivo es bloqueante
    let joined = tokio::task::spawn_blocking(move || service.find_nth_minimum(&file_path, n)).await;
    let result = match joined {
        Ok(r) => r,
        Err(e) => Err(Error::Internal(format!("task join error: {}", e))),
    };

    match result {
        Ok(value) => {
            info!(path = %path_log, n, value, "find-nth-min ok");
            Ok(HttpResponse::Ok().json(value))
        }
        Err(e) => {
            warn!(path = %path_log, n, error = %e, "find-nth-min failed");
            Err(e)
        }
    }
}

/// Registra las rutas del API. El `NthMinimumService` debe agregarse como
/// `web::Data` por quien construye el `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(web::scope("/api").route("/find-nth-min", web::get().to(find_nth_min_handler)));
}

pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let service = web::Data::new(NthMinimumService::excel());
    info!(bind = %config.bind_addr, workers = config.workers, "starting HTTP server");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(configure)
    })
    .workers(config.workers)
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
