use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use std::io;
use tracing::{info, error};
use weather_rules::config::{LoggingSettings, Settings};
use weather_rules::core::{ThresholdResponder, CATALOG};
use weather_rules::models::ErrorResponse;
use weather_rules::routes::{self, AppState};
use weather_rules::telemetry;

/// JSON error for rejected query strings
#[derive(Debug)]
struct QueryError(ErrorResponse);

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for QueryError {}

impl error::ResponseError for QueryError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle query payload errors
fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    QueryError(ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    })
    .into()
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            telemetry::init(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    telemetry::init(&settings.logging);

    info!("Starting Weather Rules service...");

    let responder = ThresholdResponder::new(CATALOG).map_err(|e| {
        error!("Invalid rule catalog: {}", e);
        io::Error::new(io::ErrorKind::InvalidData, e.to_string())
    })?;

    info!("Loaded {} decision rules", responder.rules().len());

    let app_state = AppState {
        responder,
        basics: settings.basics.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{} with {} workers", host, port, workers);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(|cfg| routes::configure_routes(cfg, &responder))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
