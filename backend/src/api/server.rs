//! HTTP Server for the matrixops API.
//!
//! Every matrix endpoint takes a multipart upload whose `file` field holds the
//! CSV matrix, and answers with the result as plain text.
//!
//! # API Endpoints
//!
//! | Method | Path        | Description                          |
//! |--------|-------------|--------------------------------------|
//! | GET    | `/health`   | Health check                         |
//! | POST   | `/echo`     | Matrix as uploaded                   |
//! | POST   | `/invert`   | Transposed matrix                    |
//! | POST   | `/flatten`  | All values on one line               |
//! | POST   | `/sum`      | Sum of all values                    |
//! | POST   | `/multiply` | Product of all values                |
//! | GET    | `/api/logs` | SSE stream for real-time logs        |

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart},
    http::{header, Method},
    response::{sse::Event, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use std::{convert::Infallible, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use super::logs::{log_error, log_info, log_request, LogEntry, LOG_BROADCASTER};
use super::types::HealthResponse;
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::matrix::{Operation, OperationOutput};
use crate::pipeline::run_bytes;

/// Multipart field carrying the CSV matrix
pub const FILE_FIELD: &str = "file";

/// Build the application router.
pub fn router(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/logs", get(sse_logs));

    for operation in Operation::ALL {
        app = app.route(
            operation.path(),
            post(move |multipart: Result<Multipart, MultipartRejection>| {
                matrix_operation(operation, multipart)
            }),
        );
    }

    app.layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let addr = config.socket_addr();
    let app = router(&config);

    log_info(format!("🚀 matrixops server running on http://{}", addr));
    for operation in Operation::ALL {
        println!("   POST {:<10} - {}", operation.path(), operation.description());
    }
    println!("   GET  /api/logs   - SSE log stream");
    println!("   GET  /health     - Health check");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        log_error(format!("cannot bind {}: {}", addr, e));
        e
    })?;
    axum::serve(listener, app).await.map_err(|e| {
        log_error(format!("server stopped: {}", e));
        e
    })?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Shared handler behind every matrix endpoint
async fn matrix_operation(
    operation: Operation,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<String, ServerError> {
    let request_id = Uuid::new_v4();
    log_request(request_id, LogEntry::info(format!("POST {}", operation.path())));

    match process_upload(request_id, operation, multipart).await {
        Ok(output) => {
            log_request(
                request_id,
                LogEntry::success(format!("{} done", operation)).with_indent(1),
            );
            Ok(output.to_string())
        }
        Err(err) => {
            log_request(request_id, failure_entry(&err));
            Err(err)
        }
    }
}

/// Client mistakes log as warnings, anything else as errors.
fn failure_entry(err: &ServerError) -> LogEntry {
    let entry = if err.status_code().is_client_error() {
        LogEntry::warning(err.to_string())
    } else {
        LogEntry::error(err.to_string())
    };
    entry.with_indent(1)
}

async fn process_upload(
    request_id: Uuid,
    operation: Operation,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<OperationOutput> {
    let mut multipart = multipart.map_err(|e| ServerError::Multipart(e.body_text()))?;
    let bytes = read_file_field(&mut multipart).await?;
    log_request(
        request_id,
        LogEntry::info(format!("received {} bytes", bytes.len())).with_indent(1),
    );

    Ok(run_bytes(&bytes, operation)?)
}

/// Bytes of the first `file` field.
async fn read_file_field(multipart: &mut Multipart) -> ServerResult<Vec<u8>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::Multipart(e.body_text()))?
    {
        if field.name() == Some(FILE_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ServerError::Multipart(e.body_text()))?;
            return Ok(bytes.to_vec());
        }
    }

    Err(ServerError::MissingFile)
}
