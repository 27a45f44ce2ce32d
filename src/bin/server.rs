// Region Splitter - Web Server
// Upload the member export and the region workbook, download one zip archive.

use axum::extract::{DefaultBodyLimit, Multipart};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use region_splitter::config::server::{MEMBERS_KEY, REGIONS_KEY};
use region_splitter::core::Storage;
use region_splitter::utils::error::ErrorCategory;
use region_splitter::utils::logger;
use region_splitter::{EtlEngine, MemoryStorage, RegionSplitPipeline, ServerConfig, SplitError};
use serde::Serialize;
use tower_http::cors::CorsLayer;

const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Region-Based Member Splitter</title>
</head>
<body>
  <h1>📍 Region-Based Member Splitter</h1>
  <p>Upload your <strong>Member Export CSV</strong> and the <strong>Region Zipcodes Excel file</strong>.
  The app cleans and matches ZIP codes, adds Region and County, splits the data by Region,
  collects unmatched/out-of-state members, and returns everything in a single ZIP.</p>
  <form action="/split" method="post" enctype="multipart/form-data">
    <p><label>📄 Member Export CSV: <input type="file" name="members" accept=".csv" required></label></p>
    <p><label>📄 Region Zipcodes Excel: <input type="file" name="regions" accept=".xls,.xlsx" required></label></p>
    <p><button type="submit">📥 Split and download ZIP</button></p>
  </form>
</body>
</html>
"#;

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET / - Upload form
async fn upload_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /split - Run the pipeline over the two uploads and answer with the
/// archive. Everything is request-scoped; nothing survives the response.
async fn split_members(multipart: Multipart) -> Response {
    match handle_split(multipart).await {
        Ok((archive_name, bytes)) => {
            let disposition = format!("attachment; filename=\"{}\"", archive_name);
            (
                [
                    (header::CONTENT_TYPE, "application/zip".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err((status, message)) => {
            tracing::warn!("Split request failed: {}", message);
            (status, message).into_response()
        }
    }
}

async fn handle_split(mut multipart: Multipart) -> Result<(String, Vec<u8>), (StatusCode, String)> {
    let mut members: Option<Vec<u8>> = None;
    let mut regions: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Malformed upload: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, format!("Upload truncated: {}", e)))?;

        match name.as_deref() {
            Some("members") => members = Some(data.to_vec()),
            Some("regions") => regions = Some(data.to_vec()),
            _ => {}
        }
    }

    let members = members.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            "Missing 'members' upload (member export CSV)".to_string(),
        )
    })?;
    let regions = regions.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            "Missing 'regions' upload (region zipcodes workbook)".to_string(),
        )
    })?;

    let storage = MemoryStorage::new();
    storage.put_file(MEMBERS_KEY, members).await;
    storage.put_file(REGIONS_KEY, regions).await;

    let config = ServerConfig::default();
    let archive_name = config.archive_name.clone();
    let pipeline = RegionSplitPipeline::new(storage.clone(), config);
    let engine = EtlEngine::new(pipeline);

    let archive_path = engine.run().await.map_err(error_response)?;
    let bytes = storage
        .read_file(&archive_path)
        .await
        .map_err(error_response)?;

    Ok((archive_name, bytes))
}

fn error_response(e: SplitError) -> (StatusCode, String) {
    let status = match e.category() {
        ErrorCategory::Input | ErrorCategory::Mapping => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCategory::Output | ErrorCategory::Config | ErrorCategory::System => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, e.user_friendly_message())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_server_logger();

    let app = Router::new()
        .route("/", get(upload_page))
        .route("/split", post(split_members))
        .route("/api/health", get(health_check))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("🌐 region-server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
