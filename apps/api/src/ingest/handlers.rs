use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::ingest::batch::{run_batch, DocumentInput, DocumentOutcome, SkippedDocument};
use crate::models::{RecordLayout, SourceDocument};
use crate::state::AppState;

/// Multipart field names that carry uploaded documents.
const FILE_FIELDS: &[&str] = &["file", "files"];

#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    /// Overrides the configured column set for this request.
    pub layout: Option<RecordLayout>,
}

#[derive(Debug, Deserialize)]
pub struct TextExtractionRequest {
    pub documents: Vec<SourceDocument>,
}

/// Spreadsheet-ready result: `rows[n]` lines up with `columns`.
#[derive(Debug, Serialize)]
pub struct ExtractionResponse {
    pub layout: RecordLayout,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub skipped: Vec<SkippedDocument>,
}

impl ExtractionResponse {
    fn from_outcomes(layout: RecordLayout, outcomes: Vec<DocumentOutcome>) -> Self {
        let mut rows = Vec::new();
        let mut skipped = Vec::new();
        for outcome in outcomes {
            match outcome {
                DocumentOutcome::Extracted(record) => rows.push(record.to_row(layout)),
                DocumentOutcome::Skipped(s) => skipped.push(s),
            }
        }
        Self {
            layout,
            columns: layout.headers(),
            rows,
            skipped,
        }
    }
}

/// POST /api/v1/extract
/// Multipart upload of one or more PDF/DOCX résumés under the `file` field.
pub async fn handle_extract_upload(
    State(state): State<AppState>,
    Query(query): Query<LayoutQuery>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResponse>, AppError> {
    let mut inputs = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let is_file_field = field.name().is_some_and(|n| FILE_FIELDS.contains(&n));
        let Some(file_name) = field.file_name().map(sanitize_file_name) else {
            debug!(field = ?field.name(), "ignoring non-file multipart field");
            continue;
        };
        if !is_file_field || file_name.is_empty() {
            debug!(field = ?field.name(), "ignoring multipart field");
            continue;
        }
        let bytes = field.bytes().await?;
        inputs.push(DocumentInput::Upload { file_name, bytes });
    }

    if inputs.is_empty() {
        return Err(AppError::Validation("No files selected".to_string()));
    }
    info!(files = inputs.len(), "extracting uploaded documents");

    let layout = query.layout.unwrap_or(state.config.record_layout);
    let outcomes = run_batch(inputs, state.batch_context()).await?;
    Ok(Json(ExtractionResponse::from_outcomes(layout, outcomes)))
}

/// POST /api/v1/extract/text
/// Same as the upload endpoint for callers that already hold the document text.
pub async fn handle_extract_text(
    State(state): State<AppState>,
    Query(query): Query<LayoutQuery>,
    Json(req): Json<TextExtractionRequest>,
) -> Result<Json<ExtractionResponse>, AppError> {
    if req.documents.is_empty() {
        return Err(AppError::Validation("No documents supplied".to_string()));
    }
    info!(documents = req.documents.len(), "extracting text documents");

    let inputs = req
        .documents
        .into_iter()
        .map(|doc| {
            DocumentInput::Text(SourceDocument {
                file_name: sanitize_file_name(&doc.file_name),
                raw_text: doc.raw_text,
            })
        })
        .collect();

    let layout = query.layout.unwrap_or(state.config.record_layout);
    let outcomes = run_batch(inputs, state.batch_context()).await?;
    Ok(Json(ExtractionResponse::from_outcomes(layout, outcomes)))
}

/// Keeps only the final path component of a client-supplied file name.
fn sanitize_file_name(name: &str) -> String {
    name.rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::ingest::provider::DocumentTextProvider;
    use crate::routes::build_router;

    fn test_state(record_layout: RecordLayout) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                record_layout,
                max_upload_bytes: 1024 * 1024,
                max_text_chars: 10_000,
            },
            provider: Arc::new(DocumentTextProvider),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_sanitize_file_name_keeps_basename() {
        assert_eq!(sanitize_file_name("C:\\Users\\me\\John_CV.pdf"), "John_CV.pdf");
        assert_eq!(sanitize_file_name("../../etc/jane.docx"), "jane.docx");
        assert_eq!(sanitize_file_name(" plain.pdf "), "plain.pdf");
    }

    #[tokio::test]
    async fn test_text_endpoint_full_layout() {
        let app = build_router(test_state(RecordLayout::Full));
        let payload = json!({
            "documents": [
                {
                    "raw_text": "Jane Doe\njane@example.com\nNationality: indian\nData Analyst",
                    "file_name": "jane_doe_cv.docx"
                },
                { "raw_text": "", "file_name": "scanned.pdf" }
            ]
        });
        let request = Request::post("/api/v1/extract/text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["layout"], "full");
        assert_eq!(
            body["columns"],
            json!(["Name", "Email", "Phone Number", "Nationality", "Designation"])
        );
        assert_eq!(
            body["rows"][0],
            json!(["Jane Doe", "jane@example.com", "Not Found", "Indian", "Data Analyst"])
        );
        assert_eq!(
            body["rows"][1],
            json!(["Not Found", "Not Found", "Not Found", "Not Found", "Not Found"])
        );
        assert_eq!(body["skipped"], json!([]));
    }

    #[tokio::test]
    async fn test_layout_query_overrides_config() {
        let app = build_router(test_state(RecordLayout::Full));
        let payload = json!({
            "documents": [{ "raw_text": "Jane Doe", "file_name": "jane.pdf" }]
        });
        let request = Request::post("/api/v1/extract/text?layout=basic")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let body = body_json(app.oneshot(request).await.unwrap()).await;
        assert_eq!(body["layout"], "basic");
        assert_eq!(body["rows"][0].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_text_endpoint_rejects_empty_batch() {
        let app = build_router(test_state(RecordLayout::Basic));
        let request = Request::post("/api/v1/extract/text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"documents": []}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_skips_unsupported_files() {
        let app = build_router(test_state(RecordLayout::Basic));
        let boundary = "X-RESUME-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"notes.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             Jane Doe\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::post("/api/v1/extract")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["rows"], json!([]));
        assert_eq!(body["skipped"][0]["file_name"], "notes.txt");
    }

    #[tokio::test]
    async fn test_upload_without_files_is_rejected() {
        let app = build_router(test_state(RecordLayout::Basic));
        let boundary = "X-RESUME-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"comment\"\r\n\r\n\
             hello\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::post("/api/v1/extract")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
