//! Student roster endpoints

use crate::core::ingestion::RosterUpload;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::RosterError;
use actix_multipart::{Field, Multipart};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use bytes::BytesMut;
use futures::StreamExt;
use tracing::{debug, info, warn};

/// Multipart part carrying the roster file
pub const FILE_FIELD: &str = "file";

/// Configure student routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/divisions/{division_id}/students")
            .route("/upload", web::post().to(upload_students)),
    );
}

/// Bulk-upload a division's roster
///
/// Row failures are reported in the 200 body; only aborting errors map to an
/// error status. The whole multipart body, every part included, is held to
/// `server.max_body_size`.
pub async fn upload_students(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    mut payload: Multipart,
) -> Result<HttpResponse, RosterError> {
    let division_id = path.into_inner();
    let file_limit = state.ingestor.config().max_file_size;
    let mut body = BodyBudget::new(state.config.server().max_body_size);
    info!("Roster upload for division {}", division_id);

    if let Some(length) = declared_length(&req) {
        body.reject_declared(length)?;
    }

    let mut upload = None;
    while let Some(field) = payload.next().await {
        let field = field
            .map_err(|e| RosterError::bad_request(format!("Malformed multipart body: {}", e)))?;
        if upload.is_none() && field.name() == Some(FILE_FIELD) {
            upload = Some(read_upload(field, file_limit, &mut body).await?);
        } else {
            skip_part(field, &mut body).await?;
        }
    }

    let upload = upload.ok_or_else(|| {
        RosterError::bad_request(format!("Missing multipart field '{}'", FILE_FIELD))
    })?;
    debug!(
        "Received {} bytes (filename {:?}, content type {:?}, body {} bytes)",
        upload.len(),
        upload.filename,
        upload.content_type,
        body.received
    );

    let report = state.ingestor.ingest(&division_id, &upload).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(report.result, report.message)))
}

/// Running byte count over every multipart part
struct BodyBudget {
    limit: usize,
    received: usize,
}

impl BodyBudget {
    fn new(limit: usize) -> Self {
        Self { limit, received: 0 }
    }

    fn reject_declared(&self, length: usize) -> Result<(), RosterError> {
        if length > self.limit {
            warn!(
                "Rejecting upload: declared body of {} bytes exceeds {}",
                length, self.limit
            );
            return Err(RosterError::PayloadTooLarge { limit: self.limit });
        }
        Ok(())
    }

    fn take(&mut self, chunk: usize) -> Result<(), RosterError> {
        self.received += chunk;
        if self.received > self.limit {
            warn!("Rejecting upload: body exceeds {} bytes", self.limit);
            return Err(RosterError::PayloadTooLarge { limit: self.limit });
        }
        Ok(())
    }
}

fn declared_length(req: &HttpRequest) -> Option<usize> {
    req.headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

/// Buffer the roster part, stopping as soon as it exceeds `limit`
async fn read_upload(
    mut field: Field,
    limit: usize,
    body: &mut BodyBudget,
) -> Result<RosterUpload, RosterError> {
    let filename = field
        .content_disposition()
        .and_then(|disposition| disposition.get_filename())
        .map(str::to_string);
    let content_type = field.content_type().map(|mime| mime.essence_str().to_string());

    let mut bytes = BytesMut::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk
            .map_err(|e| RosterError::bad_request(format!("Failed to read upload: {}", e)))?;
        body.take(chunk.len())?;
        let size = bytes.len() + chunk.len();
        if size > limit {
            return Err(RosterError::FileTooLarge { size, limit });
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(RosterUpload {
        filename,
        content_type,
        bytes: bytes.freeze(),
    })
}

/// Drain a part the upload does not use, counting it against the body limit
async fn skip_part(mut field: Field, body: &mut BodyBudget) -> Result<(), RosterError> {
    while let Some(chunk) = field.next().await {
        let chunk = chunk
            .map_err(|e| RosterError::bad_request(format!("Malformed multipart body: {}", e)))?;
        body.take(chunk.len())?;
    }
    Ok(())
}
