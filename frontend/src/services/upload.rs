//! HTTP service for uploading the resume to the intake endpoint.
//!
//! The wizard only sees the [`UploadGateway`] trait; [`HttpUploadGateway`]
//! is the browser implementation built on `gloo-net`.

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::{AcquiredFile, AppError, AppResult, UploadConfig, UploadResult, RESUME_FIELD};

/// Submits an acquired file somewhere.
///
/// Implementations must never fail the future: any problem is reported as
/// `UploadResult { ok: false }`.
pub trait UploadGateway {
    fn submit(&self, file: AcquiredFile) -> LocalBoxFuture<'static, UploadResult>;
}

/// Posts the resume as multipart form data to `<base>/resume?token=...`.
#[derive(Clone, Debug)]
pub struct HttpUploadGateway {
    config: UploadConfig,
}

impl HttpUploadGateway {
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }
}

impl UploadGateway for HttpUploadGateway {
    fn submit(&self, file: AcquiredFile) -> LocalBoxFuture<'static, UploadResult> {
        let config = self.config.clone();
        async move {
            match upload_resume(&file, &config).await {
                Ok(status) if (200..300).contains(&status) => {
                    log::info!("✅ Resume uploaded ({})", status);
                    UploadResult::success()
                }
                Ok(status) => {
                    log::warn!("⚠️  Upload rejected by server ({})", status);
                    UploadResult::failure()
                }
                Err(e) => {
                    log::error!("❌ Upload failed: {}", e);
                    UploadResult::failure()
                }
            }
        }
        .boxed_local()
    }
}

/// Upload one file and return the HTTP status code.
pub async fn upload_resume(file: &AcquiredFile, config: &UploadConfig) -> AppResult<u16> {
    let form_data = resume_form(file)?;

    log::info!("📤 Uploading {} ({} bytes)...", file.name, file.size());

    let response = Request::post(&config.endpoint())
        .query(config.query())
        .body(form_data)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    Ok(response.status())
}

/// The one multipart part the intake endpoint reads.
#[derive(Debug, PartialEq, Eq)]
struct ResumePart<'a> {
    field: &'static str,
    file_name: &'a str,
    mime_type: &'a str,
    bytes: &'a [u8],
}

impl<'a> ResumePart<'a> {
    fn of(file: &'a AcquiredFile) -> Self {
        Self {
            field: RESUME_FIELD,
            file_name: &file.name,
            mime_type: &file.mime_type,
            bytes: &file.bytes,
        }
    }
}

/// Multipart body with a single `resume` field.
fn resume_form(file: &AcquiredFile) -> AppResult<FormData> {
    let part = ResumePart::of(file);
    let form_data = FormData::new()
        .map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(part.bytes));
    let options = BlobPropertyBag::new();
    options.set_type(part.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| AppError::Upload(format!("Failed to create Blob: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(part.field, &blob, part.file_name)
        .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

    Ok(form_data)
}
