//! Multipart form handling for admin screens.

use std::collections::BTreeMap;

use axum::extract::Multipart;
use chrono::NaiveDate;

use crate::core::error::{AppError, Result};
use crate::modules::storage::DiskStore;

/// Allowed MIME types for image uploads
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

pub fn is_image_type_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

/// One file picked from a multipart field.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Parsed multipart submission: text values plus files, keyed by field name.
/// File inputs left empty by the browser are dropped.
#[derive(Debug, Default)]
pub struct FormSubmission {
    values: BTreeMap<String, String>,
    files: BTreeMap<String, Vec<UploadedFile>>,
}

pub async fn parse_multipart(mut multipart: Multipart) -> Result<FormSubmission> {
    let mut form = FormSubmission::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name.is_empty() {
            continue;
        }

        if let Some(filename) = field.file_name().map(|s| s.to_string()) {
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let bytes = field.bytes().await.map_err(|e| {
                tracing::debug!("Failed to read file bytes: {}", e);
                AppError::BadRequest(format!("Failed to read file data: {}", e))
            })?;

            // an empty file input still submits a zero-byte nameless part
            if filename.is_empty() || bytes.is_empty() {
                continue;
            }

            form.files.entry(field_name).or_default().push(UploadedFile {
                filename,
                content_type,
                bytes: bytes.to_vec(),
            });
        } else {
            let text = field.text().await.map_err(|e| {
                AppError::BadRequest(format!("Failed to read field '{}': {}", field_name, e))
            })?;
            form.values.insert(field_name, text);
        }
    }

    Ok(form)
}

impl FormSubmission {
    /// Trimmed text value; empty inputs count as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.values
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn required_text(&self, name: &str) -> Result<String> {
        self.text(name)
            .ok_or_else(|| AppError::Validation(format!("{} is required", name)))
    }

    pub fn optional_i64(&self, name: &str) -> Result<Option<i64>> {
        self.text(name)
            .map(|v| {
                v.parse::<i64>()
                    .map_err(|_| AppError::Validation(format!("{} must be a number", name)))
            })
            .transpose()
    }

    pub fn required_i64(&self, name: &str) -> Result<i64> {
        self.optional_i64(name)?
            .ok_or_else(|| AppError::Validation(format!("{} is required", name)))
    }

    pub fn optional_date(&self, name: &str) -> Result<Option<NaiveDate>> {
        self.text(name)
            .map(|v| {
                NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                    .map_err(|_| AppError::Validation(format!("{} must be a date (YYYY-MM-DD)", name)))
            })
            .transpose()
    }

    pub fn first_file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name).and_then(|v| v.first())
    }

    pub fn files(&self, name: &str) -> &[UploadedFile] {
        self.files.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Raw submitted text values, used to refill a form after a failed save.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: BTreeMap::new(),
        }
    }

    #[cfg(test)]
    pub fn push_file(&mut self, name: &str, file: UploadedFile) {
        self.files.entry(name.to_string()).or_default().push(file);
    }
}

/// Persist one uploaded image under the resource's category directory and
/// return the stored relative path.
pub async fn store_image(
    store: &DiskStore,
    category: &str,
    file: &UploadedFile,
) -> Result<String> {
    if !is_image_type_allowed(&file.content_type) {
        return Err(AppError::Validation(format!(
            "unsupported image type: {}",
            file.content_type
        )));
    }

    store.save(category, &file.filename, &file.bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_helpers_trim_and_reject_empty() {
        let form = FormSubmission::from_pairs(&[("name", "  Drill  "), ("slug", "   ")]);

        assert_eq!(form.text("name").as_deref(), Some("Drill"));
        assert_eq!(form.text("slug"), None);
        assert!(form.required_text("slug").is_err());
        assert!(form.required_text("missing").is_err());
    }

    #[test]
    fn numeric_and_date_parsing() {
        let form = FormSubmission::from_pairs(&[
            ("category_id", "3"),
            ("brand_id", "x"),
            ("publication_date", "2026-05-01"),
        ]);

        assert_eq!(form.optional_i64("category_id").unwrap(), Some(3));
        assert!(form.optional_i64("brand_id").is_err());
        assert_eq!(form.optional_i64("absent").unwrap(), None);
        assert_eq!(
            form.optional_date("publication_date").unwrap(),
            Some(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
        );
    }

    #[test]
    fn image_type_allowlist() {
        assert!(is_image_type_allowed("image/png"));
        assert!(!is_image_type_allowed("application/pdf"));
    }
}
