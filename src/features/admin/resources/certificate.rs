use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::admin::forms::{self, FormSubmission};
use crate::features::admin::scaffold::{AdminResource, FieldSpec, FieldWidget, ListRow};
use crate::features::certificates::dtos::{CreateCertificateDto, UpdateCertificateDto};
use crate::features::certificates::CertificateService;
use crate::modules::storage::DiskStore;

pub struct CertificateAdmin {
    service: Arc<CertificateService>,
    store: Arc<DiskStore>,
}

impl CertificateAdmin {
    pub fn new(service: Arc<CertificateService>, store: Arc<DiskStore>) -> Self {
        Self { service, store }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", label: "Name", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "description", label: "Description", widget: FieldWidget::TextArea, required: false },
    FieldSpec { name: "image", label: "Image", widget: FieldWidget::Image, required: false },
    FieldSpec { name: "company_id", label: "Company ID", widget: FieldWidget::Number, required: true },
];

#[async_trait]
impl AdminResource for CertificateAdmin {
    fn slug(&self) -> &'static str {
        "certificates"
    }

    fn title(&self) -> &'static str {
        "Certificates"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn list_columns(&self) -> &'static [&'static str] {
        &["ID", "Name", "Company"]
    }

    async fn list_rows(&self) -> Result<Vec<ListRow>> {
        Ok(self
            .service
            .list()
            .await?
            .into_iter()
            .map(|c| ListRow {
                id: c.id,
                cells: vec![c.id.to_string(), c.name, c.company_id.to_string()],
            })
            .collect())
    }

    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>> {
        let c = self.service.get(id).await?;
        Ok(BTreeMap::from([
            ("name", c.name),
            ("description", c.description.unwrap_or_default()),
            ("image", c.image.unwrap_or_default()),
            ("company_id", c.company_id.to_string()),
        ]))
    }

    async fn create(&self, form: &FormSubmission) -> Result<i64> {
        let image = match form.first_file("image") {
            Some(file) => Some(forms::store_image(&self.store, "certificates", file).await?),
            None => None,
        };

        let dto = CreateCertificateDto {
            name: form.required_text("name")?,
            description: form.text("description"),
            image,
            company_id: form.required_i64("company_id")?,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.create(dto).await
    }

    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()> {
        let image = match form.first_file("image") {
            Some(file) => Some(forms::store_image(&self.store, "certificates", file).await?),
            None => None,
        };

        let dto = UpdateCertificateDto {
            name: form.text("name"),
            description: form.text("description"),
            image,
            company_id: form.optional_i64("company_id")?,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.update(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.service.delete(id).await
    }
}
