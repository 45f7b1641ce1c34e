use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::admin::forms::{self, FormSubmission};
use crate::features::admin::scaffold::{AdminResource, FieldSpec, FieldWidget, ListRow};
use crate::features::brands::dtos::{CreateBrandDto, UpdateBrandDto};
use crate::features::brands::BrandService;
use crate::modules::storage::DiskStore;

pub struct BrandAdmin {
    service: Arc<BrandService>,
    store: Arc<DiskStore>,
}

impl BrandAdmin {
    pub fn new(service: Arc<BrandService>, store: Arc<DiskStore>) -> Self {
        Self { service, store }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", label: "Name", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "slug", label: "Slug", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "description", label: "Description", widget: FieldWidget::TextArea, required: false },
    FieldSpec { name: "logo", label: "Logo", widget: FieldWidget::Image, required: false },
    FieldSpec { name: "company_id", label: "Company ID", widget: FieldWidget::Number, required: true },
];

#[async_trait]
impl AdminResource for BrandAdmin {
    fn slug(&self) -> &'static str {
        "brands"
    }

    fn title(&self) -> &'static str {
        "Brands"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn list_columns(&self) -> &'static [&'static str] {
        &["ID", "Name", "Slug", "Company"]
    }

    async fn list_rows(&self) -> Result<Vec<ListRow>> {
        Ok(self
            .service
            .list()
            .await?
            .into_iter()
            .map(|b| ListRow {
                id: b.id,
                cells: vec![
                    b.id.to_string(),
                    b.name,
                    b.slug,
                    b.company_id.to_string(),
                ],
            })
            .collect())
    }

    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>> {
        let b = self.service.get(id).await?;
        Ok(BTreeMap::from([
            ("name", b.name),
            ("slug", b.slug),
            ("description", b.description.unwrap_or_default()),
            ("logo", b.logo.unwrap_or_default()),
            ("company_id", b.company_id.to_string()),
        ]))
    }

    async fn create(&self, form: &FormSubmission) -> Result<i64> {
        let logo = match form.first_file("logo") {
            Some(file) => Some(forms::store_image(&self.store, "brands", file).await?),
            None => None,
        };

        let dto = CreateBrandDto {
            name: form.required_text("name")?,
            slug: form.required_text("slug")?,
            description: form.text("description"),
            logo,
            company_id: form.required_i64("company_id")?,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.create(dto).await
    }

    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()> {
        // an empty file input keeps the stored logo
        let logo = match form.first_file("logo") {
            Some(file) => Some(forms::store_image(&self.store, "brands", file).await?),
            None => None,
        };

        let dto = UpdateBrandDto {
            name: form.text("name"),
            slug: form.text("slug"),
            description: form.text("description"),
            logo,
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
