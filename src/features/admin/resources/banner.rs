use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::admin::forms::{self, FormSubmission};
use crate::features::admin::scaffold::{AdminResource, FieldSpec, FieldWidget, ListRow};
use crate::features::banners::dtos::{CreateBannerDto, UpdateBannerDto};
use crate::features::banners::BannerService;
use crate::modules::storage::DiskStore;

pub struct BannerAdmin {
    service: Arc<BannerService>,
    store: Arc<DiskStore>,
}

impl BannerAdmin {
    pub fn new(service: Arc<BannerService>, store: Arc<DiskStore>) -> Self {
        Self { service, store }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "title", label: "Title", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "description", label: "Description", widget: FieldWidget::TextArea, required: false },
    FieldSpec { name: "link", label: "Link", widget: FieldWidget::Text, required: false },
    FieldSpec { name: "image", label: "Image", widget: FieldWidget::Image, required: false },
];

#[async_trait]
impl AdminResource for BannerAdmin {
    fn slug(&self) -> &'static str {
        "banners"
    }

    fn title(&self) -> &'static str {
        "Banners"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn list_columns(&self) -> &'static [&'static str] {
        &["ID", "Title", "Link"]
    }

    async fn list_rows(&self) -> Result<Vec<ListRow>> {
        Ok(self
            .service
            .list()
            .await?
            .into_iter()
            .map(|b| ListRow {
                id: b.id,
                cells: vec![b.id.to_string(), b.title, b.link.unwrap_or_default()],
            })
            .collect())
    }

    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>> {
        let b = self.service.get(id).await?;
        Ok(BTreeMap::from([
            ("title", b.title),
            ("description", b.description.unwrap_or_default()),
            ("link", b.link.unwrap_or_default()),
            ("image", b.image.unwrap_or_default()),
        ]))
    }

    async fn create(&self, form: &FormSubmission) -> Result<i64> {
        let image = match form.first_file("image") {
            Some(file) => Some(forms::store_image(&self.store, "banners", file).await?),
            None => None,
        };

        let dto = CreateBannerDto {
            title: form.required_text("title")?,
            description: form.text("description"),
            link: form.text("link"),
            image,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.create(dto).await
    }

    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()> {
        let image = match form.first_file("image") {
            Some(file) => Some(forms::store_image(&self.store, "banners", file).await?),
            None => None,
        };

        let dto = UpdateBannerDto {
            title: form.text("title"),
            description: form.text("description"),
            link: form.text("link"),
            image,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.update(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.service.delete(id).await
    }
}
