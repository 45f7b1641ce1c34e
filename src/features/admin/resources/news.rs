use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::admin::forms::{self, FormSubmission};
use crate::features::admin::scaffold::{AdminResource, FieldSpec, FieldWidget, ListRow};
use crate::features::news::dtos::{CreateNewsDto, UpdateNewsDto};
use crate::features::news::NewsService;
use crate::modules::storage::DiskStore;

pub struct NewsAdmin {
    service: Arc<NewsService>,
    store: Arc<DiskStore>,
}

impl NewsAdmin {
    pub fn new(service: Arc<NewsService>, store: Arc<DiskStore>) -> Self {
        Self { service, store }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "title", label: "Title", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "slug", label: "Slug", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "body", label: "Body", widget: FieldWidget::TextArea, required: false },
    FieldSpec { name: "image", label: "Image", widget: FieldWidget::Image, required: false },
    FieldSpec { name: "publication_date", label: "Publication date", widget: FieldWidget::Date, required: false },
    FieldSpec { name: "company_id", label: "Company ID", widget: FieldWidget::Number, required: true },
];

#[async_trait]
impl AdminResource for NewsAdmin {
    fn slug(&self) -> &'static str {
        "news"
    }

    fn title(&self) -> &'static str {
        "News"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn list_columns(&self) -> &'static [&'static str] {
        &["ID", "Title", "Slug", "Published", "Company"]
    }

    async fn list_rows(&self) -> Result<Vec<ListRow>> {
        Ok(self
            .service
            .list()
            .await?
            .into_iter()
            .map(|n| ListRow {
                id: n.id,
                cells: vec![
                    n.id.to_string(),
                    n.title,
                    n.slug,
                    n.publication_date.to_string(),
                    n.company_id.to_string(),
                ],
            })
            .collect())
    }

    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>> {
        let n = self.service.get(id).await?;
        Ok(BTreeMap::from([
            ("title", n.title),
            ("slug", n.slug),
            ("body", n.body.unwrap_or_default()),
            ("image", n.image.unwrap_or_default()),
            ("publication_date", n.publication_date.to_string()),
            ("company_id", n.company_id.to_string()),
        ]))
    }

    async fn create(&self, form: &FormSubmission) -> Result<i64> {
        let image = match form.first_file("image") {
            Some(file) => Some(forms::store_image(&self.store, "news", file).await?),
            None => None,
        };

        let dto = CreateNewsDto {
            title: form.required_text("title")?,
            slug: form.required_text("slug")?,
            body: form.text("body"),
            image,
            publication_date: form.optional_date("publication_date")?,
            company_id: form.required_i64("company_id")?,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.create(dto).await
    }

    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()> {
        let image = match form.first_file("image") {
            Some(file) => Some(forms::store_image(&self.store, "news", file).await?),
            None => None,
        };

        let dto = UpdateNewsDto {
            title: form.text("title"),
            slug: form.text("slug"),
            body: form.text("body"),
            image,
            publication_date: form.optional_date("publication_date")?,
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
