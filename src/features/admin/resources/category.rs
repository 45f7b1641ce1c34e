use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::admin::forms::FormSubmission;
use crate::features::admin::scaffold::{AdminResource, FieldSpec, FieldWidget, ListRow};
use crate::features::categories::dtos::{CreateProductCategoryDto, UpdateProductCategoryDto};
use crate::features::categories::CategoryService;

pub struct CategoryAdmin {
    service: Arc<CategoryService>,
}

impl CategoryAdmin {
    pub fn new(service: Arc<CategoryService>) -> Self {
        Self { service }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", label: "Name", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "slug", label: "Slug", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "parent_category_id", label: "Parent category ID", widget: FieldWidget::Number, required: false },
];

#[async_trait]
impl AdminResource for CategoryAdmin {
    fn slug(&self) -> &'static str {
        "categories"
    }

    fn title(&self) -> &'static str {
        "Product Categories"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn list_columns(&self) -> &'static [&'static str] {
        &["ID", "Name", "Slug", "Parent"]
    }

    async fn list_rows(&self) -> Result<Vec<ListRow>> {
        Ok(self
            .service
            .list()
            .await?
            .into_iter()
            .map(|c| ListRow {
                id: c.id,
                cells: vec![
                    c.id.to_string(),
                    c.name,
                    c.slug,
                    c.parent_category_id
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                ],
            })
            .collect())
    }

    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>> {
        let c = self.service.get(id).await?;
        Ok(BTreeMap::from([
            ("name", c.name),
            ("slug", c.slug),
            (
                "parent_category_id",
                c.parent_category_id
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            ),
        ]))
    }

    async fn create(&self, form: &FormSubmission) -> Result<i64> {
        let dto = CreateProductCategoryDto {
            name: form.required_text("name")?,
            slug: form.required_text("slug")?,
            parent_category_id: form.optional_i64("parent_category_id")?,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.create(dto).await
    }

    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()> {
        let dto = UpdateProductCategoryDto {
            name: form.text("name"),
            slug: form.text("slug"),
            parent_category_id: form.optional_i64("parent_category_id")?,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.update(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.service.delete(id).await
    }
}
