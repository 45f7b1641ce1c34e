use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::admin::forms::{self, FormSubmission};
use crate::features::admin::scaffold::{AdminResource, FieldSpec, FieldWidget, ListRow};
use crate::features::products::dtos::{CreateProductDto, UpdateProductDto};
use crate::features::products::ProductService;
use crate::modules::storage::DiskStore;

pub struct ProductAdmin {
    service: Arc<ProductService>,
    store: Arc<DiskStore>,
}

impl ProductAdmin {
    pub fn new(service: Arc<ProductService>, store: Arc<DiskStore>) -> Self {
        Self { service, store }
    }

    /// Save every picked gallery file, preserving submission order.
    async fn store_gallery(&self, form: &FormSubmission) -> Result<Option<Vec<String>>> {
        let files = form.files("images");
        if files.is_empty() {
            return Ok(None);
        }

        let mut paths = Vec::with_capacity(files.len());
        for file in files {
            paths.push(forms::store_image(&self.store, "products", file).await?);
        }
        Ok(Some(paths))
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", label: "Name", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "slug", label: "Slug", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "description", label: "Description", widget: FieldWidget::TextArea, required: false },
    FieldSpec { name: "image", label: "Main image", widget: FieldWidget::Image, required: false },
    FieldSpec { name: "images", label: "Gallery", widget: FieldWidget::Gallery, required: false },
    FieldSpec { name: "category_id", label: "Category ID", widget: FieldWidget::Number, required: true },
    FieldSpec { name: "brand_id", label: "Brand ID", widget: FieldWidget::Number, required: true },
];

#[async_trait]
impl AdminResource for ProductAdmin {
    fn slug(&self) -> &'static str {
        "products"
    }

    fn title(&self) -> &'static str {
        "Products"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn list_columns(&self) -> &'static [&'static str] {
        &["ID", "Name", "Slug", "Category", "Brand"]
    }

    async fn list_rows(&self) -> Result<Vec<ListRow>> {
        Ok(self
            .service
            .list()
            .await?
            .into_iter()
            .map(|p| ListRow {
                id: p.id,
                cells: vec![
                    p.id.to_string(),
                    p.name,
                    p.slug,
                    p.category_id.to_string(),
                    p.brand_id.to_string(),
                ],
            })
            .collect())
    }

    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>> {
        let p = self.service.get(id).await?;
        Ok(BTreeMap::from([
            ("name", p.name),
            ("slug", p.slug),
            ("description", p.description.unwrap_or_default()),
            ("image", p.image.unwrap_or_default()),
            ("images", p.images.0.join(", ")),
            ("category_id", p.category_id.to_string()),
            ("brand_id", p.brand_id.to_string()),
        ]))
    }

    async fn create(&self, form: &FormSubmission) -> Result<i64> {
        let image = match form.first_file("image") {
            Some(file) => Some(forms::store_image(&self.store, "products", file).await?),
            None => None,
        };
        let images = self.store_gallery(form).await?;

        let dto = CreateProductDto {
            name: form.required_text("name")?,
            slug: form.required_text("slug")?,
            description: form.text("description"),
            image,
            images,
            category_id: form.required_i64("category_id")?,
            brand_id: form.required_i64("brand_id")?,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.create(dto).await
    }

    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()> {
        // empty file inputs keep the stored image/gallery; new gallery files
        // replace the list wholesale
        let image = match form.first_file("image") {
            Some(file) => Some(forms::store_image(&self.store, "products", file).await?),
            None => None,
        };
        let images = self.store_gallery(form).await?;

        let dto = UpdateProductDto {
            name: form.text("name"),
            slug: form.text("slug"),
            description: form.text("description"),
            image,
            images,
            category_id: form.optional_i64("category_id")?,
            brand_id: form.optional_i64("brand_id")?,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.update(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.service.delete(id).await
    }
}
