use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::admin::forms::FormSubmission;
use crate::features::admin::scaffold::{AdminResource, FieldSpec, FieldWidget, ListRow};
use crate::features::newsletter::dtos::{
    CreateNewsletterSubscriberDto, UpdateNewsletterSubscriberDto,
};
use crate::features::newsletter::NewsletterService;

pub struct SubscriberAdmin {
    service: Arc<NewsletterService>,
}

impl SubscriberAdmin {
    pub fn new(service: Arc<NewsletterService>) -> Self {
        Self { service }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "email", label: "Email", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "name", label: "Name", widget: FieldWidget::Text, required: false },
];

#[async_trait]
impl AdminResource for SubscriberAdmin {
    fn slug(&self) -> &'static str {
        "newsletter_subscribers"
    }

    fn title(&self) -> &'static str {
        "Newsletter Subscribers"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn list_columns(&self) -> &'static [&'static str] {
        &["ID", "Email", "Name", "Subscribed"]
    }

    async fn list_rows(&self) -> Result<Vec<ListRow>> {
        Ok(self
            .service
            .list()
            .await?
            .into_iter()
            .map(|s| ListRow {
                id: s.id,
                cells: vec![
                    s.id.to_string(),
                    s.email,
                    s.name.unwrap_or_default(),
                    s.created_at.format("%Y-%m-%d %H:%M").to_string(),
                ],
            })
            .collect())
    }

    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>> {
        let s = self.service.get(id).await?;
        Ok(BTreeMap::from([
            ("email", s.email),
            ("name", s.name.unwrap_or_default()),
        ]))
    }

    async fn create(&self, form: &FormSubmission) -> Result<i64> {
        let dto = CreateNewsletterSubscriberDto {
            email: form.required_text("email")?,
            name: form.text("name"),
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.create(dto).await
    }

    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()> {
        let dto = UpdateNewsletterSubscriberDto {
            email: form.text("email"),
            name: form.text("name"),
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.update(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.service.delete(id).await
    }
}
