use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::admin::forms::FormSubmission;
use crate::features::admin::scaffold::{AdminResource, FieldSpec, FieldWidget, ListRow};
use crate::features::contact::dtos::{CreateContactMessageDto, UpdateContactMessageDto};
use crate::features::contact::ContactMessageService;

pub struct ContactMessageAdmin {
    service: Arc<ContactMessageService>,
}

impl ContactMessageAdmin {
    pub fn new(service: Arc<ContactMessageService>) -> Self {
        Self { service }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", label: "Name", widget: FieldWidget::Text, required: false },
    FieldSpec { name: "email", label: "Email", widget: FieldWidget::Text, required: false },
    FieldSpec { name: "phone", label: "Phone", widget: FieldWidget::Text, required: false },
    FieldSpec { name: "message", label: "Message", widget: FieldWidget::TextArea, required: true },
];

#[async_trait]
impl AdminResource for ContactMessageAdmin {
    fn slug(&self) -> &'static str {
        "contact_messages"
    }

    fn title(&self) -> &'static str {
        "Contact Messages"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn list_columns(&self) -> &'static [&'static str] {
        &["ID", "Name", "Email", "Received"]
    }

    async fn list_rows(&self) -> Result<Vec<ListRow>> {
        Ok(self
            .service
            .list()
            .await?
            .into_iter()
            .map(|m| ListRow {
                id: m.id,
                cells: vec![
                    m.id.to_string(),
                    m.name.unwrap_or_default(),
                    m.email.unwrap_or_default(),
                    m.created_at.format("%Y-%m-%d %H:%M").to_string(),
                ],
            })
            .collect())
    }

    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>> {
        let m = self.service.get(id).await?;
        Ok(BTreeMap::from([
            ("name", m.name.unwrap_or_default()),
            ("email", m.email.unwrap_or_default()),
            ("phone", m.phone.unwrap_or_default()),
            ("message", m.message),
        ]))
    }

    async fn create(&self, form: &FormSubmission) -> Result<i64> {
        let dto = CreateContactMessageDto {
            name: form.text("name"),
            email: form.text("email"),
            phone: form.text("phone"),
            message: form.required_text("message")?,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.create(dto).await
    }

    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()> {
        let dto = UpdateContactMessageDto {
            name: form.text("name"),
            email: form.text("email"),
            phone: form.text("phone"),
            message: form.text("message"),
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.update(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.service.delete(id).await
    }
}
