use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::admin::forms::FormSubmission;
use crate::features::admin::scaffold::{AdminResource, FieldSpec, FieldWidget, ListRow};
use crate::features::companies::dtos::{CreateCompanyDto, UpdateCompanyDto};
use crate::features::companies::CompanyService;

pub struct CompanyAdmin {
    service: Arc<CompanyService>,
}

impl CompanyAdmin {
    pub fn new(service: Arc<CompanyService>) -> Self {
        Self { service }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", label: "Name", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "mission", label: "Mission", widget: FieldWidget::TextArea, required: false },
    FieldSpec { name: "vision", label: "Vision", widget: FieldWidget::TextArea, required: false },
    FieldSpec { name: "phone", label: "Phone", widget: FieldWidget::Text, required: false },
    FieldSpec { name: "email", label: "Email", widget: FieldWidget::Text, required: false },
    FieldSpec { name: "address", label: "Address", widget: FieldWidget::TextArea, required: false },
    FieldSpec { name: "map_coordinates", label: "Map coordinates", widget: FieldWidget::Text, required: false },
];

#[async_trait]
impl AdminResource for CompanyAdmin {
    fn slug(&self) -> &'static str {
        "companies"
    }

    fn title(&self) -> &'static str {
        "Companies"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn list_columns(&self) -> &'static [&'static str] {
        &["ID", "Name", "Email", "Phone"]
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
                    c.email.unwrap_or_default(),
                    c.phone.unwrap_or_default(),
                ],
            })
            .collect())
    }

    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>> {
        let c = self.service.get(id).await?;
        Ok(BTreeMap::from([
            ("name", c.name),
            ("mission", c.mission.unwrap_or_default()),
            ("vision", c.vision.unwrap_or_default()),
            ("phone", c.phone.unwrap_or_default()),
            ("email", c.email.unwrap_or_default()),
            ("address", c.address.unwrap_or_default()),
            ("map_coordinates", c.map_coordinates.unwrap_or_default()),
        ]))
    }

    async fn create(&self, form: &FormSubmission) -> Result<i64> {
        let dto = CreateCompanyDto {
            name: form.required_text("name")?,
            mission: form.text("mission"),
            vision: form.text("vision"),
            phone: form.text("phone"),
            email: form.text("email"),
            address: form.text("address"),
            map_coordinates: form.text("map_coordinates"),
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.create(dto).await
    }

    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()> {
        let dto = UpdateCompanyDto {
            name: form.text("name"),
            mission: form.text("mission"),
            vision: form.text("vision"),
            phone: form.text("phone"),
            email: form.text("email"),
            address: form.text("address"),
            map_coordinates: form.text("map_coordinates"),
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.service.update(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.service.delete(id).await
    }
}
