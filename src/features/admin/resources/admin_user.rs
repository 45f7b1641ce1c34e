use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::admin::forms::FormSubmission;
use crate::features::admin::scaffold::{AdminResource, FieldSpec, FieldWidget, ListRow};
use crate::features::auth::AuthService;

pub struct AdminUserAdmin {
    service: Arc<AuthService>,
}

impl AdminUserAdmin {
    pub fn new(service: Arc<AuthService>) -> Self {
        Self { service }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "username", label: "Username", widget: FieldWidget::Text, required: true },
    FieldSpec { name: "password", label: "Password (leave blank to keep)", widget: FieldWidget::Password, required: false },
];

#[async_trait]
impl AdminResource for AdminUserAdmin {
    fn slug(&self) -> &'static str {
        "admin_users"
    }

    fn title(&self) -> &'static str {
        "Admin Users"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn list_columns(&self) -> &'static [&'static str] {
        &["ID", "Username"]
    }

    async fn list_rows(&self) -> Result<Vec<ListRow>> {
        Ok(self
            .service
            .list_users()
            .await?
            .into_iter()
            .map(|u| ListRow {
                id: u.id,
                cells: vec![u.id.to_string(), u.username],
            })
            .collect())
    }

    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>> {
        let u = self.service.get_user(id).await?;
        // the digest never reaches a form
        Ok(BTreeMap::from([("username", u.username)]))
    }

    async fn create(&self, form: &FormSubmission) -> Result<i64> {
        let username = form.required_text("username")?;
        let password = form.required_text("password")?;
        self.service.create_user(&username, &password).await
    }

    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()> {
        let username = form.required_text("username")?;
        let password = form.text("password");
        self.service
            .update_user(id, &username, password.as_deref())
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.service.delete_user(id).await
    }
}
