use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::core::error::Result;
use crate::features::admin::forms::FormSubmission;

/// Widget used to render a form field on an admin screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldWidget {
    Text,
    /// Multi-line override for long text fields
    TextArea,
    Number,
    Date,
    Password,
    /// Single-file image upload
    Image,
    /// Multi-file ordered image upload
    Gallery,
}

/// One form field of an admin screen.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: FieldWidget,
    pub required: bool,
}

/// One row of an admin list table.
#[derive(Debug, Clone, Serialize)]
pub struct ListRow {
    pub id: i64,
    pub cells: Vec<String>,
}

/// Entry in the admin navigation menu.
#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub slug: &'static str,
    pub title: &'static str,
}

/// A scaffolded CRUD screen for one entity type.
///
/// Implementations translate between multipart form submissions and the
/// entity's typed DTOs, delegating persistence to the feature service.
#[async_trait]
pub trait AdminResource: Send + Sync {
    /// Path segment under `/admin`
    fn slug(&self) -> &'static str;
    /// Heading and nav label
    fn title(&self) -> &'static str;
    fn fields(&self) -> &'static [FieldSpec];
    fn list_columns(&self) -> &'static [&'static str];

    async fn list_rows(&self) -> Result<Vec<ListRow>>;
    /// Current values keyed by field name, for prefilling the edit form.
    async fn form_values(&self, id: i64) -> Result<BTreeMap<&'static str, String>>;
    async fn create(&self, form: &FormSubmission) -> Result<i64>;
    async fn update(&self, id: i64, form: &FormSubmission) -> Result<()>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// All registered admin screens, in menu order.
pub struct AdminRegistry {
    resources: Vec<Arc<dyn AdminResource>>,
}

impl AdminRegistry {
    pub fn new(resources: Vec<Arc<dyn AdminResource>>) -> Self {
        Self { resources }
    }

    pub fn get(&self, slug: &str) -> Option<&Arc<dyn AdminResource>> {
        self.resources.iter().find(|r| r.slug() == slug)
    }

    pub fn nav(&self) -> Vec<NavEntry> {
        self.resources
            .iter()
            .map(|r| NavEntry {
                slug: r.slug(),
                title: r.title(),
            })
            .collect()
    }
}
