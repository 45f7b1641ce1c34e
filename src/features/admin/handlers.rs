use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use minijinja::context;
use serde::Deserialize;

use crate::core::error::{AppError, Result};
use crate::features::admin::forms::{self, FormSubmission};
use crate::features::admin::scaffold::{AdminRegistry, AdminResource};
use crate::features::auth::model::AuthenticatedAdmin;
use crate::features::dashboard::DashboardService;
use crate::shared::templates;

#[derive(Clone)]
pub struct AdminState {
    pub registry: Arc<AdminRegistry>,
    pub dashboard: Arc<DashboardService>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub error: Option<String>,
}

fn lookup<'a>(
    registry: &'a AdminRegistry,
    slug: &str,
) -> Result<&'a Arc<dyn AdminResource>> {
    registry
        .get(slug)
        .ok_or_else(|| AppError::NotFound(format!("No admin screen for '{}'", slug)))
}

/// Dashboard index: read-only row counts. Reachable only by direct link;
/// the navigation menu lists entity screens exclusively.
pub async fn dashboard(
    State(state): State<AdminState>,
    admin: AuthenticatedAdmin,
) -> Result<Html<String>> {
    let counts = state.dashboard.counts().await?;
    let html = templates::render(
        "dashboard.html",
        context! {
            nav => state.registry.nav(),
            username => admin.username,
            counts => counts,
        },
    )?;
    Ok(Html(html))
}

/// List table for one entity screen
pub async fn list(
    State(state): State<AdminState>,
    admin: AuthenticatedAdmin,
    Path(resource): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>> {
    let resource = lookup(&state.registry, &resource)?;
    let rows = resource.list_rows().await?;

    let error = query.error.as_deref().map(|code| match code {
        "in_use" => "Delete failed: the row is still referenced by other records".to_string(),
        other => format!("Operation failed: {}", other),
    });

    let html = templates::render(
        "list.html",
        context! {
            nav => state.registry.nav(),
            username => admin.username,
            title => resource.title(),
            slug => resource.slug(),
            columns => resource.list_columns(),
            rows => rows,
            error => error,
        },
    )?;
    Ok(Html(html))
}

/// Blank creation form
pub async fn new_form(
    State(state): State<AdminState>,
    admin: AuthenticatedAdmin,
    Path(resource): Path<String>,
) -> Result<Html<String>> {
    let resource = lookup(&state.registry, &resource)?;
    render_form(&state, &admin, resource, None, None, None)
}

/// Create from a multipart submission
pub async fn create(
    State(state): State<AdminState>,
    admin: AuthenticatedAdmin,
    Path(resource): Path<String>,
    multipart: Multipart,
) -> Result<Response> {
    let resource = Arc::clone(lookup(&state.registry, &resource)?);
    let form = forms::parse_multipart(multipart).await?;

    match resource.create(&form).await {
        Ok(_) => Ok(Redirect::to(&format!("/admin/{}", resource.slug())).into_response()),
        Err(e) if is_form_error(&e) => {
            let html =
                render_form(&state, &admin, &resource, None, Some(&form), Some(&user_message(e)))?;
            Ok(html.into_response())
        }
        Err(e) => Err(e),
    }
}

/// Prefilled edit form
pub async fn edit_form(
    State(state): State<AdminState>,
    admin: AuthenticatedAdmin,
    Path((resource, id)): Path<(String, i64)>,
) -> Result<Html<String>> {
    let resource = lookup(&state.registry, &resource)?;
    let values = resource.form_values(id).await?;
    let values: std::collections::BTreeMap<String, String> = values
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

    let html = templates::render(
        "form.html",
        context! {
            nav => state.registry.nav(),
            username => admin.username,
            title => format!("Edit {}", resource.title()),
            action => format!("/admin/{}/{}/edit", resource.slug(), id),
            fields => resource.fields(),
            values => values,
        },
    )?;
    Ok(Html(html))
}

/// Update from a multipart submission
pub async fn update(
    State(state): State<AdminState>,
    admin: AuthenticatedAdmin,
    Path((resource, id)): Path<(String, i64)>,
    multipart: Multipart,
) -> Result<Response> {
    let resource = Arc::clone(lookup(&state.registry, &resource)?);
    let form = forms::parse_multipart(multipart).await?;

    match resource.update(id, &form).await {
        Ok(()) => Ok(Redirect::to(&format!("/admin/{}", resource.slug())).into_response()),
        Err(e) if is_form_error(&e) => {
            let html = render_form(
                &state,
                &admin,
                &resource,
                Some(id),
                Some(&form),
                Some(&user_message(e)),
            )?;
            Ok(html.into_response())
        }
        Err(e) => Err(e),
    }
}

/// Delete a row, then return to the list. A restricted delete surfaces as a
/// flash message on the list instead of an error body.
pub async fn delete(
    State(state): State<AdminState>,
    _admin: AuthenticatedAdmin,
    Path((resource, id)): Path<(String, i64)>,
) -> Result<Response> {
    let resource = lookup(&state.registry, &resource)?;

    match resource.delete(id).await {
        Ok(()) => Ok(Redirect::to(&format!("/admin/{}", resource.slug())).into_response()),
        Err(AppError::Database(e))
            if e.as_database_error()
                .map(|db| matches!(db.kind(), sqlx::error::ErrorKind::ForeignKeyViolation))
                .unwrap_or(false) =>
        {
            Ok(Redirect::to(&format!("/admin/{}?error=in_use", resource.slug())).into_response())
        }
        Err(e) => Err(e),
    }
}

fn is_form_error(e: &AppError) -> bool {
    matches!(
        e,
        AppError::Validation(_) | AppError::BadRequest(_) | AppError::Conflict(_)
    )
}

fn user_message(e: AppError) -> String {
    match e {
        AppError::Validation(msg) | AppError::BadRequest(msg) | AppError::Conflict(msg) => msg,
        other => other.to_string(),
    }
}

fn render_form(
    state: &AdminState,
    admin: &AuthenticatedAdmin,
    resource: &Arc<dyn AdminResource>,
    id: Option<i64>,
    form: Option<&FormSubmission>,
    error: Option<&str>,
) -> Result<Html<String>> {
    let (title, action) = match id {
        Some(id) => (
            format!("Edit {}", resource.title()),
            format!("/admin/{}/{}/edit", resource.slug(), id),
        ),
        None => (
            format!("New {}", resource.title()),
            format!("/admin/{}/new", resource.slug()),
        ),
    };

    let values = form
        .map(|f| f.values().clone())
        .unwrap_or_default();

    let html = templates::render(
        "form.html",
        context! {
            nav => state.registry.nav(),
            username => admin.username,
            title => title,
            action => action,
            fields => resource.fields(),
            values => values,
            error => error,
        },
    )?;
    Ok(Html(html))
}
