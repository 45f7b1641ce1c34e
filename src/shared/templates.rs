//! Template environment for the admin surface.
//!
//! Templates are embedded at compile time so the binary carries its own
//! admin screens; the environment is built once on first render.

use minijinja::{Environment, Value};
use std::sync::OnceLock;

use crate::core::error::AppError;

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/admin/layout.html")),
    (
        "dashboard.html",
        include_str!("../../templates/admin/dashboard.html"),
    ),
    ("list.html", include_str!("../../templates/admin/list.html")),
    ("form.html", include_str!("../../templates/admin/form.html")),
    ("login.html", include_str!("../../templates/admin/login.html")),
];

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        }
    }
    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a named admin template with the given context.
pub fn render(template_name: &str, ctx: Value) -> Result<String, AppError> {
    let env = get_environment();
    let template = env
        .get_template(template_name)
        .map_err(|_| AppError::Internal(format!("Template '{}' not found", template_name)))?;

    template
        .render(ctx)
        .map_err(|e| AppError::Internal(format!("Failed to render template: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn login_template_renders() {
        let html = render("login.html", context! { error => Value::UNDEFINED }).unwrap();
        assert!(html.contains("form"));
        assert!(html.contains("password"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert!(render("nope.html", context! {}).is_err());
    }
}
