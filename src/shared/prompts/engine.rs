//! Template engine for prompt management using Jinja2 syntax.
//!
//! Templates are embedded at compile time so the binary stays
//! self-contained; add new templates to the `TEMPLATES` table.

use minijinja::{Environment, Value};
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// All prompt templates, keyed by their path under `templates/prompts/`.
const TEMPLATES: &[(&str, &str)] = &[(
    "summary/laporan_paguyuban.jinja",
    include_str!("../../../templates/prompts/summary/laporan_paguyuban.jinja"),
)];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    for (name, content) in TEMPLATES {
        if let Err(e) = env.add_template(name, content) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        }
    }
    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with the given context.
///
/// # Arguments
/// * `template_name` - The template path relative to `templates/prompts/`
///   (e.g., "summary/laporan_paguyuban.jinja")
/// * `ctx` - A HashMap of variable names to values
pub fn render_template(
    template_name: &str,
    ctx: &HashMap<&str, Value>,
) -> Result<String, TemplateError> {
    let env = get_environment();

    let template = env
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    let render_ctx = Value::from_iter(ctx.iter().map(|(k, v)| (*k, v.clone())));

    template
        .render(render_ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Check if a template exists
#[allow(dead_code)]
pub fn template_exists(template_name: &str) -> bool {
    get_environment().get_template(template_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_missing_template() {
        let ctx = HashMap::new();
        let result = render_template("nonexistent.jinja", &ctx);
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_render_laporan_template() {
        let mut ctx = HashMap::new();
        ctx.insert("data_warga", Value::from("[]"));
        ctx.insert("data_keluarga", Value::from("[]"));
        ctx.insert("data_iuran", Value::from("[]"));
        ctx.insert("periode", Value::from("2024-06"));

        let rendered = render_template("summary/laporan_paguyuban.jinja", &ctx).unwrap();
        assert!(rendered.contains("Ringkasan Umum"));
        assert!(rendered.contains("Analisis Demografi"));
        assert!(rendered.contains("Status Keuangan"));
        assert!(rendered.contains("Kesimpulan"));
        assert!(rendered.contains("Periode 2024-06"));
    }
}
