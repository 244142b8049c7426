//! HTML template registry
//!
//! Wraps a MiniJinja environment. Templates come either from the copies
//! embedded in the binary or from a directory on disk (for local overrides).
//! Auto-escaping follows the template name: `.html` templates escape every
//! value unless it was passed as a safe string.

use std::path::Path;

use minijinja::{context, path_loader, Environment};
use serde::Serialize;

use crate::views::{Markup, ViewError};

/// Page shell: binds `page_title` and `content`
pub const BASE_TEMPLATE: &str = "base.html";
/// Table fragment: binds `table` and `data`
pub const TABLE_TEMPLATE: &str = "table.html";
/// Detail fragment: binds `detail` and `record`
pub const DETAIL_TEMPLATE: &str = "detail.html";

const EMBEDDED: &[(&str, &str)] = &[
    (BASE_TEMPLATE, include_str!("../templates/base.html")),
    (TABLE_TEMPLATE, include_str!("../templates/table.html")),
    (DETAIL_TEMPLATE, include_str!("../templates/detail.html")),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Registry with no templates
    pub fn empty() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Registry holding the built-in templates
    pub fn embedded() -> Result<Self, ViewError> {
        let mut env = Environment::new();
        for &(name, source) in EMBEDDED {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Registry that loads templates lazily from `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir.as_ref().to_path_buf()));
        Self { env }
    }

    /// Directory templates when configured, embedded ones otherwise
    pub fn load(template_dir: Option<&Path>) -> Result<Self, ViewError> {
        match template_dir {
            Some(dir) => {
                tracing::info!("Loading templates from {}", dir.display());
                Ok(Self::from_dir(dir))
            }
            None => {
                tracing::debug!("Using embedded templates");
                Self::embedded()
            }
        }
    }

    /// Register (or replace) a template from source
    pub fn add(&mut self, name: &str, source: &str) -> Result<(), ViewError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, ViewError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }

    /// Render a whole page around an already-rendered fragment
    pub fn render_page(&self, page_title: &str, content: &Markup) -> Result<String, ViewError> {
        self.render(
            BASE_TEMPLATE,
            context! {
                page_title => page_title,
                content => content.to_value(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_templates_registered() {
        let templates = Templates::embedded().unwrap();
        for name in [BASE_TEMPLATE, TABLE_TEMPLATE, DETAIL_TEMPLATE] {
            assert!(templates.env.get_template(name).is_ok(), "{} missing", name);
        }
        assert!(templates.env.get_template("edit.html").is_err());
    }

    #[test]
    fn test_render_unknown_template() {
        let templates = Templates::empty();
        let err = templates.render("nope.html", context! {}).unwrap_err();
        assert!(matches!(err, ViewError::TemplateNotFound(_)));
    }

    #[test]
    fn test_html_autoescape() {
        let mut templates = Templates::empty();
        templates.add("x.html", "<p>{{ v }}</p>").unwrap();
        let html = templates
            .render("x.html", context! { v => "<script>" })
            .unwrap();
        assert_eq!(html, "<p>&lt;script&gt;</p>");
    }

    #[test]
    fn test_render_page_embeds_markup_unescaped() {
        let templates = Templates::embedded().unwrap();
        let html = templates
            .render_page("Contacts & Co", &Markup::new("<table></table>"))
            .unwrap();
        assert!(html.contains("<title>Contacts &amp; Co</title>"));
        assert!(html.contains("<table></table>"));
    }

    #[test]
    fn test_from_dir_loads_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hello.html"), "Hello {{ name }}").unwrap();

        let templates = Templates::from_dir(dir.path());
        let out = templates
            .render("hello.html", context! { name => "Cadence" })
            .unwrap();
        assert_eq!(out, "Hello Cadence");

        let err = templates.render("absent.html", context! {}).unwrap_err();
        assert!(matches!(err, ViewError::TemplateNotFound(_)));
    }

    #[test]
    fn test_load_prefers_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("base.html"), "custom:{{ page_title }}").unwrap();

        let templates = Templates::load(Some(dir.path())).unwrap();
        let out = templates
            .render_page("Contacts", &Markup::new(""))
            .unwrap();
        assert_eq!(out, "custom:Contacts");
    }
}
